//! Documentation site configuration.
//!
//! The site generator reads this record to build the published book. Only the
//! data lives here; theming, sidebars, and math rendering happen downstream.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// MyST extension that turns `$...$` and `$$...$$` into math.
pub const MYST_DOLLARMATH: &str = "dollarmath";

/// Generator extension that does the same for reStructuredText sources.
pub const MATH_DOLLAR_EXTENSION: &str = "sphinx_math_dollar";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub project: Project,
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub myst_extensions: Vec<String>,
    /// File extension (with leading dot) to content type.
    #[serde(default)]
    pub source_suffix: BTreeMap<String, String>,
    #[serde(default = "default_root_doc")]
    pub root_doc: String,
    #[serde(default)]
    pub templates_path: Vec<String>,
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub html: HtmlOptions,
    #[serde(default)]
    pub mathjax: Option<MathJaxDelimiters>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub author: String,
    pub copyright: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct HtmlOptions {
    pub theme: Option<String>,
    pub static_path: Vec<String>,
    pub base_url: Option<String>,
    pub use_index: bool,
    pub copy_source: bool,
    /// Page glob to the ordered list of sidebar templates.
    pub sidebars: BTreeMap<String, Vec<String>>,
}

/// Delimiter pairs the in-browser renderer scans for.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct MathJaxDelimiters {
    pub inline: Vec<(String, String)>,
    pub display: Vec<(String, String)>,
}

fn default_root_doc() -> String {
    "index".to_string()
}

impl SiteConfig {
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Content type registered for a source extension (`"md"` or `".md"`).
    pub fn content_type(&self, ext: &str) -> Option<&str> {
        let key = if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        };
        self.source_suffix.get(&key).map(String::as_str)
    }

    /// Whether the site renders dollar-delimited math, i.e. whether it can
    /// consume normalized output.
    pub fn renders_dollar_math(&self) -> bool {
        self.myst_extensions.iter().any(|e| e == MYST_DOLLARMATH)
            || self.extensions.iter().any(|e| e == MATH_DOLLAR_EXTENSION)
    }
}
