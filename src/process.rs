//! Reading a Markdown file, normalizing it, and writing the result next to it.

use crate::error::{Error, Result};
use crate::normalize::normalize_counted;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Suffix inserted before the extension of the output file.
pub const DEFAULT_SUFFIX: &str = "_processed";

/// Configuration for file processing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProcessConfig {
    /// Inserted between the file stem and its extension.
    pub suffix: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl ProcessConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| Error::Config(format!("Invalid TOML: {}", e)))
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&content)
    }
}

/// Derive the output path for `input`: `dir/doc.md` becomes `dir/doc<suffix>.md`.
///
/// Files without an extension get the suffix appended. Only the last
/// extension is kept after the suffix (`a.tar.gz` becomes `a.tar<suffix>.gz`).
pub fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::new();
    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(suffix);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Normalize the math delimiters of one file, writing the result to the
/// derived output path. The input file is left untouched.
///
/// Returns the path that was written.
pub fn process_file(input: &Path, config: &ProcessConfig) -> Result<PathBuf> {
    let original = fs::read_to_string(input).map_err(|e| Error::io(input, e))?;

    let (modified, subs) = normalize_counted(&original);
    debug!(
        input = %input.display(),
        inline = subs.inline,
        display = subs.display,
        "normalized math delimiters"
    );

    let output = output_path(input, &config.suffix);
    fs::write(&output, &modified).map_err(|e| Error::io(&output, e))?;
    debug!(output = %output.display(), bytes = modified.len(), "wrote output");

    Ok(output)
}
