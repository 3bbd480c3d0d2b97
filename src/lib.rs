//! # latex-delims
//!
//! Rewrites LaTeX-style math delimiters in Markdown into the dollar-sign form
//! understood by MyST `dollarmath` and similar renderers.
//!
//! ## Rules
//!
//! - Inline: `\(E = mc^2\)` becomes `$E = mc^2$`. The span must fit on one line.
//! - Display: `\[ \int_0^1 x dx \]` becomes a `$$` block:
//!
//! ```text
//!
//! $$
//! \int_0^1 x dx
//! $$
//!
//! ```
//!
//! Whitespace just inside `\[` and `\]` is dropped, and display spans may cover
//! several lines. Inline rewriting runs before display rewriting. Nothing else
//! in the text is touched, and there is no awareness of Markdown structure, so
//! delimiters inside code blocks are rewritten too.
//!
//! ## Quick Start
//!
//! ```rust
//! use latex_delims::normalize;
//!
//! let input = r"Let \(x > 0\). Then \[ x^2 > 0 \]";
//! assert_eq!(normalize(input), "Let $x > 0$. Then \n$$\nx^2 > 0\n$$\n");
//! ```
//!
//! ## Files
//!
//! [`process_file`] writes `doc_processed.md` next to `doc.md`; the
//! `latex-delims` binary wraps it.

pub mod error;
pub mod normalize;
pub mod process;
pub mod site;

// Convenience re-exports
pub use error::{Error, Result};
pub use normalize::{normalize, normalize_counted, Substitutions};
pub use process::{output_path, process_file, ProcessConfig};
pub use site::SiteConfig;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_markdown_document() {
        let input = r#"# Kinematics

Position is \(x(t)\) and velocity is \(v = \dot{x}\).

\[
    x(t) = x_0 + v_0 t + \tfrac{1}{2} a t^2
\]

Already converted: $a$ and
$$
b
$$
"#;

        let expected = r#"# Kinematics

Position is $x(t)$ and velocity is $v = \dot{x}$.


$$
x(t) = x_0 + v_0 t + \tfrac{1}{2} a t^2
$$


Already converted: $a$ and
$$
b
$$
"#;

        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_normalized_output_is_stable() {
        let once = normalize(r"\(a\) and \[ b \]");
        assert_eq!(normalize(&once), once);
    }
}
