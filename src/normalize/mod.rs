//! Delimiter normalization: `\(...\)` to `$...$` and `\[...\]` to `$$` blocks.

mod lexer;

pub use lexer::{latex_display_math, latex_inline_math};

use lexer::{DISPLAY_OPEN, INLINE_OPEN};
use nom::IResult;

/// Number of rewrites performed by one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Substitutions {
    pub inline: usize,
    pub display: usize,
}

impl Substitutions {
    pub fn total(&self) -> usize {
        self.inline + self.display
    }
}

/// Rewrite LaTeX math delimiters into dollar-sign form.
///
/// Inline math `\(...\)` becomes `$...$`. Display math `\[...\]` becomes a
/// `$$` block on its own lines, with whitespace inside the brackets trimmed.
/// Everything else is copied through, including delimiters inside code.
///
/// # Example
///
/// ```rust
/// use latex_delims::normalize;
///
/// assert_eq!(normalize(r"\(x+y\)"), "$x+y$");
/// assert_eq!(normalize(r"\[ x^2 \]"), "\n$$\nx^2\n$$\n");
/// ```
pub fn normalize(text: &str) -> String {
    normalize_counted(text).0
}

/// Same as [`normalize`], also reporting how many spans were rewritten.
pub fn normalize_counted(text: &str) -> (String, Substitutions) {
    // Inline first; display runs over the already rewritten text.
    let (text_inline, inline) = replace_all(text, INLINE_OPEN, latex_inline_math, |out, math| {
        out.push('$');
        out.push_str(math);
        out.push('$');
    });

    let (text_display, display) =
        replace_all(&text_inline, DISPLAY_OPEN, latex_display_math, |out, math| {
            out.push_str("\n$$\n");
            out.push_str(math);
            out.push_str("\n$$\n");
        });

    (text_display, Substitutions { inline, display })
}

/// Replace every non-overlapping span recognized by `parser`.
///
/// Candidates start at each occurrence of `open`. When the parser rejects a
/// candidate the opener is copied verbatim and scanning resumes after it.
fn replace_all<'a, P, F>(text: &'a str, open: &str, mut parser: P, mut emit: F) -> (String, usize)
where
    P: FnMut(&'a str) -> IResult<&'a str, &'a str>,
    F: FnMut(&mut String, &str),
{
    let mut out = String::with_capacity(text.len());
    let mut count = 0;
    let mut remaining = text;

    while let Some(pos) = remaining.find(open) {
        out.push_str(&remaining[..pos]);
        let candidate = &remaining[pos..];

        match parser(candidate) {
            Ok((rest, math)) => {
                emit(&mut out, math);
                count += 1;
                remaining = rest;
            }
            Err(_) => {
                out.push_str(open);
                remaining = &candidate[open.len()..];
            }
        }
    }

    out.push_str(remaining);
    (out, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline() {
        assert_eq!(normalize("\\(x+y\\)"), "$x+y$");
    }

    #[test]
    fn test_display() {
        assert_eq!(normalize("\\[ x^2 \\]"), "\n$$\nx^2\n$$\n");
    }

    #[test]
    fn test_plain_text_unchanged() {
        let input = "# Title\n\nSome $a$ and $$b$$ math, `code`, and a \\ backslash.\n";
        assert_eq!(normalize(input), input);
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_both_forms() {
        assert_eq!(normalize("\\(a\\) and \\[b\\]"), "$a$ and \n$$\nb\n$$\n");
    }

    #[test]
    fn test_non_greedy_inline() {
        assert_eq!(normalize("\\(a\\) text \\(b\\)"), "$a$ text $b$");
    }

    #[test]
    fn test_multiline_display() {
        let input = "Before\n\\[\n  \\begin{aligned}\n  a &= b \\\\\n  c &= d\n  \\end{aligned}\n\\]\nAfter";
        let expected = "Before\n\n$$\n\\begin{aligned}\n  a &= b \\\\\n  c &= d\n  \\end{aligned}\n$$\n\nAfter";
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_inline_does_not_span_lines() {
        let input = "\\(a\nb\\) and \\(c\\)";
        assert_eq!(normalize(input), "\\(a\nb\\) and $c$");
    }

    #[test]
    fn test_unterminated_delimiters_kept() {
        assert_eq!(normalize("open \\( only"), "open \\( only");
        assert_eq!(normalize("open \\[ only"), "open \\[ only");
        assert_eq!(normalize("stray \\) and \\]"), "stray \\) and \\]");
    }

    #[test]
    fn test_empty_spans() {
        assert_eq!(normalize("\\(\\)"), "$$");
        assert_eq!(normalize("\\[  \\]"), "\n$$\n\n$$\n");
    }

    #[test]
    fn test_rewrites_inside_code_fences() {
        let input = "```\n\\(x\\)\n```";
        assert_eq!(normalize(input), "```\n$x$\n```");
    }

    #[test]
    fn test_same_kind_opener_inside_span() {
        assert_eq!(normalize("\\(a \\(b\\)"), "$a \\(b$");
        assert_eq!(normalize("\\[a \\[b\\]"), "\n$$\na \\[b\n$$\n");
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(normalize("é \\(α + β\\) ü"), "é $α + β$ ü");
    }

    #[test]
    fn test_inline_allows_carriage_return() {
        assert_eq!(normalize("\\(a\r\\)"), "$a\r$");
    }

    #[test]
    fn test_display_trims_unicode_whitespace() {
        assert_eq!(normalize("\\[\u{3000}x\u{3000}\\]"), "\n$$\nx\n$$\n");
        assert_eq!(normalize("\\[\u{1f}$\u{c}\\]"), "\n$$\n$\n$$\n");
    }

    #[test]
    fn test_many_unclosed_inline_openers() {
        let input = "see \\( here\n".repeat(100_000);
        let (text, subs) = normalize_counted(&input);
        assert_eq!(text, input);
        assert_eq!(subs.total(), 0);

        let input = format!("{}\\(x\\)", "see \\( here\n".repeat(100_000));
        assert!(normalize(&input).ends_with("see \\( here\n$x$"));
    }

    #[test]
    fn test_counts() {
        let (text, subs) = normalize_counted("\\(a\\), \\(b\\) and \\[c\\]");
        assert_eq!(text, "$a$, $b$ and \n$$\nc\n$$\n");
        assert_eq!(subs, Substitutions { inline: 2, display: 1 });
        assert_eq!(subs.total(), 3);
    }
}
