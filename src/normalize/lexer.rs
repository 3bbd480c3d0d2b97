//! Recognizers for LaTeX-style math delimiters.

use nom::{
    bytes::complete::{tag, take_till, take_until, take_while},
    IResult,
};

pub const INLINE_OPEN: &str = "\\(";
pub const INLINE_CLOSE: &str = "\\)";
pub const DISPLAY_OPEN: &str = "\\[";
pub const DISPLAY_CLOSE: &str = "\\]";

/// Parse inline math (`\(...\)`), returning the content between the delimiters.
///
/// The opener pairs with the nearest closer, and the content may not span a
/// line break. The search for the closer never looks past the current line.
pub fn latex_inline_math(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag(INLINE_OPEN)(input)?;
    let (_, line) = take_till(|c: char| c == '\n')(input)?;
    let (_, content) = take_until(INLINE_CLOSE)(line)?;
    let (input, _) = tag(INLINE_CLOSE)(&input[content.len()..])?;
    Ok((input, content))
}

/// Parse display math (`\[...\]`), returning the content with surrounding
/// whitespace removed. Line breaks inside are allowed.
pub fn latex_display_math(input: &str) -> IResult<&str, &str> {
    let (input, _) = tag(DISPLAY_OPEN)(input)?;
    let (input, _) = take_while(is_space)(input)?;
    let (input, content) = take_until(DISPLAY_CLOSE)(input)?;
    let (input, _) = tag(DISPLAY_CLOSE)(input)?;
    Ok((input, content.trim_end_matches(is_space)))
}

/// Unicode whitespace plus the ASCII information separators (U+001C..U+001F),
/// which regex `\s` also treats as space.
fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
