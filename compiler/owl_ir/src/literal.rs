//! Literal string conventions.
//!
//! A literal is any text delimited by [`QUOTE`] on both ends. The delimiters
//! stay in the atom text so evaluation can tell literals from names.

use std::borrow::Cow;

/// The string delimiter.
pub const QUOTE: char = '`';

/// Truth value produced by comparisons.
pub const TRUE: &str = "1";

/// False value; the only text `?` treats as false.
pub const FALSE: &str = "0";

/// Returns `true` if `text` starts and ends with the quote character.
pub fn is_literal(text: &str) -> bool {
    text.len() >= 2 && text.starts_with(QUOTE) && text.ends_with(QUOTE)
}

/// Removes one pair of enclosing delimiters, if present.
///
/// An unterminated literal (only a leading quote) loses that quote too.
pub fn strip_quotes(text: &str) -> &str {
    if is_literal(text) {
        &text[1..text.len() - 1]
    } else if let Some(rest) = text.strip_prefix(QUOTE) {
        rest
    } else {
        text
    }
}

/// Replaces the two-character sequence `\n` with a newline.
pub fn unescape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains("\\n") {
        Cow::Owned(text.replace("\\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Wraps `text` in delimiters.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push(QUOTE);
    out.push_str(text);
    out.push(QUOTE);
    out
}
