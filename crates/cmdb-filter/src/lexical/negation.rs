//! `not` keyword recognizer.

use crate::errors::{Expected, Scan, syntax_error};
use crate::window::Window;

const KEYWORD: &[u8] = b"not";

/// `true` when the window holds the word `not` at `start` rather than a
/// longer identifier such as `nothing`.
pub(crate) fn is_negation_keyword(window: &Window<'_>, start: usize) -> bool {
    window.starts_with(start, KEYWORD)
        && window
            .at(start + KEYWORD.len())
            .is_some_and(|b| b == b'(' || b.is_ascii_whitespace())
}

pub(crate) fn negation(window: &Window<'_>, start: usize) -> Scan {
    if !is_negation_keyword(window, start) {
        return Err(syntax_error(Expected::Negation, start));
    }
    let keyword_end = start + KEYWORD.len();
    let paren = window.skip_whitespace(keyword_end);
    if window.at(paren) == Some(b'(') {
        Ok(keyword_end)
    } else {
        Err(syntax_error(Expected::OpeningParen, paren))
    }
}

/// Recognize the `not` keyword introducing a negated statement.
///
/// The keyword must start exactly at `start` and be followed, after optional
/// whitespace, by `(`. The cursor points just past the three letters of the
/// keyword, not past the parenthesis.
///
/// # Errors
/// Returns [`ScanError::Syntax`](crate::ScanError::Syntax) when the window
/// does not open with `not` or no `(` follows it.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_negation;
/// assert_eq!(scan_negation("not   ()", 0, 8), Ok(3));
/// assert!(scan_negation("notA", 0, 4).is_err());
/// ```
pub fn scan_negation(input: &str, start: usize, end: usize) -> Scan {
    negation(&Window::new(input, end), start)
}
