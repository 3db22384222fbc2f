//! Attribute key recognizer.

use crate::errors::{Expected, Scan, syntax_error};
use crate::window::Window;

pub(crate) fn key(window: &Window<'_>, start: usize) -> Scan {
    if !window.at(start).is_some_and(|b| b.is_ascii_alphabetic()) {
        return Err(syntax_error(Expected::Key, start));
    }
    let mut index = start + 1;
    while window.at(index).is_some_and(|b| b.is_ascii_alphanumeric()) {
        index += 1;
    }
    match window.at(index) {
        Some(b'=') => Ok(index),
        Some(b) if b.is_ascii_whitespace() => Ok(index),
        _ => Err(syntax_error(Expected::Key, index)),
    }
}

/// Recognize an attribute key of the form `[A-Za-z][A-Za-z0-9]*`.
///
/// The key must begin exactly at `start` and be followed, inside the window,
/// by whitespace or `=`. The cursor points just past the key.
///
/// # Errors
/// Returns [`ScanError::Syntax`](crate::ScanError::Syntax) when the window
/// does not open with a key or the key runs into the end of the window.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_key;
/// assert_eq!(scan_key("name123 = 1", 0, 11), Ok(7));
/// assert!(scan_key("name123", 0, 7).is_err());
/// ```
pub fn scan_key(input: &str, start: usize, end: usize) -> Scan {
    key(&Window::new(input, end), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::test_support::{scan_err, scan_ok};
    use rstest::rstest;

    #[rstest]
    #[case("name ", 5, 4)]
    #[case("name= ", 5, 4)]
    #[case("name123 = ", 10, 7)]
    #[case("n\t", 2, 1)]
    fn accepts_keys_followed_by_a_boundary(
        #[case] input: &str,
        #[case] end: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(scan_ok(scan_key(input, 0, end), input), expected);
    }

    #[rstest]
    #[case("name123", 7)]
    #[case(" name123 = ", 11)]
    #[case("name123-", 8)]
    #[case("name123[", 8)]
    #[case("name123(", 8)]
    #[case("123name(", 8)]
    #[case("", 0)]
    fn rejects_malformed_keys(#[case] input: &str, #[case] end: usize) {
        let err = scan_err(scan_key(input, 0, end), input);
        assert!(matches!(
            err,
            crate::ScanError::Syntax {
                expected: Expected::Key,
                ..
            }
        ));
    }

    #[test]
    fn boundary_must_lie_inside_the_window() {
        assert!(scan_key("name =", 0, 4).is_err());
    }

    #[test]
    fn scans_from_an_inner_offset() {
        let input = "(attr = 1)";
        assert_eq!(scan_ok(scan_key(input, 1, 9), input), 5);
    }
}
