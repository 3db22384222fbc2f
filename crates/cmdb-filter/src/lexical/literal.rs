//! Literal recognizers: quoted strings, decimal numbers and bracketed lists.

use crate::errors::{Expected, Scan, syntax_error};
use crate::window::Window;

pub(crate) fn string(window: &Window<'_>, start: usize) -> Scan {
    let Some(quote @ (b'"' | b'\'')) = window.at(start) else {
        return Err(syntax_error(Expected::String, start));
    };
    let mut index = start + 1;
    while let Some(b) = window.at(index) {
        if b == b'\\' && window.at(index + 1) == Some(quote) {
            index += 2;
        } else if b == quote {
            return Ok(index + 1);
        } else {
            index += 1;
        }
    }
    Err(syntax_error(Expected::String, index))
}

fn digits(window: &Window<'_>, mut index: usize) -> usize {
    while window.at(index).is_some_and(|b| b.is_ascii_digit()) {
        index += 1;
    }
    index
}

pub(crate) fn number(window: &Window<'_>, start: usize) -> Scan {
    let mut index = digits(window, start);
    if index == start {
        return Err(syntax_error(Expected::Number, start));
    }
    if window.at(index) == Some(b'.') {
        let fraction_end = digits(window, index + 1);
        if fraction_end > index + 1 {
            index = fraction_end;
        }
    }
    Ok(index)
}

/// A number, or failing that a string.
pub(crate) fn scalar(window: &Window<'_>, start: usize) -> Scan {
    number(window, start)
        .or_else(|_| string(window, start))
        .map_err(|_| syntax_error(Expected::Value, start))
}

pub(crate) fn list(window: &Window<'_>, start: usize) -> Scan {
    if window.at(start) != Some(b'[') {
        return Err(syntax_error(Expected::List, start));
    }
    let mut index = window.skip_whitespace(start + 1);
    loop {
        index = window.skip_whitespace(scalar(window, index)?);
        match window.at(index) {
            Some(b',') => index = window.skip_whitespace(index + 1),
            Some(b']') => return Ok(index + 1),
            _ => return Err(syntax_error(Expected::List, index)),
        }
    }
}

/// Recognize a string literal delimited by `"` or `'`.
///
/// Inside the literal a backslash-escaped copy of the opening delimiter does
/// not close it, and the other quote character needs no escape. The cursor
/// points one past the closing delimiter.
///
/// # Errors
/// Returns [`ScanError::Syntax`](crate::ScanError::Syntax) when the window
/// does not open with a quote or the literal is not closed inside it.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_string;
/// let input = r#"'I \'am "string"'"#;
/// assert_eq!(scan_string(input, 0, input.len()), Ok(input.len()));
/// assert!(scan_string("'open", 0, 5).is_err());
/// ```
pub fn scan_string(input: &str, start: usize, end: usize) -> Scan {
    string(&Window::new(input, end), start)
}

/// Recognize a decimal number, `[0-9]+` with an optional `.` fraction.
///
/// Matching is greedy and stops at the first byte that is neither a digit
/// nor the fraction point. The cursor points one past the last digit.
///
/// # Errors
/// Returns [`ScanError::Syntax`](crate::ScanError::Syntax) when the window
/// does not open with a digit.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_number;
/// assert_eq!(scan_number("10.00)", 0, 6), Ok(5));
/// ```
pub fn scan_number(input: &str, start: usize, end: usize) -> Scan {
    number(&Window::new(input, end), start)
}

/// Recognize a bracketed, comma-separated list of number or string literals.
///
/// Whitespace around elements and commas is tolerated. The cursor points one
/// past the closing `]`.
///
/// # Errors
/// Returns [`ScanError::Syntax`](crate::ScanError::Syntax) for an empty list,
/// a malformed element or a missing `]`.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_list;
/// assert_eq!(scan_list("[ 1 ,  2 ,  3 ]", 0, 15), Ok(15));
/// assert!(scan_list("[1, 2", 0, 5).is_err());
/// ```
pub fn scan_list(input: &str, start: usize, end: usize) -> Scan {
    list(&Window::new(input, end), start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::test_support::{scan_err, scan_ok};
    use rstest::rstest;

    #[rstest]
    #[case(r#""I <> string""#, 13)]
    #[case("'I 18 string'", 13)]
    #[case(r#""I \"am string""#, 15)]
    #[case(r"'I \'am string'", 15)]
    #[case(r#"'I am "string'"#, 14)]
    #[case(r#""I am 'string""#, 14)]
    #[case("''", 2)]
    fn accepts_closed_strings(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(
            scan_ok(scan_string(input, 0, input.len()), input),
            expected
        );
    }

    #[rstest]
    #[case(r#""I am string"#)]
    #[case("'I am string")]
    #[case(r#"'I am string""#)]
    #[case(r"'I am \'")]
    #[case("plain")]
    #[case("")]
    fn rejects_unterminated_strings(#[case] input: &str) {
        scan_err(scan_string(input, 0, input.len()), input);
    }

    #[test]
    fn closing_quote_must_lie_inside_the_window() {
        assert!(scan_string("'abc'", 0, 4).is_err());
    }

    #[rstest]
    #[case("10", 2)]
    #[case("10 ", 2)]
    #[case("10.0", 4)]
    #[case("10.0 ", 4)]
    #[case("10)", 2)]
    #[case("10.00)", 5)]
    #[case("10.", 2)]
    #[case("1.2.3", 3)]
    fn consumes_digits_greedily(#[case] input: &str, #[case] expected: usize) {
        assert_eq!(
            scan_ok(scan_number(input, 0, input.len()), input),
            expected
        );
    }

    #[rstest]
    #[case(".5")]
    #[case("-1")]
    #[case(" 1")]
    #[case("")]
    fn numbers_need_a_leading_digit(#[case] input: &str) {
        scan_err(scan_number(input, 0, input.len()), input);
    }

    #[rstest]
    #[case("['a', 'b', 'c']")]
    #[case("[ 1 ,  2 ,  3 ]")]
    #[case("[1, 2, 3]")]
    #[case("[1]")]
    #[case(r#"['value', "value", 2.5]"#)]
    #[case("['a,]']")]
    fn accepts_lists_of_literals(#[case] input: &str) {
        assert_eq!(
            scan_ok(scan_list(input, 0, input.len()), input),
            input.len()
        );
    }

    #[rstest]
    #[case("[]")]
    #[case("[1, 2")]
    #[case("[1 2]")]
    #[case("[1,]")]
    #[case("[name]")]
    #[case("1, 2]")]
    fn rejects_malformed_lists(#[case] input: &str) {
        scan_err(scan_list(input, 0, input.len()), input);
    }

    #[test]
    fn scalar_prefers_numbers_and_falls_back_to_strings() {
        let window = Window::new("12 'x'", 6);
        assert_eq!(scalar(&window, 0), Ok(2));
        assert_eq!(scalar(&window, 3), Ok(6));
        assert_eq!(
            scalar(&window, 2),
            Err(syntax_error(Expected::Value, 2))
        );
    }
}
