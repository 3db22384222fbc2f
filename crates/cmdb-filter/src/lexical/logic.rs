//! Logical connective recognizer.

use crate::errors::{Expected, Scan, ScanError, syntax_error};
use crate::window::Window;

/// Connective chaining two terms of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicOperator {
    /// `and`, matched case-insensitively.
    And,
    /// `or`, matched case-insensitively.
    Or,
}

pub(crate) fn logic_operator(
    window: &Window<'_>,
    start: usize,
) -> Result<(LogicOperator, usize), ScanError> {
    let index = window.skip_whitespace(start);
    let (op, len) = if window.starts_with_ignore_case(index, b"and") {
        (LogicOperator::And, 3)
    } else if window.starts_with_ignore_case(index, b"or") {
        (LogicOperator::Or, 2)
    } else {
        return Err(syntax_error(Expected::LogicOperator, index));
    };
    let after = index + len;
    match window.at(after) {
        Some(b'(') => Ok((op, after)),
        Some(b) if b.is_ascii_whitespace() => Ok((op, after)),
        _ => Err(syntax_error(Expected::LogicOperator, after)),
    }
}

/// Recognize `and` or `or` in any letter case.
///
/// Leading whitespace is skipped and the word must be followed by
/// whitespace or `(`. The cursor points just past the word.
///
/// # Errors
/// Returns [`ScanError::Syntax`] when no connective starts the window.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_logic_operator;
/// assert_eq!(scan_logic_operator("AND (", 0, 5), Ok(3));
/// assert!(scan_logic_operator("andy ", 0, 5).is_err());
/// ```
pub fn scan_logic_operator(input: &str, start: usize, end: usize) -> Scan {
    scan_logic_operator_kind(input, start, end).map(|(_, cursor)| cursor)
}

/// Recognize `and` or `or` and report which one matched.
///
/// # Errors
/// See [`scan_logic_operator`].
pub fn scan_logic_operator_kind(
    input: &str,
    start: usize,
    end: usize,
) -> Result<(LogicOperator, usize), ScanError> {
    logic_operator(&Window::new(input, end), start)
}
