//! Statement recognizers: `key op value`, `not( expr )` and `( expr )`.
//!
//! Bracketed and negated statements re-enter the expression recognizer, so
//! they are methods on [`Validator`] and carry the current nesting depth.

use tracing::warn;

use crate::errors::{Expected, Scan, ScanError, syntax_error};
use crate::expression::Validator;
use crate::lexical::{Operator, key, list, negation, operator, scalar, string};
use crate::window::Window;

pub(crate) fn single_statement(window: &Window<'_>, start: usize) -> Scan {
    let key_end = key(window, start)?;
    let (op, op_end) = operator(window, key_end)?;
    match op {
        Operator::Like => string(window, op_end),
        Operator::In => list(window, op_end),
        _ => scalar(window, window.skip_whitespace(op_end)),
    }
}

/// Offset of the `)` matching the `(` at `open`.
///
/// Parentheses inside string literals are skipped.
fn closing_paren(window: &Window<'_>, open: usize) -> Scan {
    let mut depth = 0usize;
    let mut index = open;
    while let Some(b) = window.at(index) {
        match b {
            b'(' => {
                depth += 1;
                index += 1;
            }
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Ok(index);
                }
                index += 1;
            }
            b'"' | b'\'' => index = string(window, index)?,
            _ => index += 1,
        }
    }
    Err(syntax_error(Expected::ClosingParen, index))
}

impl Validator {
    pub(crate) fn bracketed(&self, window: &Window<'_>, start: usize, depth: usize) -> Scan {
        if window.at(start) != Some(b'(') {
            return Err(syntax_error(Expected::OpeningParen, start));
        }
        let depth = depth + 1;
        if depth > self.max_depth() {
            warn!(
                limit = self.max_depth(),
                position = start,
                "filter expression nesting limit exceeded"
            );
            return Err(ScanError::TooDeep {
                limit: self.max_depth(),
                position: start,
            });
        }
        let close = closing_paren(window, start)?;
        let inner_start = window.skip_whitespace(start + 1);
        let inner_end = window.trim_whitespace_back(inner_start, close);
        if inner_start == inner_end {
            return Err(syntax_error(Expected::Expression, inner_start));
        }
        self.expression(&window.truncate(inner_end), inner_start, depth)?;
        Ok(close + 1)
    }

    pub(crate) fn negated(&self, window: &Window<'_>, start: usize, depth: usize) -> Scan {
        let keyword_end = negation(window, start)?;
        self.bracketed(window, window.skip_whitespace(keyword_end), depth)
    }

    /// Recognize a negated statement, `not( expr )`.
    ///
    /// The cursor points one past the closing `)`.
    ///
    /// # Errors
    /// Returns [`ScanError::Syntax`] for malformed input and
    /// [`ScanError::TooDeep`] when the nesting limit is exceeded.
    pub fn scan_negated_statement(&self, input: &str, start: usize, end: usize) -> Scan {
        self.negated(&Window::new(input, end), start, 0)
    }

    /// Recognize a bracketed statement, `( expr )`, nested to any depth up to
    /// the configured limit.
    ///
    /// The cursor points one past the closing `)`.
    ///
    /// # Errors
    /// Returns [`ScanError::Syntax`] for malformed input and
    /// [`ScanError::TooDeep`] when the nesting limit is exceeded.
    pub fn scan_bracketed_statement(&self, input: &str, start: usize, end: usize) -> Scan {
        self.bracketed(&Window::new(input, end), start, 0)
    }
}

/// Recognize a single comparison, `key op value`.
///
/// Symbolic operators take a number or a string, `like` takes a string and
/// `in` takes a list. The cursor points one past the value.
///
/// # Errors
/// Returns [`ScanError::Syntax`] when the key, operator or value is
/// malformed.
///
/// # Examples
/// ```
/// use cmdb_filter::scan_single_statement;
/// let input = "name in ['value', \"value\"]";
/// assert_eq!(scan_single_statement(input, 0, input.len()), Ok(input.len()));
/// ```
pub fn scan_single_statement(input: &str, start: usize, end: usize) -> Scan {
    single_statement(&Window::new(input, end), start)
}

/// Recognize `not( expr )` using the default configuration.
///
/// # Errors
/// See [`Validator::scan_negated_statement`].
///
/// # Examples
/// ```
/// use cmdb_filter::scan_negated_statement;
/// assert_eq!(scan_negated_statement("not (a = 12)", 0, 12), Ok(12));
/// ```
pub fn scan_negated_statement(input: &str, start: usize, end: usize) -> Scan {
    Validator::default().scan_negated_statement(input, start, end)
}

/// Recognize `( expr )` using the default configuration.
///
/// # Errors
/// See [`Validator::scan_bracketed_statement`].
///
/// # Examples
/// ```
/// use cmdb_filter::scan_bracketed_statement;
/// assert_eq!(scan_bracketed_statement("((name = 12))", 0, 13), Ok(13));
/// ```
pub fn scan_bracketed_statement(input: &str, start: usize, end: usize) -> Scan {
    Validator::default().scan_bracketed_statement(input, start, end)
}
