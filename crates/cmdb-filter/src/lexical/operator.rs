//! Comparison operator recognizer.

use std::fmt;

use crate::errors::{Expected, Scan, ScanError, syntax_error};
use crate::window::Window;

/// Comparison operator joining a key to its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `>`
    Greater,
    /// `<`
    Less,
    /// `=`
    Equal,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `<>`
    NotEqual,
    /// `like`, compared against a string pattern.
    Like,
    /// `in`, compared against a list of literals.
    In,
}

impl Operator {
    /// Return the operator as written in a filter expression.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "=",
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::NotEqual => "<>",
            Self::Like => "like",
            Self::In => "in",
        }
    }

    /// Return `true` for the punctuation operators, which accept either a
    /// number or a string on their right-hand side.
    #[must_use]
    pub const fn is_symbolic(&self) -> bool {
        !matches!(self, Self::Like | Self::In)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Two-byte symbols come first so `>=` is not read as `>`.
const SYMBOLS: [(&[u8], Operator); 6] = [
    (b">=", Operator::GreaterOrEqual),
    (b"<=", Operator::LessOrEqual),
    (b"<>", Operator::NotEqual),
    (b">", Operator::Greater),
    (b"<", Operator::Less),
    (b"=", Operator::Equal),
];

/// Locate the literal introducer that must follow a word operator after at
/// least one whitespace byte.
fn introducer(window: &Window<'_>, word_end: usize, accept: impl Fn(u8) -> bool) -> Scan {
    if !window.is_whitespace_at(word_end) {
        return Err(syntax_error(Expected::Operator, word_end));
    }
    let index = window.skip_whitespace(word_end);
    match window.at(index) {
        Some(b) if accept(b) => Ok(index),
        _ => Err(syntax_error(Expected::Operator, index)),
    }
}

pub(crate) fn operator(window: &Window<'_>, start: usize) -> Result<(Operator, usize), ScanError> {
    let index = window.skip_whitespace(start);
    if window.starts_with(index, b"like") {
        let quote = introducer(window, index + 4, |b| matches!(b, b'"' | b'\''))?;
        return Ok((Operator::Like, quote));
    }
    if window.starts_with(index, b"in") {
        let bracket = introducer(window, index + 2, |b| b == b'[')?;
        return Ok((Operator::In, bracket));
    }
    for (symbol, op) in SYMBOLS {
        if window.starts_with(index, symbol) {
            let after = index + symbol.len();
            if window.is_whitespace_at(after) {
                return Ok((op, after));
            }
            return Err(syntax_error(Expected::Operator, after));
        }
    }
    Err(syntax_error(Expected::Operator, index))
}

/// Recognize a comparison operator and report which one matched.
///
/// Leading whitespace is skipped. For symbolic operators the cursor sits
/// right after the symbol; for `like` it sits on the opening quote of the
/// pattern and for `in` on the opening `[` of the list.
///
/// # Errors
/// Returns [`ScanError::Syntax`] when no operator starts the window or the
/// operator is not followed by what it requires.
///
/// # Examples
/// ```
/// use cmdb_filter::{Operator, scan_operator_kind};
/// assert_eq!(scan_operator_kind("in [1]", 0, 6), Ok((Operator::In, 3)));
/// ```
pub fn scan_operator_kind(
    input: &str,
    start: usize,
    end: usize,
) -> Result<(Operator, usize), ScanError> {
    operator(&Window::new(input, end), start)
}

/// Recognize a comparison operator, returning only the cursor.
///
/// # Errors
/// See [`scan_operator_kind`].
///
/// # Examples
/// ```
/// use cmdb_filter::scan_operator;
/// assert_eq!(scan_operator(">= ", 0, 3), Ok(2));
/// assert_eq!(scan_operator("like \"", 0, 6), Ok(5));
/// ```
pub fn scan_operator(input: &str, start: usize, end: usize) -> Scan {
    scan_operator_kind(input, start, end).map(|(_, cursor)| cursor)
}
