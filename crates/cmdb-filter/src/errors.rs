//! Error types shared by the recognizer modules.

use std::fmt;
use thiserror::Error;

/// Result of a windowed recognizer.
///
/// `Ok` carries the cursor: the offset of the first byte the recognized
/// construct did not consume.
pub type Scan = Result<usize, ScanError>;

/// The construct a recognizer was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Expected {
    /// An attribute name followed by whitespace or `=`.
    Key,
    /// A comparison operator such as `=`, `<>`, `like` or `in`.
    Operator,
    /// A logical connective, `and` or `or`.
    LogicOperator,
    /// The `not` keyword followed by a parenthesis.
    Negation,
    /// A quoted string literal.
    String,
    /// A decimal number literal.
    Number,
    /// A bracketed list of literals.
    List,
    /// A number or string on the right-hand side of a comparison.
    Value,
    /// An opening parenthesis.
    OpeningParen,
    /// A closing parenthesis.
    ClosingParen,
    /// A non-empty expression between parentheses.
    Expression,
    /// The end of the window.
    EndOfInput,
}

impl Expected {
    /// Return a short human-readable description of the construct.
    ///
    /// # Examples
    /// ```
    /// use cmdb_filter::Expected;
    /// assert_eq!(Expected::ClosingParen.as_str(), "closing ')'");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Key => "attribute key",
            Self::Operator => "comparison operator",
            Self::LogicOperator => "logical operator",
            Self::Negation => "'not('",
            Self::String => "string literal",
            Self::Number => "number literal",
            Self::List => "list literal",
            Self::Value => "number or string value",
            Self::OpeningParen => "opening '('",
            Self::ClosingParen => "closing ')'",
            Self::Expression => "expression",
            Self::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced while recognizing a filter expression.
///
/// # Examples
/// ```
/// use cmdb_filter::{Expected, ScanError};
/// let err = ScanError::Syntax { expected: Expected::Key, position: 0 };
/// assert_eq!(err.to_string(), "expected attribute key at byte 0 (zero-based)");
/// assert!(!err.is_too_deep());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The window does not match the grammar at `position`.
    #[error("expected {expected} at byte {position} (zero-based)")]
    Syntax {
        /// Construct the recognizer was looking for.
        expected: Expected,
        /// Offset where recognition failed.
        position: usize,
    },
    /// Parentheses are nested deeper than the configured limit.
    #[error("nesting exceeds {limit} levels at byte {position} (zero-based)")]
    TooDeep {
        /// Configured maximum nesting depth.
        limit: usize,
        /// Offset of the parenthesis that crossed the limit.
        position: usize,
    },
}

impl ScanError {
    /// Return `true` when the input was rejected for nesting too deeply
    /// rather than for being malformed.
    #[must_use]
    pub const fn is_too_deep(&self) -> bool {
        matches!(self, Self::TooDeep { .. })
    }

    /// Offset at which recognition stopped.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Syntax { position, .. } | Self::TooDeep { position, .. } => *position,
        }
    }
}

/// Errors raised while loading validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub(crate) fn syntax_error(expected: Expected, position: usize) -> ScanError {
    ScanError::Syntax { expected, position }
}
