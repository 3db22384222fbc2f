//! Top-level expression recognizer.
//!
//! Grammar:
//!
//! ```text
//! expr := term (logic_op term)*
//! term := bracketed_statement | negated_statement | single_statement
//! ```
//!
//! The term kind is chosen from a single lookahead: `(` opens a bracketed
//! statement, the word `not` opens a negated statement and anything else is
//! read as a single comparison. `and` and `or` chain terms left to right with
//! no precedence; only well-formedness is decided.

use tracing::debug;

use crate::config::FilterConfig;
use crate::errors::{Expected, Scan, ScanError, syntax_error};
use crate::lexical::{is_negation_keyword, logic_operator};
use crate::statement::single_statement;
use crate::window::Window;

/// Stateless recognizer for filter expressions.
///
/// Holds only the nesting limit, so a single value can be shared freely
/// between threads.
///
/// # Examples
/// ```
/// use cmdb_filter::{FilterConfig, Validator};
/// let validator = Validator::new(&FilterConfig::default().with_max_depth(1));
/// assert!(validator.is_valid("(a = 1) and b = 2"));
/// assert!(validator.validate("((a = 1))").is_err_and(|err| err.is_too_deep()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_depth: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}

impl Validator {
    /// Build a validator from configuration.
    #[must_use]
    pub const fn new(config: &FilterConfig) -> Self {
        Self {
            max_depth: config.max_depth,
        }
    }

    /// Maximum parenthesis nesting depth this validator accepts.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn expression(&self, window: &Window<'_>, start: usize, depth: usize) -> Scan {
        let mut cursor = self.term(window, start, depth)?;
        while let Ok((_, after)) = logic_operator(window, cursor) {
            cursor = self.term(window, window.skip_whitespace(after), depth)?;
        }
        if cursor == window.end() {
            Ok(cursor)
        } else {
            Err(syntax_error(Expected::EndOfInput, cursor))
        }
    }

    fn term(&self, window: &Window<'_>, start: usize, depth: usize) -> Scan {
        if window.at(start) == Some(b'(') {
            self.bracketed(window, start, depth)
        } else if is_negation_keyword(window, start) {
            self.negated(window, start, depth)
        } else {
            single_statement(window, start)
        }
    }

    /// Recognize a complete expression filling the window `[start, end)`.
    ///
    /// On success the cursor always equals `end`; a valid prefix followed by
    /// anything else is rejected.
    ///
    /// # Errors
    /// Returns [`ScanError::Syntax`] for malformed input and
    /// [`ScanError::TooDeep`] when the nesting limit is exceeded.
    pub fn scan_expression(&self, input: &str, start: usize, end: usize) -> Scan {
        self.expression(&Window::new(input, end), start, 0)
    }

    /// Validate a whole string as a filter expression.
    ///
    /// # Errors
    /// Returns the [`ScanError`] describing why the text was rejected.
    pub fn validate(&self, text: &str) -> Result<(), ScanError> {
        self.scan_expression(text, 0, text.len())
            .map(|_| ())
            .inspect_err(|error| {
                debug!(position = error.position(), %error, "rejected filter expression");
            })
    }

    /// Return `true` when `text` is a well-formed filter expression.
    #[must_use]
    pub fn is_valid(&self, text: &str) -> bool {
        self.validate(text).is_ok()
    }
}

/// Recognize a complete expression in `[start, end)` using the default
/// configuration.
///
/// # Errors
/// See [`Validator::scan_expression`].
///
/// # Examples
/// ```
/// use cmdb_filter::scan_expression;
/// let input = "attr = 12 and attr2 = 'str' or not(attr3 in [1, 2])";
/// assert_eq!(scan_expression(input, 0, input.len()), Ok(input.len()));
/// ```
pub fn scan_expression(input: &str, start: usize, end: usize) -> Scan {
    Validator::default().scan_expression(input, start, end)
}

/// Return `true` when `text` is a well-formed filter expression under the
/// default configuration.
///
/// # Examples
/// ```
/// use cmdb_filter::validate_expression;
/// assert!(validate_expression("(attr = 12 or attr2 = 'str') and attr3 = 'str'"));
/// assert!(!validate_expression(" attr = 12"));
/// ```
#[must_use]
pub fn validate_expression(text: &str) -> bool {
    Validator::default().is_valid(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::test_support::{scan_err, scan_ok};
    use rstest::rstest;

    #[rstest]
    #[case("attr = 12 and attr2 = 'str' or not(attr3 in [1 , 2])")]
    #[case("(attr = 12 or attr2 = 'str') and attr3 = 'str'")]
    #[case("attr = 'str' or (attr2 = 2 and attr3 = 3)")]
    #[case("a = 1 AND b = 2 Or c = 3")]
    #[case("a = 1 and(b = 2)")]
    #[case("not (a = 1) and not(b like 'x%')")]
    #[case("nothing = 1")]
    fn accepts_expressions(#[case] input: &str) {
        assert_eq!(
            scan_ok(scan_expression(input, 0, input.len()), input),
            input.len()
        );
    }

    #[rstest]
    #[case("", 0)]
    #[case(" attr = 12", 0)]
    #[case("attr = 12 ", 9)]
    #[case("attr = 12 and", 9)]
    #[case("attr = 12 attr2 = 1", 9)]
    #[case("attr = 12)", 9)]
    fn rejections_report_where_recognition_stopped(
        #[case] input: &str,
        #[case] position: usize,
    ) {
        let err = scan_err(scan_expression(input, 0, input.len()), input);
        assert_eq!(err.position(), position);
        assert!(!err.is_too_deep());
    }

    #[test]
    fn validates_a_sub_window() {
        let input = "filter=(a = 1 or b = 2)&limit=10";
        assert_eq!(scan_ok(scan_expression(input, 7, 23), input), 23);
        assert!(scan_expression(input, 7, 24).is_err());
    }

    #[test]
    fn validate_reports_depth_errors() {
        let validator = Validator::new(&FilterConfig::default().with_max_depth(3));
        let nested = |levels: usize| format!("{}a = 1{}", "(".repeat(levels), ")".repeat(levels));
        assert!(
            validator
                .validate(&nested(4))
                .is_err_and(|err| err.is_too_deep())
        );
        assert!(validator.is_valid(&nested(3)));
    }

    #[test]
    fn default_validator_uses_default_depth() {
        assert_eq!(
            Validator::default().max_depth(),
            crate::config::DEFAULT_MAX_DEPTH
        );
    }
}
