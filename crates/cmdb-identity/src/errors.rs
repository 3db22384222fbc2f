//! Error type shared by the identifier codecs.

use thiserror::Error;
use tracing::debug;

use crate::names::NameKind;
use crate::version::Component;

/// Errors surfaced while converting or validating identifiers.
///
/// Every variant carries the offending input so the message can be returned
/// to the client that supplied it.
///
/// # Examples
/// ```
/// use cmdb_identity::{CodecError, version_parse};
/// let err = version_parse("1_2").unwrap_err();
/// assert_eq!(err.to_string(), "expected 2 '_' separators in '1_2', found 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The input does not contain the required number of separators.
    #[error("expected {expected} '{separator}' separators in '{input}', found {found}")]
    Separators {
        /// Rejected input.
        input: String,
        /// Separator character that was counted.
        separator: char,
        /// Number of separators the form requires.
        expected: usize,
        /// Number of separators present.
        found: usize,
    },
    /// A numeric component is empty or contains non-digit characters.
    #[error("component '{component}' of '{input}' is not a non-negative integer")]
    NotNumeric {
        /// Rejected input.
        input: String,
        /// The offending component.
        component: String,
    },
    /// A record id lacks its leading `#`.
    #[error("record id '{input}' must start with '#'")]
    MissingRecordPrefix {
        /// Rejected input.
        input: String,
    },
    /// A version component index other than 0, 1 or 2 was supplied.
    #[error("version component index {index} is out of range, expected 0, 1 or 2")]
    ComponentIndex {
        /// Rejected index.
        index: usize,
    },
    /// Incrementing a version component would overflow.
    #[error("cannot increase the {component} component of version {version}")]
    Overflow {
        /// Version being increased.
        version: String,
        /// Component that would overflow.
        component: Component,
    },
    /// A namespace or type name contains characters outside `[A-Za-z0-9]` or
    /// does not start with a letter.
    #[error("invalid {kind} '{value}': expected a letter followed by letters or digits")]
    InvalidName {
        /// Which part of the identifier was rejected.
        kind: NameKind,
        /// Rejected value.
        value: String,
    },
}

pub(crate) fn separators(input: &str, separator: char, expected: usize) -> CodecError {
    CodecError::Separators {
        input: input.to_string(),
        separator,
        expected,
        found: input.matches(separator).count(),
    }
}

/// Parse a component that must be a plain run of ASCII digits.
///
/// `u64::from_str` alone would also accept a leading `+`.
pub(crate) fn parse_unsigned(input: &str, raw: &str) -> Result<u64, CodecError> {
    let not_numeric = || CodecError::NotNumeric {
        input: input.to_string(),
        component: raw.to_string(),
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_numeric());
    }
    raw.parse().map_err(|_| not_numeric())
}

/// Log a rejected client-supplied identifier before handing the error back.
pub(crate) fn log_rejection<T>(
    input: &str,
    result: Result<T, CodecError>,
) -> Result<T, CodecError> {
    result.inspect_err(|error| debug!(input, %error, "rejected identifier"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_separators_actually_present() {
        let err = separators("a-b-c-d", '-', 2);
        assert_eq!(
            err.to_string(),
            "expected 2 '-' separators in 'a-b-c-d', found 3"
        );
    }

    #[test]
    fn formats_invalid_name() {
        let err = CodecError::InvalidName {
            kind: NameKind::Namespace,
            value: "1@1-?".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid namespace '1@1-?': expected a letter followed by letters or digits"
        );
    }

    #[test]
    fn formats_overflow_with_component_name() {
        let err = CodecError::Overflow {
            version: "1.2.3".to_string(),
            component: Component::Minor,
        };
        assert_eq!(
            err.to_string(),
            "cannot increase the minor component of version 1.2.3"
        );
    }
}
