//! Namespace and type-name validation.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::CodecError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").unwrap_or_else(|_| unreachable!()));

/// Which part of a type identifier a name occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameKind {
    /// The namespace a configuration type belongs to.
    Namespace,
    /// The configuration type's own name.
    TypeName,
}

impl NameKind {
    /// Return the kind as a lowercase noun for messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Namespace => "namespace",
            Self::TypeName => "type name",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check that `value` is usable as a namespace or type name.
///
/// Names start with an ASCII letter followed by letters or digits, so they
/// never contain the `-` and `_` separators of friendly ids and table names.
///
/// # Errors
/// Returns [`CodecError::InvalidName`] when the value does not match.
///
/// # Examples
/// ```
/// use cmdb_identity::{NameKind, validate_name};
/// assert!(validate_name(NameKind::Namespace, "demoPPC").is_ok());
/// assert!(validate_name(NameKind::TypeName, "VM1.1?").is_err());
/// ```
pub fn validate_name(kind: NameKind, value: &str) -> Result<(), CodecError> {
    if NAME_RE.is_match(value) {
        Ok(())
    } else {
        Err(CodecError::InvalidName {
            kind,
            value: value.to_string(),
        })
    }
}
