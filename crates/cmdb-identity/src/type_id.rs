//! Configuration-type identifiers.
//!
//! A type is known to clients by its friendly id, `namespace-name-1.0.0`, and
//! stored in a table named `namespace_name_1_0_0`. Both forms carry the same
//! three parts, so [`TypeId`] converts between them.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CodecError, log_rejection, separators};
use crate::names::{NameKind, validate_name};
use crate::version::Version;

/// Namespace, name and version of a configuration type.
///
/// # Examples
/// ```
/// use cmdb_identity::{TypeId, Version};
/// let id = TypeId::new("demoPPC", "demoVM", Version::new(1, 1, 0))
///     .expect("names are alphanumeric");
/// assert_eq!(id.to_string(), "demoPPC-demoVM-1.1.0");
/// assert_eq!(id.table_name(), "demoPPC_demoVM_1_1_0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeId {
    namespace: String,
    name: String,
    version: Version,
}

impl TypeId {
    /// Build an identifier, validating the namespace and name.
    ///
    /// # Errors
    /// Returns [`CodecError::InvalidName`] when either name is not
    /// alphanumeric or does not start with a letter.
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        version: Version,
    ) -> Result<Self, CodecError> {
        let namespace = namespace.into();
        let name = name.into();
        validate_name(NameKind::Namespace, &namespace)?;
        validate_name(NameKind::TypeName, &name)?;
        Ok(Self {
            namespace,
            name,
            version,
        })
    }

    /// Namespace the type belongs to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Name of the type inside its namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Version of the type.
    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    /// Return the same type at a different version.
    #[must_use]
    pub fn with_version(&self, version: Version) -> Self {
        Self {
            version,
            ..self.clone()
        }
    }

    /// Parse a storage-safe table name, `NAMESPACE_TYPE_MAJOR_MINOR_PATCH`.
    ///
    /// # Errors
    /// Returns [`CodecError`] unless the name has exactly four `_`
    /// separators, valid names and a numeric version.
    pub fn from_table_name(table: &str) -> Result<Self, CodecError> {
        let Some((namespace, rest)) = table.split_once('_') else {
            return Err(separators(table, '_', 4));
        };
        let Some((name, version)) = rest.split_once('_') else {
            return Err(separators(table, '_', 4));
        };
        let version = Version::from_storage(version).map_err(|err| match err {
            CodecError::Separators { .. } => separators(table, '_', 4),
            other => other,
        })?;
        Self::new(namespace, name, version)
    }

    /// Render the storage-safe table name.
    #[must_use]
    pub fn table_name(&self) -> String {
        format!(
            "{}_{}_{}",
            self.namespace,
            self.name,
            self.version.to_storage()
        )
    }
}

impl FromStr for TypeId {
    type Err = CodecError;

    fn from_str(friendly: &str) -> Result<Self, Self::Err> {
        let mut parts = friendly.split('-');
        let (Some(namespace), Some(name), Some(version), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(separators(friendly, '-', 2));
        };
        Self::new(namespace, name, version.parse()?)
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.namespace, self.name, self.version)
    }
}

/// Rewrite a table name, `NS_NAME_1_0_0`, as a friendly id, `NS-NAME-1.0.0`.
///
/// The input is validated first; the digits are then carried over exactly as
/// written, leading zeros included.
///
/// # Errors
/// Returns [`CodecError`] when the table name is malformed.
///
/// # Examples
/// ```
/// use cmdb_identity::type_table_name_to_friendly;
/// assert_eq!(
///     type_table_name_to_friendly("NS_NAME_1_0_0").as_deref(),
///     Ok("NS-NAME-1.0.0")
/// );
/// ```
pub fn type_table_name_to_friendly(name: &str) -> Result<String, CodecError> {
    log_rejection(name, TypeId::from_table_name(name))?;
    Ok(name.replacen('_', "-", 2).replace('_', "."))
}

/// Validate a client-supplied friendly id.
///
/// # Errors
/// Returns [`CodecError`] when the id is not `namespace-name-MAJOR.MINOR.PATCH`
/// with alphanumeric names.
///
/// # Examples
/// ```
/// use cmdb_identity::validate_friendly_id;
/// assert!(validate_friendly_id("demoPPC-demoVM-1.1.0").is_ok());
/// assert!(validate_friendly_id("demoPPC-demoVM-1.1.?").is_err());
/// ```
pub fn validate_friendly_id(id: &str) -> Result<TypeId, CodecError> {
    log_rejection(id, id.parse())
}

/// Validate the namespace, name and version segments of a type lookup path.
///
/// # Errors
/// Returns [`CodecError`] when any segment is malformed.
///
/// # Examples
/// ```
/// use cmdb_identity::validate_query_path;
/// assert!(validate_query_path("demoPPC", "demoVM", "1.1.0").is_ok());
/// assert!(validate_query_path("demoPPC", "demoVM", "1.1@X").is_err());
/// ```
pub fn validate_query_path(
    namespace: &str,
    name: &str,
    version: &str,
) -> Result<TypeId, CodecError> {
    let path = format!("{namespace}/{name}/{version}");
    log_rejection(
        &path,
        version
            .parse::<Version>()
            .and_then(|version| TypeId::new(namespace, name, version)),
    )
}
