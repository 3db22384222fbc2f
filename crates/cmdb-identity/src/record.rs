//! Graph-store record addresses: `#cluster:position` and the `cluster_position`
//! form used where `#` and `:` are not allowed.

use std::fmt;
use std::str::FromStr;

use crate::errors::{CodecError, log_rejection, parse_unsigned, separators};

/// Address of a record in the graph store.
///
/// # Examples
/// ```
/// use cmdb_identity::RecordId;
/// let rid: RecordId = "#22:10".parse().expect("well-formed record id");
/// assert_eq!(rid, RecordId::new(22, 10));
/// assert_eq!(rid.to_storage_id(), "22_10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId {
    /// Cluster the record lives in.
    pub cluster: u64,
    /// Position of the record inside its cluster.
    pub position: u64,
}

impl RecordId {
    /// Create a record id from its parts.
    #[must_use]
    pub const fn new(cluster: u64, position: u64) -> Self {
        Self { cluster, position }
    }

    /// Parse the `cluster_position` storage form.
    ///
    /// # Errors
    /// Returns [`CodecError`] unless the input is two non-negative integers
    /// joined by a single `_`.
    pub fn from_storage_id(id: &str) -> Result<Self, CodecError> {
        split_pair(id, id, '_')
    }

    /// Render the `cluster_position` storage form.
    #[must_use]
    pub fn to_storage_id(&self) -> String {
        format!("{}_{}", self.cluster, self.position)
    }
}

fn split_pair(input: &str, body: &str, separator: char) -> Result<RecordId, CodecError> {
    let Some((cluster, position)) = body
        .split_once(separator)
        .filter(|(_, position)| !position.contains(separator))
    else {
        return Err(separators(input, separator, 1));
    };
    Ok(RecordId {
        cluster: parse_unsigned(input, cluster)?,
        position: parse_unsigned(input, position)?,
    })
}

impl FromStr for RecordId {
    type Err = CodecError;

    fn from_str(rid: &str) -> Result<Self, Self::Err> {
        let body = rid
            .strip_prefix('#')
            .ok_or_else(|| CodecError::MissingRecordPrefix {
                input: rid.to_string(),
            })?;
        split_pair(rid, body, ':')
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}:{}", self.cluster, self.position)
    }
}

/// Convert a storage id (`22_0`) to a record id (`#22:0`).
///
/// # Errors
/// Returns [`CodecError`] when the input is not two integers joined by `_`.
///
/// # Examples
/// ```
/// use cmdb_identity::storage_id_to_record_id;
/// assert_eq!(storage_id_to_record_id("22_0").as_deref(), Ok("#22:0"));
/// ```
pub fn storage_id_to_record_id(id: &str) -> Result<String, CodecError> {
    log_rejection(id, RecordId::from_storage_id(id))?;
    Ok(format!("#{}", id.replacen('_', ":", 1)))
}

/// Convert a record id (`#22:10`) to a storage id (`22_10`).
///
/// # Errors
/// Returns [`CodecError`] when the input lacks the `#` prefix or is not two
/// integers joined by `:`.
///
/// # Examples
/// ```
/// use cmdb_identity::record_id_to_storage_id;
/// assert_eq!(record_id_to_storage_id("#22:10").as_deref(), Ok("22_10"));
/// ```
pub fn record_id_to_storage_id(rid: &str) -> Result<String, CodecError> {
    log_rejection(rid, rid.parse::<RecordId>())?;
    Ok(rid.trim_start_matches('#').replacen(':', "_", 1))
}
