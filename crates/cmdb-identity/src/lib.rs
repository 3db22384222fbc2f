//! Identifier and version codecs for CMDB configuration types.
//!
//! Configuration types are addressed three ways:
//!
//! - the friendly id shown to clients, `namespace-name-1.2.34`;
//! - the storage-safe table name, `namespace_name_1_2_34`;
//! - the graph-store record id, `#cluster:position`, kept as
//!   `cluster_position` where `#` and `:` are not allowed.
//!
//! The string functions convert between these forms and report malformed
//! input as a [`CodecError`] instead of coercing it. The typed values
//! ([`TypeId`], [`Version`], [`RecordId`]) are available to callers that want
//! to keep the parsed parts.

mod errors;
mod names;
mod record;
mod type_id;
mod version;

pub use errors::CodecError;
pub use names::{NameKind, validate_name};
pub use record::{RecordId, record_id_to_storage_id, storage_id_to_record_id};
pub use type_id::{TypeId, type_table_name_to_friendly, validate_friendly_id, validate_query_path};
pub use version::{Component, Version, version_increase, version_parse, version_stringify};
