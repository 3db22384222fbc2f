//! Well-formedness validation for CMDB record filter expressions.
//!
//! Filters select records by attribute comparisons, for example
//! `attr = 12 and attr2 = 'str' or not(attr3 in [1, 2])`. This crate decides
//! whether a string is a well-formed filter; it builds no syntax tree and
//! evaluates nothing.
//!
//! Every recognizer works on a half-open window `[start, end)` of its input
//! and returns [`Scan`]: the cursor where the next construct should begin, or
//! a [`ScanError`] saying what was expected. Callers embedding a filter in a
//! larger string can validate just the sub-range it occupies.
//!
//! # Configuration
//!
//! - `CMDB_FILTER_MAX_DEPTH`: maximum parenthesis nesting depth (see
//!   [`FilterConfig`]).

mod config;
mod errors;
mod expression;
mod lexical;
mod statement;
mod window;

pub use config::{DEFAULT_MAX_DEPTH, FilterConfig, MAX_DEPTH_VAR};
pub use errors::{ConfigError, Expected, Scan, ScanError};
pub use expression::{Validator, scan_expression, validate_expression};
pub use lexical::{
    LogicOperator, Operator, scan_key, scan_list, scan_logic_operator, scan_logic_operator_kind,
    scan_negation, scan_number, scan_operator, scan_operator_kind, scan_string,
};
pub use statement::{scan_bracketed_statement, scan_negated_statement, scan_single_statement};
