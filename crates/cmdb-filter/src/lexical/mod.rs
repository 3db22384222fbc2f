//! Token recognizers for the filter grammar.
//!
//! Each recognizer inspects a half-open window `[start, end)` of the input and
//! returns the cursor where the next construct is expected to begin. The
//! public `scan_*` functions wrap the crate-internal recognizers, which share a
//! [`Window`](crate::window::Window) instead of re-deriving bounds.

mod key;
mod literal;
mod logic;
mod negation;
mod operator;
#[cfg(test)]
pub(crate) mod test_support;

pub use key::scan_key;
pub use literal::{scan_list, scan_number, scan_string};
pub use logic::{LogicOperator, scan_logic_operator, scan_logic_operator_kind};
pub use negation::scan_negation;
pub use operator::{Operator, scan_operator, scan_operator_kind};

pub(crate) use key::key;
pub(crate) use literal::{list, scalar, string};
pub(crate) use logic::logic_operator;
pub(crate) use negation::{is_negation_keyword, negation};
pub(crate) use operator::operator;
