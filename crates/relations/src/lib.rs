//! Relation-level machinery for the log-derivative lookup argument.
//!
//! - `relation_parameters`: the challenges shared by every row of a proof
//! - `relation_types`: the algebra contract that lets one accumulation routine run on
//!   plain row values, extended edges, or symbolic degrees
//! - `generic_lookup`: the plug-in contract for concrete lookup tables and the
//!   two-subrelation accumulator built on top of it

pub mod degree;
pub mod error;
pub mod generic_lookup;
pub mod relation_parameters;
pub mod relation_types;

// Re-exports for convenience
pub use degree::Degree;
pub use error::LookupError;
pub use generic_lookup::{GenericLookupRelation, GenericLookupSettings};
pub use relation_parameters::RelationParameters;
pub use relation_types::RelationAlgebra;
