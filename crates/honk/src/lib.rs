//! Prover-side support for log-derivative lookups:
//! - computing the inverse column of a lookup trace
//! - checking a trace against the lookup relation row by row

pub mod logderivative_library;
pub mod relation_checker;

#[cfg(test)]
mod tests;

pub use lkp_relations::LookupError;
pub use logderivative_library::{compute_logderivative_inverse, sum_subrelations};
pub use relation_checker::{check_lookup_relation, FirstSubrelationFailures};
