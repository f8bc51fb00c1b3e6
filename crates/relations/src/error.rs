use thiserror::Error;

/// Structural defects of a lookup trace or a lookup plug-in.
///
/// Both kinds are deterministic, so there is nothing to retry: the proof attempt
/// that produced one must be abandoned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("lookup exists at row {row} but its read/write denominator is zero")]
    InversionInconsistency { row: usize },

    #[error("lookup declares {write_terms} write terms but exposes {read_counts} read-count columns")]
    ArityMismatch { write_terms: usize, read_counts: usize },

    #[error("lookup declares no read or write terms")]
    EmptyLookup,
}
