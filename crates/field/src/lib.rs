//! Word-sized prime fields and the batch inversion engine used by the lookup argument.
//!
//! Field arithmetic itself is a collaborator of the lookup core, so this crate stays
//! deliberately small: one element type `Field<P>` parameterised by a modulus, plus
//! the amortized inversion routines that produce the log-derivative inverse column.

pub mod fields;

pub use fields::batch_inverse::{
    batch_invert, batch_invert_chunked, batch_invert_parallel, MIN_PARALLEL_CHUNK_LEN,
};
pub use fields::field::Field;
pub use fields::field_params::FieldParams;
pub use fields::prime_fields::{Fp17, Fp17Params, Goldilocks, GoldilocksParams};
