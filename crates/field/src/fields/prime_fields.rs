//! Concrete parameter sets.

use super::field::Field;
use super::field_params::FieldParams;

/// The toy field F_17. Small enough to check lookup traces by hand.
pub struct Fp17Params;

impl FieldParams for Fp17Params {
    const MODULUS: u64 = 17;
}

pub type Fp17 = Field<Fp17Params>;

/// The Goldilocks field, p = 2^64 - 2^32 + 1.
///
/// Large enough that randomly sampled challenges never collide with trace values in
/// practice, which is what the randomized tests rely on.
pub struct GoldilocksParams;

impl FieldParams for GoldilocksParams {
    const MODULUS: u64 = 0xffff_ffff_0000_0001;
}

pub type Goldilocks = Field<GoldilocksParams>;
