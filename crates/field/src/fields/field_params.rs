/// Trait defining the parameters of a prime field whose modulus fits in one machine word.
///
/// Elements are stored in canonical form, i.e. as integers in `[0, MODULUS)`.
pub trait FieldParams: 'static + Send + Sync + Sized {
    /// The prime modulus p.
    const MODULUS: u64;

    /// p - 2, the Fermat inversion exponent.
    const MODULUS_MINUS_TWO: u64 = Self::MODULUS - 2;
}
