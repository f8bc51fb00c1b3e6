//! The algebra a relation is evaluated in.
//!
//! A relation is written once, generic over `A: RelationAlgebra<P>`, and then run on
//! - `Field<P>`: one row of the trace (relation checking, verifier evaluations),
//! - `Univariate<P, N>`: one extended edge during sumcheck folding,
//! - `Degree`: a symbolic stand-in used to audit degree bounds.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use lkp_field::{Field, FieldParams};
use lkp_polynomials::Univariate;

/// Minimal algebraic contract shared by plain values and extended values.
pub trait RelationAlgebra<P: FieldParams>:
    Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + SubAssign
{
    /// Embed a scalar (a challenge, a constant) into the algebra.
    fn from_scalar(value: Field<P>) -> Self;

    fn zero() -> Self {
        Self::from_scalar(Field::zero())
    }

    fn one() -> Self {
        Self::from_scalar(Field::one())
    }
}

impl<P: FieldParams> RelationAlgebra<P> for Field<P> {
    #[inline]
    fn from_scalar(value: Field<P>) -> Self {
        value
    }
}

impl<P: FieldParams, const N: usize> RelationAlgebra<P> for Univariate<P, N> {
    #[inline]
    fn from_scalar(value: Field<P>) -> Self {
        Univariate::from_scalar(value)
    }
}
