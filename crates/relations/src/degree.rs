//! Symbolic degree tracking.
//!
//! Evaluating a relation with every trace column replaced by `Degree(1)` and every
//! challenge by `Degree(0)` yields an upper bound on the total degree of each
//! subrelation, which is what sizes the sumcheck univariates.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use lkp_field::{Field, FieldParams};

use crate::relation_types::RelationAlgebra;

/// Upper bound on the total degree of an expression in the trace columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Degree(pub usize);

impl Degree {
    /// The degree of a single trace column.
    pub const COLUMN: Degree = Degree(1);
}

impl Add for Degree {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Degree(self.0.max(rhs.0))
    }
}

impl AddAssign for Degree {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Degree {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Degree(self.0.max(rhs.0))
    }
}

impl SubAssign for Degree {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul for Degree {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Degree(self.0 + rhs.0)
    }
}

impl<P: FieldParams> RelationAlgebra<P> for Degree {
    fn from_scalar(_value: Field<P>) -> Self {
        Degree(0)
    }
}
