use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use lkp_field::{Field, FieldParams};

// ---------------------------------------------------------------------------
// Univariate<P, N>
// ---------------------------------------------------------------------------

/// Fixed-size polynomial represented by its evaluations on the domain {0, 1, ..., N-1}.
///
/// This is the "extended" view of a trace column during multivariate folding: the
/// evaluations of the column restricted to one edge, extended past the two hypercube
/// points so that products of columns can be formed pointwise.
pub struct Univariate<P: FieldParams, const N: usize> {
    pub evaluations: [Field<P>; N],
}

// Manual Clone/Copy because derived bounds require P: Clone/Copy unnecessarily.
impl<P: FieldParams, const N: usize> Clone for Univariate<P, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams, const N: usize> Copy for Univariate<P, N> {}

impl<P: FieldParams, const N: usize> std::fmt::Debug for Univariate<P, N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Univariate")
            .field("evaluations", &self.evaluations)
            .finish()
    }
}

impl<P: FieldParams, const N: usize> Univariate<P, N> {
    #[inline]
    pub fn new(evaluations: [Field<P>; N]) -> Self {
        Self { evaluations }
    }

    /// All evaluations set to the same scalar value.
    #[inline]
    pub fn from_scalar(value: Field<P>) -> Self {
        Self {
            evaluations: [value; N],
        }
    }

    #[inline]
    pub fn zero() -> Self {
        Self::from_scalar(Field::zero())
    }

    /// The degree-1 polynomial through `(0, at_zero)` and `(1, at_one)`, evaluated on
    /// the whole domain.
    pub fn from_edge(at_zero: Field<P>, at_one: Field<P>) -> Self {
        let delta = at_one - at_zero;
        let mut evaluations = [at_zero; N];
        for i in 1..N {
            evaluations[i] = evaluations[i - 1] + delta;
        }
        Self { evaluations }
    }

    /// Random evaluations (for testing).
    pub fn random() -> Self {
        let mut evaluations = [Field::zero(); N];
        for e in evaluations.iter_mut() {
            *e = Field::random_element();
        }
        Self { evaluations }
    }

    #[inline]
    pub fn value_at(&self, i: usize) -> Field<P> {
        self.evaluations[i]
    }

    pub fn is_zero(&self) -> bool {
        self.evaluations.iter().all(|e| e.is_zero())
    }

    /// Domain size (number of evaluation points).
    #[inline]
    pub const fn size() -> usize {
        N
    }

    /// Extend evaluations from domain {0..INITIAL-1} to {0..N-1} using Newton
    /// forward differences, overwriting everything from index `INITIAL` on.
    ///
    /// Equivalently, replaces `self` with the unique polynomial of degree below
    /// `INITIAL` that agrees with it on the first `INITIAL` points.
    pub fn self_extend_from<const INITIAL: usize>(&mut self) {
        assert!(
            INITIAL >= 1 && INITIAL <= N,
            "self_extend_from: need 1 <= INITIAL <= N"
        );
        let mut diffs = [Field::<P>::zero(); N];
        diffs[..INITIAL].copy_from_slice(&self.evaluations[..INITIAL]);

        // diffs[k] = Delta^k f(0)
        for i in 1..INITIAL {
            for j in (i..INITIAL).rev() {
                diffs[j] = diffs[j] - diffs[j - 1];
            }
        }

        // Shift the origin one step at a time; after x shifts diffs[0] = f(x).
        for x in 1..N {
            for j in 0..INITIAL - 1 {
                diffs[j] = diffs[j] + diffs[j + 1];
            }
            if x >= INITIAL {
                self.evaluations[x] = diffs[0];
            }
        }
    }
}

// ---------------------------------------------------------------------------
// PartialEq
// ---------------------------------------------------------------------------

impl<P: FieldParams, const N: usize> PartialEq for Univariate<P, N> {
    fn eq(&self, other: &Self) -> bool {
        self.evaluations == other.evaluations
    }
}

impl<P: FieldParams, const N: usize> Eq for Univariate<P, N> {}

// ---------------------------------------------------------------------------
// Pointwise arithmetic
// ---------------------------------------------------------------------------

impl<P: FieldParams, const N: usize> Add for Univariate<P, N> {
    type Output = Self;
    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<P: FieldParams, const N: usize> AddAssign for Univariate<P, N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        for (a, b) in self.evaluations.iter_mut().zip(rhs.evaluations) {
            *a += b;
        }
    }
}

impl<P: FieldParams, const N: usize> Sub for Univariate<P, N> {
    type Output = Self;
    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<P: FieldParams, const N: usize> SubAssign for Univariate<P, N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        for (a, b) in self.evaluations.iter_mut().zip(rhs.evaluations) {
            *a -= b;
        }
    }
}

impl<P: FieldParams, const N: usize> Mul for Univariate<P, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<P: FieldParams, const N: usize> MulAssign for Univariate<P, N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        for (a, b) in self.evaluations.iter_mut().zip(rhs.evaluations) {
            *a *= b;
        }
    }
}

impl<P: FieldParams, const N: usize> Mul<Field<P>> for Univariate<P, N> {
    type Output = Self;
    #[inline]
    fn mul(mut self, rhs: Field<P>) -> Self {
        for e in self.evaluations.iter_mut() {
            *e *= rhs;
        }
        self
    }
}

impl<P: FieldParams, const N: usize> Neg for Univariate<P, N> {
    type Output = Self;
    #[inline]
    fn neg(mut self) -> Self {
        for e in self.evaluations.iter_mut() {
            *e = -*e;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lkp_field::{Goldilocks, GoldilocksParams};

    type Fr = Goldilocks;

    #[test]
    fn from_edge_is_linear() {
        let u = Univariate::<GoldilocksParams, 5>::from_edge(Fr::from(3), Fr::from(10));
        let expected = [3u64, 10, 17, 24, 31].map(Fr::from);
        assert_eq!(u.evaluations, expected);
    }

    #[test]
    fn extend_recovers_quadratic() {
        // f(x) = x^2 + x + 1
        let f = |x: u64| Fr::from(x * x + x + 1);
        let mut u = Univariate::<GoldilocksParams, 7>::zero();
        for i in 0..3 {
            u.evaluations[i] = f(i as u64);
        }
        u.self_extend_from::<3>();
        for i in 0..7 {
            assert_eq!(u.value_at(i), f(i as u64));
        }
    }

    #[test]
    fn product_of_edges_has_summed_degree() {
        let a = Univariate::<GoldilocksParams, 6>::from_edge(Fr::random_element(), Fr::random_element());
        let b = Univariate::<GoldilocksParams, 6>::from_edge(Fr::random_element(), Fr::random_element());
        let c = Univariate::<GoldilocksParams, 6>::from_edge(Fr::random_element(), Fr::random_element());
        let product = a * b * c;
        let mut truncated = product;
        truncated.self_extend_from::<4>();
        assert_eq!(product, truncated);
    }

    #[test]
    fn pointwise_ops() {
        let a = Univariate::<GoldilocksParams, 3>::new([1u64, 2, 3].map(Fr::from));
        let b = Univariate::<GoldilocksParams, 3>::from_scalar(Fr::from(2));
        assert_eq!((a + b).evaluations, [3u64, 4, 5].map(Fr::from));
        assert_eq!((a - b).evaluations, [Fr::from_i64(-1), Fr::zero(), Fr::one()]);
        assert_eq!((a * b).evaluations, [2u64, 4, 6].map(Fr::from));
        assert_eq!((a * Fr::from(3)).evaluations, [3u64, 6, 9].map(Fr::from));
        assert!((a - a).is_zero());
    }
}
