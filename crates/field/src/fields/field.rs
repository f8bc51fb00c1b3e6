use std::iter::{Product, Sum};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::batch_inverse;
use super::field_params::FieldParams;

// ---------------------------------------------------------------------------
// Field<P> struct
// ---------------------------------------------------------------------------

/// A prime field element, generic over parameters `P`.
///
/// The value is always kept fully reduced in `[0, p)`, so equality is plain limb
/// comparison and `is_zero` needs no normalisation.
#[repr(transparent)]
pub struct Field<P: FieldParams> {
    pub data: u64,
    _phantom: PhantomData<P>,
}

// Manual Clone/Copy because PhantomData<P> doesn't require P: Copy
impl<P: FieldParams> Clone for Field<P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: FieldParams> Copy for Field<P> {}

impl<P: FieldParams> std::fmt::Debug for Field<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Field({})", self.data)
    }
}

impl<P: FieldParams> std::fmt::Display for Field<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}

impl<P: FieldParams> Default for Field<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

// ---------------------------------------------------------------------------
// Constructors
// ---------------------------------------------------------------------------

impl<P: FieldParams> Field<P> {
    /// Zero element (additive identity).
    #[inline]
    pub const fn zero() -> Self {
        Self {
            data: 0,
            _phantom: PhantomData,
        }
    }

    /// One element (multiplicative identity).
    #[inline]
    pub const fn one() -> Self {
        Self {
            data: 1,
            _phantom: PhantomData,
        }
    }

    /// Construct from a u64, reducing modulo p.
    #[inline]
    pub const fn from(val: u64) -> Self {
        Self {
            data: val % P::MODULUS,
            _phantom: PhantomData,
        }
    }

    /// Construct from a signed integer; negative values map to `p - |val|`.
    pub fn from_i64(val: i64) -> Self {
        let magnitude = Self::from(val.unsigned_abs());
        if val < 0 {
            -magnitude
        } else {
            magnitude
        }
    }

    /// Construct from a value already known to be reduced.
    #[inline]
    pub const fn from_raw(data: u64) -> Self {
        Self {
            data,
            _phantom: PhantomData,
        }
    }

    /// Generate a uniformly random field element.
    pub fn random_element() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        Self::from_raw(rng.random_range(0..P::MODULUS))
    }
}

// ---------------------------------------------------------------------------
// Core arithmetic
// ---------------------------------------------------------------------------

impl<P: FieldParams> Field<P> {
    /// The canonical integer representative in `[0, p)`.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.data
    }

    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        // Both operands are < p, so a single conditional subtraction suffices even
        // when the raw sum overflows the word.
        let (sum, overflow) = self.data.overflowing_add(other.data);
        if overflow || sum >= P::MODULUS {
            Self::from_raw(sum.wrapping_sub(P::MODULUS))
        } else {
            Self::from_raw(sum)
        }
    }

    #[inline]
    pub fn subtract(&self, other: &Self) -> Self {
        if self.data >= other.data {
            Self::from_raw(self.data - other.data)
        } else {
            Self::from_raw(P::MODULUS - (other.data - self.data))
        }
    }

    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let wide = (self.data as u128) * (other.data as u128);
        Self::from_raw((wide % P::MODULUS as u128) as u64)
    }

    #[inline]
    pub fn sqr(&self) -> Self {
        self.multiply(self)
    }

    #[inline]
    pub fn negate(&self) -> Self {
        if self.data == 0 {
            *self
        } else {
            Self::from_raw(P::MODULUS - self.data)
        }
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.data == 0
    }

    /// Exponentiation via square-and-multiply.
    pub fn pow(&self, exp: u64) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        let mut exp = exp;
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.multiply(&base);
            }
            base = base.sqr();
            exp >>= 1;
        }
        result
    }

    /// Modular inverse via Fermat's little theorem: self^(p-2) mod p.
    ///
    /// The inverse of zero is zero; callers that need to distinguish the two must
    /// check `is_zero` first.
    pub fn invert(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }
        self.pow(P::MODULUS_MINUS_TWO)
    }

    /// Invert every element of `values` in place using a single field inversion.
    /// Zero entries are left as zero.
    pub fn batch_invert(values: &mut [Self]) {
        batch_inverse::batch_invert(values);
    }
}

// ---------------------------------------------------------------------------
// Operator impls
// ---------------------------------------------------------------------------

impl<P: FieldParams> Add for Field<P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Field::add(&self, &rhs)
    }
}

impl<P: FieldParams> AddAssign for Field<P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = Field::add(self, &rhs);
    }
}

impl<P: FieldParams> Sub for Field<P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Field::subtract(&self, &rhs)
    }
}

impl<P: FieldParams> SubAssign for Field<P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = Field::subtract(self, &rhs);
    }
}

impl<P: FieldParams> Mul for Field<P> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Field::multiply(&self, &rhs)
    }
}

impl<P: FieldParams> MulAssign for Field<P> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = Field::multiply(self, &rhs);
    }
}

impl<P: FieldParams> Neg for Field<P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Field::negate(&self)
    }
}

impl<P: FieldParams> PartialEq for Field<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<P: FieldParams> Eq for Field<P> {}

impl<P: FieldParams> Sum for Field<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<P: FieldParams> Product for Field<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}
