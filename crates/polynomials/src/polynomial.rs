use lkp_field::{Field, FieldParams};

/// A trace column: one field element per row.
///
/// Reads past the end of the stored data return zero, so a column allocated for `n`
/// rows can be read at `n` (the "next row" of the last edge) without special-casing.
pub struct Polynomial<P: FieldParams> {
    coefficients: Vec<Field<P>>,
}

// Manual Clone because derive requires P: Clone unnecessarily.
impl<P: FieldParams> Clone for Polynomial<P> {
    fn clone(&self) -> Self {
        Self {
            coefficients: self.coefficients.clone(),
        }
    }
}

impl<P: FieldParams> std::fmt::Debug for Polynomial<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.coefficients.iter()).finish()
    }
}

// ── Constructors ──────────────────────────────────────────────────────────────

impl<P: FieldParams> Polynomial<P> {
    /// Zero column with `size` rows.
    pub fn new(size: usize) -> Self {
        Self {
            coefficients: vec![Field::zero(); size],
        }
    }

    pub fn from_coefficients(coefficients: Vec<Field<P>>) -> Self {
        Self { coefficients }
    }

    /// Column of small integers, reduced into the field.
    pub fn from_u64s(values: &[u64]) -> Self {
        Self::from_coefficients(values.iter().map(|v| Field::from(*v)).collect())
    }

    pub fn random(size: usize) -> Self {
        Self {
            coefficients: (0..size).map(|_| Field::random_element()).collect(),
        }
    }
}

// ── Accessors ─────────────────────────────────────────────────────────────────

impl<P: FieldParams> Polynomial<P> {
    #[inline]
    pub fn get(&self, i: usize) -> Field<P> {
        self.coefficients.get(i).copied().unwrap_or_else(Field::zero)
    }

    /// Mutable reference to row `i`. Panics if `i` is out of range.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> &mut Field<P> {
        &mut self.coefficients[i]
    }

    #[inline]
    pub fn data(&self) -> &[Field<P>] {
        &self.coefficients
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [Field<P>] {
        &mut self.coefficients
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficients.iter().all(|c| c.is_zero())
    }
}
