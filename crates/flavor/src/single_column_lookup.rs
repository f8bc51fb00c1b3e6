//! Single-column lookup: each row may read one value and may hold one table entry.
//!
//! Read term:  `read_value + γ`
//! Write term: `table_value + γ`

use std::collections::HashMap;
use std::marker::PhantomData;

use lkp_field::{Field, FieldParams};
use lkp_polynomials::{Polynomial, Univariate};
use lkp_relations::{GenericLookupSettings, RelationAlgebra, RelationParameters};

use crate::define_flavor_members;

define_flavor_members! {
    #[derive(Clone, Debug)]
    pub struct SingleColumnEntities<T> {
        /// 1 where the row reads `read_value` from the table.
        pub q_read: T,
        pub read_value: T,
        /// 1 where the row holds the table entry `table_value`.
        pub q_write: T,
        pub table_value: T,
        /// How many times `table_value` is read across the trace.
        pub lookup_read_counts: T,
        pub lookup_inverses: T,
    }
}

pub type ProverPolynomials<P> = SingleColumnEntities<Polynomial<P>>;
pub type AllValues<P> = SingleColumnEntities<Field<P>>;
pub type ExtendedEdges<P, const N: usize> = SingleColumnEntities<Univariate<P, N>>;

impl<P: FieldParams> ProverPolynomials<P> {
    /// Lay out a trace with read `i` at row `i` and table entry `k` at row `k`, and
    /// fill in the read counts. A value listed twice in `table` is credited to its
    /// first row.
    pub fn from_lookups(reads: &[u64], table: &[u64]) -> Self {
        let circuit_size = reads.len().max(table.len());
        let mut polynomials = Self::new(circuit_size);

        let mut first_row: HashMap<u64, usize> = HashMap::new();
        for (row, value) in table.iter().enumerate() {
            *polynomials.q_write.at_mut(row) = Field::one();
            *polynomials.table_value.at_mut(row) = Field::from(*value);
            first_row.entry(*value).or_insert(row);
        }
        for (row, value) in reads.iter().enumerate() {
            *polynomials.q_read.at_mut(row) = Field::one();
            *polynomials.read_value.at_mut(row) = Field::from(*value);
            if let Some(&table_row) = first_row.get(value) {
                *polynomials.lookup_read_counts.at_mut(table_row) += Field::one();
            }
        }
        polynomials
    }
}

/// Settings for the single-column lookup over the field `F`.
pub struct SingleColumnLookup<F: FieldParams> {
    _field: PhantomData<fn() -> F>,
}

impl<F: FieldParams> GenericLookupSettings for SingleColumnLookup<F> {
    type P = F;
    type AllEntities<T> = SingleColumnEntities<T>;

    const READ_TERMS: usize = 1;
    const WRITE_TERMS: usize = 1;
    const NUM_READ_COUNTS: usize = 1;

    fn lookup_exists_at_row(row: &Self::AllEntities<Field<Self::P>>) -> bool {
        !row.q_read.is_zero() || !row.q_write.is_zero()
    }

    fn compute_inverse_exists<A: RelationAlgebra<Self::P>>(input: &Self::AllEntities<A>) -> A {
        // Boolean OR of the two selectors.
        let is_read = input.q_read.clone();
        let is_write = input.q_write.clone();
        is_read.clone() + is_write.clone() - is_read * is_write
    }

    fn lookup_inverses<A: RelationAlgebra<Self::P>>(input: &Self::AllEntities<A>) -> A {
        input.lookup_inverses.clone()
    }

    fn lookup_read_counts<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        _write_index: usize,
    ) -> A {
        input.lookup_read_counts.clone()
    }

    fn compute_read_term_predicate<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        _read_index: usize,
    ) -> A {
        input.q_read.clone()
    }

    fn compute_write_term_predicate<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        _write_index: usize,
    ) -> A {
        input.q_write.clone()
    }

    fn compute_read_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        _read_index: usize,
    ) -> A {
        input.read_value.clone() + A::from_scalar(params.gamma)
    }

    fn compute_write_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        _write_index: usize,
    ) -> A {
        input.table_value.clone() + A::from_scalar(params.gamma)
    }
}
