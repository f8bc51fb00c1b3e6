//! Tuple lookup: each row may perform two reads of 3-column tuples and may hold one
//! table tuple. Shaped after a XOR table, whose entries are `(x, y, x ^ y)`.
//!
//! Every term compresses its tuple with η: `c0 + η·c1 + η²·c2 + γ`.

use std::collections::HashMap;
use std::marker::PhantomData;

use lkp_field::{Field, FieldParams};
use lkp_polynomials::{Polynomial, Univariate};
use lkp_relations::{GenericLookupSettings, RelationAlgebra, RelationParameters};

use crate::define_flavor_members;

define_flavor_members! {
    #[derive(Clone, Debug)]
    pub struct TupleEntities<T> {
        /// Enables both reads of the row.
        pub q_lookup: T,
        pub read_a_0: T,
        pub read_a_1: T,
        pub read_a_2: T,
        pub read_b_0: T,
        pub read_b_1: T,
        pub read_b_2: T,
        pub q_table: T,
        pub table_0: T,
        pub table_1: T,
        pub table_2: T,
        pub lookup_read_counts: T,
        pub lookup_inverses: T,
    }
}

pub type ProverPolynomials<P> = TupleEntities<Polynomial<P>>;
pub type AllValues<P> = TupleEntities<Field<P>>;
pub type ExtendedEdges<P, const N: usize> = TupleEntities<Univariate<P, N>>;

/// Every `(x, y, x ^ y)` with `x, y < 2^bits`.
pub fn xor_table(bits: u32) -> Vec<[u64; 3]> {
    let size = 1u64 << bits;
    (0..size)
        .flat_map(|x| (0..size).map(move |y| [x, y, x ^ y]))
        .collect()
}

impl<P: FieldParams> ProverPolynomials<P> {
    /// Lay out a trace with the read pair `i` at row `i` and table tuple `k` at row
    /// `k`, and fill in the read counts. Both reads of a pair are counted.
    pub fn from_lookups(reads: &[[[u64; 3]; 2]], table: &[[u64; 3]]) -> Self {
        let circuit_size = reads.len().max(table.len());
        let mut polynomials = Self::new(circuit_size);

        let mut first_row: HashMap<[u64; 3], usize> = HashMap::new();
        for (row, tuple) in table.iter().enumerate() {
            *polynomials.q_table.at_mut(row) = Field::one();
            *polynomials.table_0.at_mut(row) = Field::from(tuple[0]);
            *polynomials.table_1.at_mut(row) = Field::from(tuple[1]);
            *polynomials.table_2.at_mut(row) = Field::from(tuple[2]);
            first_row.entry(*tuple).or_insert(row);
        }
        for (row, [a, b]) in reads.iter().enumerate() {
            *polynomials.q_lookup.at_mut(row) = Field::one();
            *polynomials.read_a_0.at_mut(row) = Field::from(a[0]);
            *polynomials.read_a_1.at_mut(row) = Field::from(a[1]);
            *polynomials.read_a_2.at_mut(row) = Field::from(a[2]);
            *polynomials.read_b_0.at_mut(row) = Field::from(b[0]);
            *polynomials.read_b_1.at_mut(row) = Field::from(b[1]);
            *polynomials.read_b_2.at_mut(row) = Field::from(b[2]);
            for tuple in [a, b] {
                if let Some(&table_row) = first_row.get(tuple) {
                    *polynomials.lookup_read_counts.at_mut(table_row) += Field::one();
                }
            }
        }
        polynomials
    }
}

/// Settings for the two-read tuple lookup over the field `F`.
pub struct TupleLookup<F: FieldParams> {
    _field: PhantomData<fn() -> F>,
}

fn compress<F: FieldParams, A: RelationAlgebra<F>>(
    columns: [&A; 3],
    params: &RelationParameters<Field<F>>,
) -> A {
    columns[0].clone()
        + columns[1].clone() * A::from_scalar(params.eta)
        + columns[2].clone() * A::from_scalar(params.eta_two)
        + A::from_scalar(params.gamma)
}

impl<F: FieldParams> GenericLookupSettings for TupleLookup<F> {
    type P = F;
    type AllEntities<T> = TupleEntities<T>;

    const READ_TERMS: usize = 2;
    const WRITE_TERMS: usize = 1;
    const NUM_READ_COUNTS: usize = 1;

    fn lookup_exists_at_row(row: &Self::AllEntities<Field<Self::P>>) -> bool {
        !row.q_lookup.is_zero() || !row.q_table.is_zero()
    }

    fn compute_inverse_exists<A: RelationAlgebra<Self::P>>(input: &Self::AllEntities<A>) -> A {
        let is_read = input.q_lookup.clone();
        let is_write = input.q_table.clone();
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
        input.q_lookup.clone()
    }

    fn compute_write_term_predicate<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        _write_index: usize,
    ) -> A {
        input.q_table.clone()
    }

    fn compute_read_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        read_index: usize,
    ) -> A {
        if read_index == 0 {
            compress([&input.read_a_0, &input.read_a_1, &input.read_a_2], params)
        } else {
            compress([&input.read_b_0, &input.read_b_1, &input.read_b_2], params)
        }
    }

    fn compute_write_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        _write_index: usize,
    ) -> A {
        compress([&input.table_0, &input.table_1, &input.table_2], params)
    }
}
