//! Generic Log-Derivative Lookup Relation.
//!
//! Concrete lookup tables implement `GenericLookupSettings` to say which columns take
//! part in the lookup and how their read/write terms are built. The relation itself is
//! table-agnostic and enforces two subrelations:
//!
//! 1. **Inverse correctness** (per row, scaled):
//!    `I · ∏ read_terms · ∏ write_terms − inverse_exists = 0`
//! 2. **Log-derivative sum** (whole trace, unscaled):
//!    `Σ read_pred_i / read_term_i − Σ write_pred_k · read_count_k / write_term_k = 0`
//!
//! The second subrelation is linearly dependent: it only vanishes once summed over every
//! row, so it is never multiplied by the per-row scaling factor.

use std::marker::PhantomData;

use lkp_field::Field;
use lkp_field::FieldParams;

use crate::error::LookupError;
use crate::relation_parameters::RelationParameters;
use crate::relation_types::RelationAlgebra;

/// Settings trait for specializing the generic lookup relation.
///
/// `AllEntities<T>` is the plug-in's view of one evaluation unit: `T = Field<P>` for a
/// trace row, `T = Univariate<P, N>` for an extended edge. Every method that returns an
/// algebraic value is generic over the algebra so that it evaluates identically in
/// both cases.
pub trait GenericLookupSettings: Send + Sync + 'static {
    /// The field parameters for this lookup.
    type P: FieldParams;

    /// The entity view of one evaluation unit.
    type AllEntities<T>;

    /// Number of read terms (lookups performed) per row.
    const READ_TERMS: usize;

    /// Number of write terms (table entries) per row.
    const WRITE_TERMS: usize;

    /// Number of read-count columns exposed through `lookup_read_counts`. Must equal
    /// `WRITE_TERMS`.
    const NUM_READ_COUNTS: usize;

    /// Fast boolean check used before paying for the term algebra when building the
    /// inverse column.
    fn lookup_exists_at_row(row: &Self::AllEntities<Field<Self::P>>) -> bool;

    /// 0/1 flag: does any read or write happen at this unit.
    fn compute_inverse_exists<A: RelationAlgebra<Self::P>>(input: &Self::AllEntities<A>) -> A;

    /// The committed inverse column at this unit.
    fn lookup_inverses<A: RelationAlgebra<Self::P>>(input: &Self::AllEntities<A>) -> A;

    /// Multiplicity with which the `write_index`-th write term has been read.
    fn lookup_read_counts<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        write_index: usize,
    ) -> A;

    /// 0/1 predicate enabling the `read_index`-th read term.
    fn compute_read_term_predicate<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        read_index: usize,
    ) -> A;

    /// 0/1 predicate enabling the `write_index`-th write term.
    fn compute_write_term_predicate<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        write_index: usize,
    ) -> A;

    /// The `read_index`-th read term, typically `γ + Σ column_j · η^j`.
    fn compute_read_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        read_index: usize,
    ) -> A;

    /// The `write_index`-th write term, typically `γ + Σ column_j · η^j`.
    fn compute_write_term<A: RelationAlgebra<Self::P>>(
        input: &Self::AllEntities<A>,
        params: &RelationParameters<Field<Self::P>>,
        write_index: usize,
    ) -> A;
}

/// The log-derivative lookup relation for the table described by `S`.
///
/// Stateless; constructing it validates the plug-in's declared shape.
pub struct GenericLookupRelation<S: GenericLookupSettings> {
    _settings: PhantomData<S>,
}

impl<S: GenericLookupSettings> Clone for GenericLookupRelation<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: GenericLookupSettings> Copy for GenericLookupRelation<S> {}

impl<S: GenericLookupSettings> std::fmt::Debug for GenericLookupRelation<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericLookupRelation")
            .field("read_terms", &S::READ_TERMS)
            .field("write_terms", &S::WRITE_TERMS)
            .finish()
    }
}

impl<S: GenericLookupSettings> GenericLookupRelation<S> {
    pub const NUM_TOTAL_TERMS: usize = S::READ_TERMS + S::WRITE_TERMS;

    pub const NUM_SUBRELATIONS: usize = 2;

    /// Partial lengths (degree + 1) of the two subrelations, assuming every term,
    /// predicate and read count is degree 1 and the existence flag has degree at most
    /// `NUM_TOTAL_TERMS + 1`.
    ///
    /// - inverse correctness: T terms · I → degree T + 1
    /// - log-derivative: predicate · read count · (T - 1 terms) · I → degree T + 2
    pub const SUBRELATION_PARTIAL_LENGTHS: [usize; 2] =
        [Self::NUM_TOTAL_TERMS + 2, Self::NUM_TOTAL_TERMS + 3];

    /// The first subrelation is scaled per row, the second is only checked as a sum.
    pub const SUBRELATION_LINEARLY_INDEPENDENT: [bool; 2] = [true, false];

    /// Validate the plug-in's declared shape.
    pub fn new() -> Result<Self, LookupError> {
        if Self::NUM_TOTAL_TERMS == 0 {
            return Err(LookupError::EmptyLookup);
        }
        if S::NUM_READ_COUNTS != S::WRITE_TERMS {
            return Err(LookupError::ArityMismatch {
                write_terms: S::WRITE_TERMS,
                read_counts: S::NUM_READ_COUNTS,
            });
        }
        Ok(Self {
            _settings: PhantomData,
        })
    }

    /// Maximum partial length across both subrelations.
    pub const fn relation_length() -> usize {
        Self::SUBRELATION_PARTIAL_LENGTHS[1]
    }

    /// True when the contribution of this row is identically zero: no inverse was
    /// committed and no lookup is flagged, so every term of both subrelations vanishes.
    pub fn skip(&self, row: &S::AllEntities<Field<S::P>>) -> bool {
        S::lookup_inverses::<Field<S::P>>(row).is_zero()
            && S::compute_inverse_exists::<Field<S::P>>(row).is_zero()
    }

    /// Accumulate the contribution of one evaluation unit into `evals[0]` and `evals[1]`.
    ///
    /// `evals` is the relation's window into the caller's vector of subrelation
    /// accumulators; it is only ever added to.
    ///
    /// The inverse column holds `I = 1 / ∏ terms`. Each individual reciprocal is
    /// recovered as `1 / term_i = I · ∏_{j≠i} term_j` with a prefix-product sweep
    /// forward and an `I`-seeded sweep backward, so no field inversion happens here.
    pub fn accumulate<A: RelationAlgebra<S::P>>(
        &self,
        evals: &mut [A],
        input: &S::AllEntities<A>,
        params: &RelationParameters<Field<S::P>>,
        scaling_factor: &Field<S::P>,
    ) {
        let num_total_terms = Self::NUM_TOTAL_TERMS;
        debug_assert!(evals.len() >= Self::NUM_SUBRELATIONS);

        let lookup_inverses = S::lookup_inverses(input);

        let mut lookup_terms: Vec<A> = Vec::with_capacity(num_total_terms);
        for i in 0..S::READ_TERMS {
            lookup_terms.push(S::compute_read_term(input, params, i));
        }
        for i in 0..S::WRITE_TERMS {
            lookup_terms.push(S::compute_write_term(input, params, i));
        }

        // denominator_accumulator[i] = ∏_{j<=i} term_j
        let mut denominator_accumulator: Vec<A> = Vec::with_capacity(num_total_terms);
        denominator_accumulator.push(lookup_terms[0].clone());
        for i in 1..num_total_terms {
            let product = denominator_accumulator[i - 1].clone() * lookup_terms[i].clone();
            denominator_accumulator.push(product);
        }

        let inverse_exists = S::compute_inverse_exists(input);

        // Subrelation 0: when I is correct, ∏ terms · I equals the existence flag.
        evals[0] += (denominator_accumulator[num_total_terms - 1].clone()
            * lookup_inverses.clone()
            - inverse_exists)
            * A::from_scalar(*scaling_factor);

        // After this sweep denominator_accumulator[i] = I · ∏_{j≠i} term_j, degree T.
        let mut inverse_accumulator = lookup_inverses;
        for i in (1..num_total_terms).rev() {
            denominator_accumulator[i] =
                denominator_accumulator[i - 1].clone() * inverse_accumulator.clone();
            inverse_accumulator = inverse_accumulator * lookup_terms[i].clone();
        }
        denominator_accumulator[0] = inverse_accumulator;

        // Subrelation 1, read side: predicate (degree 1) → degree T + 1.
        for i in 0..S::READ_TERMS {
            evals[1] +=
                S::compute_read_term_predicate(input, i) * denominator_accumulator[i].clone();
        }

        // Subrelation 1, write side: predicate and read count (degree 1 each) → T + 2.
        for i in 0..S::WRITE_TERMS {
            let predicate = S::compute_write_term_predicate(input, i);
            let read_count = S::lookup_read_counts(input, i);
            evals[1] -=
                predicate * (denominator_accumulator[i + S::READ_TERMS].clone() * read_count);
        }
    }
}
