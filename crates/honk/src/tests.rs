//! End-to-end tests: build a lookup trace, compute its inverse column, and check the
//! trace against the lookup relation.

use proptest::prelude::*;

use lkp_field::{Field, FieldParams, Fp17, Fp17Params, Goldilocks, GoldilocksParams};
use lkp_flavor::single_column_lookup::{self, SingleColumnEntities, SingleColumnLookup};
use lkp_flavor::tuple_lookup::{self, xor_table, TupleLookup};
use lkp_polynomials::{Polynomial, Univariate};
use lkp_relations::{GenericLookupRelation, GenericLookupSettings, RelationParameters};

use crate::{check_lookup_relation, compute_logderivative_inverse, sum_subrelations, LookupError};

type Fr = Goldilocks;
type SingleColumn = SingleColumnLookup<GoldilocksParams>;
type Tuple = TupleLookup<GoldilocksParams>;

/// Four rows over F17: row 0 holds table entry 5 read twice, rows 1 and 2 read 5,
/// row 3 does nothing.
fn toy_trace() -> single_column_lookup::ProverPolynomials<Fp17Params> {
    let mut polynomials = SingleColumnEntities::new(4);
    polynomials.q_write = Polynomial::from_u64s(&[1, 0, 0, 0]);
    polynomials.table_value = Polynomial::from_u64s(&[5, 0, 0, 0]);
    polynomials.lookup_read_counts = Polynomial::from_u64s(&[2, 0, 0, 0]);
    polynomials.q_read = Polynomial::from_u64s(&[0, 1, 1, 0]);
    polynomials.read_value = Polynomial::from_u64s(&[0, 5, 5, 0]);
    polynomials
}

fn toy_params() -> RelationParameters<Fp17> {
    RelationParameters::from_challenges(Fp17::zero(), Fp17::zero(), Fp17::from(3))
}

/// Append `extra` idle rows to every column.
fn pad_with_idle_rows<P: FieldParams>(
    polynomials: &mut single_column_lookup::ProverPolynomials<P>,
    extra: usize,
) {
    for column in polynomials.get_all_mut() {
        let mut data = column.data().to_vec();
        data.resize(data.len() + extra, Field::zero());
        *column = Polynomial::from_coefficients(data);
    }
}

/// Reads cycling through a table of 32 scattered values.
fn honest_single_column_trace() -> single_column_lookup::ProverPolynomials<GoldilocksParams> {
    let table: Vec<u64> = (0..32u64).map(|i| i * 1_000_003 + 17).collect();
    let reads: Vec<u64> = (0..80).map(|i| table[(i * 7) % table.len()]).collect();
    let mut polynomials = single_column_lookup::ProverPolynomials::from_lookups(&reads, &table);
    pad_with_idle_rows(&mut polynomials, 16);
    polynomials
}

fn honest_tuple_trace() -> tuple_lookup::ProverPolynomials<GoldilocksParams> {
    let table = xor_table(2);
    let reads: Vec<[[u64; 3]; 2]> = (0..48)
        .map(|i| [table[(i * 5) % table.len()], table[(i * 11 + 3) % table.len()]])
        .collect();
    tuple_lookup::ProverPolynomials::from_lookups(&reads, &table)
}

/// Product of every read and write term of a row.
fn row_denominator<S: GenericLookupSettings>(
    row: &S::AllEntities<Field<S::P>>,
    params: &RelationParameters<Field<S::P>>,
) -> Field<S::P> {
    let mut denominator = Field::one();
    for i in 0..S::READ_TERMS {
        denominator *= S::compute_read_term::<Field<S::P>>(row, params, i);
    }
    for k in 0..S::WRITE_TERMS {
        denominator *= S::compute_write_term::<Field<S::P>>(row, params, k);
    }
    denominator
}

#[test]
fn toy_trace_inverse_column() {
    let mut polynomials = toy_trace();
    let params = toy_params();
    compute_logderivative_inverse::<SingleColumnLookup<Fp17Params>, _>(&mut polynomials, &params)
        .unwrap();
    assert_eq!(
        polynomials.lookup_inverses.data(),
        &[5u64, 5, 5, 0].map(Fp17::from)
    );
}

#[test]
fn toy_trace_subrelations_vanish() {
    let mut polynomials = toy_trace();
    let params = toy_params();
    compute_logderivative_inverse::<SingleColumnLookup<Fp17Params>, _>(&mut polynomials, &params)
        .unwrap();
    let relation = GenericLookupRelation::<SingleColumnLookup<Fp17Params>>::new().unwrap();

    // Row 0 contributes -2 * (5 * 3) = 4 and each read row contributes 5 * 3 = 15.
    let expected_row_contributions = [4u64, 15, 15, 0].map(Fp17::from);
    for (i, expected) in expected_row_contributions.iter().enumerate() {
        let mut evals = [Fp17::zero(); 2];
        relation.accumulate(&mut evals, &polynomials.get_row(i), &params, &Fp17::one());
        assert!(evals[0].is_zero(), "inverse subrelation at row {i}");
        assert_eq!(evals[1], *expected, "log-derivative contribution at row {i}");
    }

    assert_eq!(sum_subrelations(&relation, &polynomials, &params), [Fp17::zero(); 2]);
    let failures =
        check_lookup_relation::<SingleColumnLookup<Fp17Params>, _>(&polynomials, &params).unwrap();
    assert!(failures.is_empty(), "{failures:?}");
}

#[test]
fn toy_trace_idle_row_is_skipped() {
    let mut polynomials = toy_trace();
    compute_logderivative_inverse::<SingleColumnLookup<Fp17Params>, _>(
        &mut polynomials,
        &toy_params(),
    )
    .unwrap();
    let relation = GenericLookupRelation::<SingleColumnLookup<Fp17Params>>::new().unwrap();
    assert!(!relation.skip(&polynomials.get_row(0)));
    assert!(relation.skip(&polynomials.get_row(3)));
}

#[test]
fn inverse_column_matches_row_denominators() {
    let mut polynomials = honest_single_column_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params).unwrap();

    let mut active_rows = 0;
    for i in 0..polynomials.circuit_size() {
        let row = polynomials.get_row(i);
        let inverse = polynomials.lookup_inverses.get(i);
        if SingleColumn::lookup_exists_at_row(&row) {
            active_rows += 1;
            assert_eq!(inverse * row_denominator::<SingleColumn>(&row, &params), Fr::one());
        } else {
            assert!(inverse.is_zero(), "idle row {i} must have a zero inverse");
        }
    }
    assert_eq!(active_rows, 80);
}

#[test]
fn honest_single_column_trace_passes() {
    let mut polynomials = honest_single_column_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params).unwrap();

    let failures = check_lookup_relation::<SingleColumn, _>(&polynomials, &params).unwrap();
    assert!(failures.is_empty(), "{failures:?}");
    let relation = GenericLookupRelation::<SingleColumn>::new().unwrap();
    assert_eq!(sum_subrelations(&relation, &polynomials, &params), [Fr::zero(); 2]);
}

#[test]
fn honest_tuple_trace_passes() {
    let mut polynomials = honest_tuple_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<Tuple, _>(&mut polynomials, &params).unwrap();

    let failures = check_lookup_relation::<Tuple, _>(&polynomials, &params).unwrap();
    assert!(failures.is_empty(), "{failures:?}");
    let relation = GenericLookupRelation::<Tuple>::new().unwrap();
    assert_eq!(sum_subrelations(&relation, &polynomials, &params), [Fr::zero(); 2]);
}

#[test]
fn tampered_inverse_fails_at_its_row() {
    let mut polynomials = honest_single_column_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params).unwrap();
    *polynomials.lookup_inverses.at_mut(5) += Fr::one();

    let failures = check_lookup_relation::<SingleColumn, _>(&polynomials, &params).unwrap();
    assert_eq!(failures.get(&0), Some(&5));
}

#[test]
fn tampered_read_count_breaks_the_sum() {
    let mut polynomials = honest_tuple_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<Tuple, _>(&mut polynomials, &params).unwrap();
    *polynomials.lookup_read_counts.at_mut(2) += Fr::one();

    let failures = check_lookup_relation::<Tuple, _>(&polynomials, &params).unwrap();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures.get(&1), Some(&0));

    let relation = GenericLookupRelation::<Tuple>::new().unwrap();
    let [inverse_sum, logderiv_sum] = sum_subrelations(&relation, &polynomials, &params);
    assert!(inverse_sum.is_zero());
    assert!(!logderiv_sum.is_zero());
}

#[test]
fn zero_denominator_on_active_row_is_rejected() {
    let mut polynomials = honest_single_column_trace();
    let params = RelationParameters::<Fr>::get_random();
    // read_value + γ = 0 at rows 3 and 7.
    *polynomials.read_value.at_mut(3) = -params.gamma;
    *polynomials.read_value.at_mut(7) = -params.gamma;

    let result = compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params);
    assert_eq!(result, Err(LookupError::InversionInconsistency { row: 3 }));
    assert!(polynomials.lookup_inverses.is_zero());
}

#[test]
fn extended_edges_fold_to_row_sums() {
    const N: usize = 8;
    let mut polynomials = honest_tuple_trace();
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<Tuple, _>(&mut polynomials, &params).unwrap();
    let relation = GenericLookupRelation::<Tuple>::new().unwrap();
    assert_eq!(GenericLookupRelation::<Tuple>::relation_length(), 6);

    let circuit_size = polynomials.circuit_size();
    assert_eq!(circuit_size % 2, 0);
    let mut total = [Univariate::<GoldilocksParams, N>::zero(); 2];
    for edge_idx in (0..circuit_size).step_by(2) {
        let edge = polynomials.extend_edge::<N>(edge_idx);
        let mut evals = [Univariate::<GoldilocksParams, N>::zero(); 2];
        relation.accumulate(&mut evals, &edge, &params, &Fr::one());

        // Degree T + 1 for the inverse subrelation, T + 2 for the log-derivative one.
        let mut truncated = evals;
        truncated[0].self_extend_from::<5>();
        truncated[1].self_extend_from::<6>();
        assert_eq!(truncated, evals, "degree bound on edge {edge_idx}");

        assert!(evals[0].value_at(0).is_zero() && evals[0].value_at(1).is_zero());
        total[0] += evals[0];
        total[1] += evals[1];
    }

    // Summing the edge polynomials over {0, 1} visits every row exactly once.
    let row_sums = sum_subrelations(&relation, &polynomials, &params);
    assert_eq!(total[0].value_at(0) + total[0].value_at(1), row_sums[0]);
    assert_eq!(total[1].value_at(0) + total[1].value_at(1), row_sums[1]);
    assert!(row_sums[1].is_zero());
}

#[test]
fn large_trace_uses_parallel_inversion() {
    let table: Vec<u64> = (0..256).collect();
    let reads: Vec<u64> = (0..3 * lkp_field::MIN_PARALLEL_CHUNK_LEN as u64)
        .map(|i| (i * 31) % 256)
        .collect();
    let mut polynomials = single_column_lookup::ProverPolynomials::from_lookups(&reads, &table);
    let params = RelationParameters::<Fr>::get_random();
    compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params).unwrap();

    let relation = GenericLookupRelation::<SingleColumn>::new().unwrap();
    assert_eq!(sum_subrelations(&relation, &polynomials, &params), [Fr::zero(); 2]);
    for i in (0..polynomials.circuit_size()).step_by(997) {
        let row = polynomials.get_row(i);
        assert_eq!(
            polynomials.lookup_inverses.get(i) * row_denominator::<SingleColumn>(&row, &params),
            Fr::one()
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_honest_trace_passes(
        table_size in 1usize..24,
        read_indices in proptest::collection::vec(any::<usize>(), 0..64),
        idle_rows in 0usize..8,
    ) {
        let table: Vec<u64> = (0..table_size as u64).map(|v| v * v + 1).collect();
        let reads: Vec<u64> = read_indices.iter().map(|i| table[i % table_size]).collect();
        let mut polynomials = single_column_lookup::ProverPolynomials::from_lookups(&reads, &table);
        pad_with_idle_rows(&mut polynomials, idle_rows);

        let params = RelationParameters::<Fr>::get_random();
        prop_assert!(compute_logderivative_inverse::<SingleColumn, _>(&mut polynomials, &params).is_ok());
        let failures = check_lookup_relation::<SingleColumn, _>(&polynomials, &params).unwrap();
        prop_assert!(failures.is_empty());
    }
}
