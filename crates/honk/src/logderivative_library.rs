//! Compute the inverse column required by log-derivative lookups.

use rayon::prelude::*;
use tracing::{debug, debug_span};

use lkp_field::{batch_invert_parallel, Field};
use lkp_flavor::ProverPolynomialsAccess;
use lkp_relations::{GenericLookupRelation, GenericLookupSettings, LookupError, RelationParameters};

/// Compute the inverse polynomial I(X) required for log-derivative lookups.
///
/// For each row i where a lookup exists:
///   I[i] = 1 / (∏ read_term[j] * ∏ write_term[k])
///
/// If no lookup exists at row i, I[i] = 0.
///
/// Fails with [`LookupError::InversionInconsistency`] at the first row that flags a
/// lookup but whose denominator is zero; the inverse column is left untouched in
/// that case.
pub fn compute_logderivative_inverse<S, Polys>(
    polynomials: &mut Polys,
    relation_parameters: &RelationParameters<Field<S::P>>,
) -> Result<(), LookupError>
where
    S: GenericLookupSettings,
    Polys: ProverPolynomialsAccess<S::P, Row = S::AllEntities<Field<S::P>>> + Sync,
{
    GenericLookupRelation::<S>::new()?;

    let circuit_size = polynomials.circuit_size();
    let _span = debug_span!(
        "compute_logderivative_inverse",
        circuit_size,
        read_terms = S::READ_TERMS,
        write_terms = S::WRITE_TERMS
    )
    .entered();

    // None where no lookup happens at the row.
    let source: &Polys = polynomials;
    let denominators: Vec<Option<Field<S::P>>> = (0..circuit_size)
        .into_par_iter()
        .map(|i| {
            let row = source.get_row(i);
            if !S::lookup_exists_at_row(&row) {
                return None;
            }
            let mut denominator = Field::<S::P>::one();
            for read_index in 0..S::READ_TERMS {
                denominator *=
                    S::compute_read_term::<Field<S::P>>(&row, relation_parameters, read_index);
            }
            for write_index in 0..S::WRITE_TERMS {
                denominator *=
                    S::compute_write_term::<Field<S::P>>(&row, relation_parameters, write_index);
            }
            Some(denominator)
        })
        .collect();

    if let Some(row) = denominators
        .iter()
        .position(|d| matches!(d, Some(denominator) if denominator.is_zero()))
    {
        return Err(LookupError::InversionInconsistency { row });
    }

    let num_active_rows = denominators.iter().filter(|d| d.is_some()).count();
    let mut inverses: Vec<Field<S::P>> = denominators
        .into_iter()
        .map(|d| d.unwrap_or_else(Field::zero))
        .collect();
    batch_invert_parallel(&mut inverses);
    debug!(num_active_rows, "inverted lookup denominators");

    let inverse_polynomial = polynomials.lookup_inverses_mut();
    for (slot, inverse) in inverse_polynomial.data_mut().iter_mut().zip(inverses) {
        *slot = inverse;
    }
    Ok(())
}

/// Sum the contribution of every row to both subrelations, with unit scaling.
///
/// Rows are independent, so they are accumulated in parallel and the partial sums
/// combined at the end. On an honest trace with a correct inverse column both sums
/// are zero.
pub fn sum_subrelations<S, Polys>(
    relation: &GenericLookupRelation<S>,
    polynomials: &Polys,
    relation_parameters: &RelationParameters<Field<S::P>>,
) -> [Field<S::P>; 2]
where
    S: GenericLookupSettings,
    Polys: ProverPolynomialsAccess<S::P, Row = S::AllEntities<Field<S::P>>> + Sync,
{
    let _span = debug_span!("sum_subrelations", circuit_size = polynomials.circuit_size()).entered();
    let one = Field::<S::P>::one();
    (0..polynomials.circuit_size())
        .into_par_iter()
        .fold(
            || [Field::<S::P>::zero(); 2],
            |mut evals, i| {
                let row = polynomials.get_row(i);
                if !relation.skip(&row) {
                    relation.accumulate::<Field<S::P>>(&mut evals, &row, relation_parameters, &one);
                }
                evals
            },
        )
        .reduce(
            || [Field::<S::P>::zero(); 2],
            |a, b| [a[0] + b[0], a[1] + b[1]],
        )
}
