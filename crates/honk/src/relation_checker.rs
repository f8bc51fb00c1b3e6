//! Debugging utility for checking that a lookup trace satisfies its relation.

use std::collections::BTreeMap;

use tracing::warn;

use lkp_field::Field;
use lkp_flavor::ProverPolynomialsAccess;
use lkp_relations::{GenericLookupRelation, GenericLookupSettings, LookupError, RelationParameters};

/// Map from subrelation index to the first row index where it failed.
pub type FirstSubrelationFailures = BTreeMap<usize, u32>;

/// Check a lookup trace against both subrelations of its relation.
///
/// The linearly independent subrelation must vanish at every row, so its first
/// failing row is reported. The linearly dependent one only vanishes as a sum over
/// the whole trace; when it fails it is reported at row 0.
///
/// Returns a map of first failures per subrelation (empty if all pass).
pub fn check_lookup_relation<S, Polys>(
    polynomials: &Polys,
    params: &RelationParameters<Field<S::P>>,
) -> Result<FirstSubrelationFailures, LookupError>
where
    S: GenericLookupSettings,
    Polys: ProverPolynomialsAccess<S::P, Row = S::AllEntities<Field<S::P>>>,
{
    let relation = GenericLookupRelation::<S>::new()?;
    let linearly_independent = GenericLookupRelation::<S>::SUBRELATION_LINEARLY_INDEPENDENT;

    let mut first_failures = FirstSubrelationFailures::new();
    let mut result = [Field::<S::P>::zero(); 2];
    let one = Field::<S::P>::one();

    for i in 0..polynomials.circuit_size() {
        let row = polynomials.get_row(i);
        relation.accumulate::<Field<S::P>>(&mut result, &row, params, &one);

        for (sub_idx, element) in result.iter().enumerate() {
            if linearly_independent[sub_idx] && !element.is_zero() {
                first_failures.entry(sub_idx).or_insert(i as u32);
            }
        }
    }

    for (sub_idx, element) in result.iter().enumerate() {
        if !linearly_independent[sub_idx] && !element.is_zero() {
            first_failures.entry(sub_idx).or_insert(0);
        }
    }

    for (sub_idx, row) in &first_failures {
        warn!(subrelation = sub_idx, row, "lookup subrelation failed");
    }
    Ok(first_failures)
}
