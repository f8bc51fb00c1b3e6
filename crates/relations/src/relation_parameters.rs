//! Challenges used by the lookup relations.
//!
//! Sampled once per proof by the transcript and shared, read-only, by every row.

use lkp_field::{Field, FieldParams};

/// Container for the challenges consumed by log-derivative lookup relations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationParameters<T: Clone> {
    /// Tuple compression challenge.
    pub eta: T,
    /// eta^2
    pub eta_two: T,
    /// eta^3
    pub eta_three: T,
    /// Secondary compression challenge (column-index separation).
    pub beta: T,
    /// beta^2
    pub beta_sqr: T,
    /// beta^3
    pub beta_cube: T,
    /// Shift applied to every read and write term.
    pub gamma: T,
}

impl<P: FieldParams> RelationParameters<Field<P>> {
    /// All parameters initialized to zero.
    pub fn new() -> Self {
        Self {
            eta: Field::zero(),
            eta_two: Field::zero(),
            eta_three: Field::zero(),
            beta: Field::zero(),
            beta_sqr: Field::zero(),
            beta_cube: Field::zero(),
            gamma: Field::zero(),
        }
    }

    /// Build the parameter bag from the three sampled challenges, deriving the powers.
    pub fn from_challenges(eta: Field<P>, beta: Field<P>, gamma: Field<P>) -> Self {
        let eta_two = eta.sqr();
        let beta_sqr = beta.sqr();
        Self {
            eta,
            eta_two,
            eta_three: eta_two * eta,
            beta,
            beta_sqr,
            beta_cube: beta_sqr * beta,
            gamma,
        }
    }

    /// Generate random parameters (for testing).
    pub fn get_random() -> Self {
        Self::from_challenges(
            Field::random_element(),
            Field::random_element(),
            Field::random_element(),
        )
    }
}

impl<P: FieldParams> Default for RelationParameters<Field<P>> {
    fn default() -> Self {
        Self::new()
    }
}
