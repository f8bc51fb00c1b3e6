pub mod polynomial;
pub mod univariate;

pub use polynomial::Polynomial;
pub use univariate::Univariate;
