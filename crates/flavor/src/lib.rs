//! Lookup flavors: the column layouts that plug into the generic log-derivative
//! lookup relation.
//!
//! Each flavor declares its entity struct with [`define_flavor_members!`] and a
//! settings type implementing `GenericLookupSettings`.

pub mod flavor_macros;
pub mod single_column_lookup;
pub mod tuple_lookup;

use lkp_field::FieldParams;
use lkp_polynomials::Polynomial;

pub use single_column_lookup::{SingleColumnEntities, SingleColumnLookup};
pub use tuple_lookup::{TupleEntities, TupleLookup};

/// Access to the trace a lookup flavor is proven over.
pub trait ProverPolynomialsAccess<P: FieldParams> {
    /// The plain evaluations of every column at one row.
    type Row;

    fn circuit_size(&self) -> usize;

    fn get_row(&self, row_idx: usize) -> Self::Row;

    /// The inverse column. Only the inverse computation writes through this.
    fn lookup_inverses_mut(&mut self) -> &mut Polynomial<P>;
}

#[doc(hidden)]
pub mod __private {
    pub use lkp_field::{Field, FieldParams};
    pub use lkp_polynomials::{Polynomial, Univariate};
}
