//! Macros for defining lookup entity structs.
//!
//! One struct definition yields every view the lookup core needs: the trace
//! (`T = Polynomial<P>`), a single row (`T = Field<P>`) and an extended edge
//! (`T = Univariate<P, N>`).

/// Define a flavor entity struct with named fields, iteration support and the trace
/// accessors used by the lookup core.
///
/// Generates:
/// - the struct itself, with every field of type `T`
/// - `size()`, `get_labels()`, `get_all()`, `get_all_mut()` and `splat(value)`
/// - for `T = Polynomial<P>`: `new(circuit_size)`, `circuit_size()`, `get_row(i)`,
///   `extend_edge::<N>(i)` and an impl of [`crate::ProverPolynomialsAccess`]
///
/// The struct must contain a `lookup_inverses` field; it is the column the inverse
/// pass writes.
///
/// # Example
/// ```ignore
/// define_flavor_members! {
///     #[derive(Clone, Debug)]
///     pub struct MyEntities<T> {
///         pub q_read: T,
///         pub read_value: T,
///         pub lookup_inverses: T,
///     }
/// }
/// ```
#[macro_export]
macro_rules! define_flavor_members {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident<$T:ident> {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name<$T> {
            $(
                $(#[$field_meta])*
                $field_vis $field : $field_ty,
            )*
        }

        impl<$T> $name<$T> {
            /// Number of fields in this entity struct.
            pub const fn size() -> usize {
                $crate::_count!($($field),*)
            }

            pub fn get_labels() -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            pub fn get_all(&self) -> [&$T; $crate::_count!($($field),*)] {
                [$(&self.$field),*]
            }

            pub fn get_all_mut(&mut self) -> [&mut $T; $crate::_count!($($field),*)] {
                [$(&mut self.$field),*]
            }
        }

        impl<$T: Clone> $name<$T> {
            /// Every field set to a copy of `value`.
            pub fn splat(value: $T) -> Self {
                Self {
                    $($field: value.clone(),)*
                }
            }
        }

        impl<P: $crate::__private::FieldParams> $name<$crate::__private::Polynomial<P>> {
            /// A zero trace with `circuit_size` rows in every column.
            pub fn new(circuit_size: usize) -> Self {
                Self {
                    $($field: $crate::__private::Polynomial::new(circuit_size),)*
                }
            }

            pub fn circuit_size(&self) -> usize {
                self.lookup_inverses.size()
            }

            /// The plain evaluations of every column at `row_idx`.
            pub fn get_row(&self, row_idx: usize) -> $name<$crate::__private::Field<P>> {
                $name {
                    $($field: self.$field.get(row_idx),)*
                }
            }

            /// The edge between `row_idx` and `row_idx + 1`, extended to `N` points.
            /// Past the last row the columns read as zero.
            pub fn extend_edge<const N: usize>(
                &self,
                row_idx: usize,
            ) -> $name<$crate::__private::Univariate<P, N>> {
                $name {
                    $(
                        $field: $crate::__private::Univariate::from_edge(
                            self.$field.get(row_idx),
                            self.$field.get(row_idx + 1),
                        ),
                    )*
                }
            }
        }

        impl<P: $crate::__private::FieldParams> $crate::ProverPolynomialsAccess<P>
            for $name<$crate::__private::Polynomial<P>>
        {
            type Row = $name<$crate::__private::Field<P>>;

            fn circuit_size(&self) -> usize {
                self.lookup_inverses.size()
            }

            fn get_row(&self, row_idx: usize) -> Self::Row {
                $name::get_row(self, row_idx)
            }

            fn lookup_inverses_mut(&mut self) -> &mut $crate::__private::Polynomial<P> {
                &mut self.lookup_inverses
            }
        }
    };
}

/// Count the number of identifiers in a list.
#[doc(hidden)]
#[macro_export]
macro_rules! _count {
    () => { 0usize };
    ($head:ident $(, $tail:ident)*) => { 1usize + $crate::_count!($($tail),*) };
}
