pub mod batch_inverse;
pub mod field;
pub mod field_params;
pub mod prime_fields;
