//! Record ID type definition.

/// Alias for the integer type used for record IDs.
pub type DatabaseId = i64;
