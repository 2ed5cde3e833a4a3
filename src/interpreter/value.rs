/// Core value representation.
///
/// Defines the `Value` enum with all runtime variants and their conversions,
/// equality, and display formatting.
pub mod core;
/// Function values.
///
/// Defines the `Function` type carrying a name, an ordered overload set, and
/// the arguments given so far, together with `Definition` and parameter
/// `Pattern` types.
pub mod function;
