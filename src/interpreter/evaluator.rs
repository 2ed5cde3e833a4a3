/// Builtin overload set.
///
/// Native arithmetic and array primitives (`add`, `sub`, `mult`, `div`,
/// `map`, `range`) implementing the same dispatch contract as user-declared
/// definitions.
pub mod builtin;

/// Core evaluation logic and namespace management.
///
/// Contains the expression resolver, the declaration entry point, and the
/// `Namespace` scope type.
pub mod core;

/// Overload resolution and call semantics.
///
/// Implements `Function::extend` — the two-phase eliminate/saturate dispatch
/// algorithm — and the selected definition's call step.
pub mod dispatch;
