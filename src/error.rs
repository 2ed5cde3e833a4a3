/// Statement reading errors.
///
/// Defines all error types that can occur while splitting a source line into
/// a declaration or an action. Parse errors include malformed declarations,
/// malformed action lines, and unknown action keywords.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like arity violations, invalid builtin arguments,
/// type mismatches, and failed numeric conversions.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
