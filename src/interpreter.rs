/// The evaluator module resolves expression text into values.
///
/// The evaluator recursively turns token strings into runtime values, resolves
/// identifiers against a namespace, and dispatches calls against sets of
/// overloaded, partially-matchable definitions with automatic currying. It is
/// the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Resolves literals, arrays, and nested expressions into values.
/// - Dispatches function calls by literal-pattern elimination and saturation.
/// - Defers calls whose arguments are still symbolic into pending values.
pub mod evaluator;
/// The lexer module splits source text into top-level tokens.
///
/// The tokenizer reads a line of raw source text and produces the tokens that
/// the evaluator works on: it splits on whitespace at nesting depth zero,
/// keeping parenthesized groups, bracketed arrays, and quoted text together.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Splits the input on runs of whitespace outside of groups and quotes.
/// - Tracks bracket depth and quoting without validating balance.
pub mod lexer;
/// The program module drives line-oriented execution.
///
/// The driver reads one statement per line, distinguishes declarations from
/// actions, and owns the global namespace and all console/file I/O. The
/// evaluation core below it performs no I/O at all.
///
/// # Responsibilities
/// - Splits lines into declarations (`name pattern.. = body`) and actions.
/// - Dispatches `output:`, `input:`, `run:`, and `quit:` actions.
/// - Reports reader and evaluation errors with source line numbers.
pub mod program;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation:
/// integers, reals, text, arrays, and function values carrying overloaded
/// definitions together with previously supplied arguments. Values are
/// immutable and compare structurally, which the dispatcher relies on when
/// matching literal parameter patterns.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines `Function`, `Definition`, and parameter `Pattern` types.
/// - Renders values back into language syntax for display.
pub mod value;
