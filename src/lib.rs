//! # curria
//!
//! curria is a minimal dynamically-typed functional language written in Rust.
//! Programs are sequences of line-oriented declarations and actions; functions
//! are overloaded on literal patterns, curry automatically, and calls whose
//! arguments are still unresolved defer into printable symbolic values.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::program::Program;

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while reading statements
/// or evaluating expressions. It standardizes error reporting and carries
/// detailed information about failures, including error kinds, offending
/// names, and source lines for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (statement reader, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together tokenization, value representations, namespace
/// scoping, overload dispatch, builtin primitives, and the line-oriented
/// program driver to provide a complete runtime for source code evaluation.
/// It exposes the public API for interpreting and executing expressions or
/// programs.
///
/// # Responsibilities
/// - Coordinates all core components: tokenizer, evaluator, dispatcher, and
///   value types.
/// - Provides entry points for resolving expressions and declaring functions.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities for safe numeric conversion and helpers.
///
/// This module provides reusable helpers and conversion routines that are
/// used throughout the evaluator. These include safe conversions between
/// integer and floating-point types, and any general-purpose functions not
/// specific to a single phase.
///
/// # Responsibilities
/// - Safely convert between `i64` and `f64` without silent data loss.
/// - Provide general utility functions used in multiple modules.
pub mod util;

/// Runs every statement in the provided source string.
///
/// Each line of `source` is fed through a fresh [`Program`], so declarations
/// accumulate in one global namespace and actions (`output:`, `input:`,
/// `run:`, `quit:`) take effect in order. Processing stops early when a
/// `quit:` action is reached. If every processed line succeeds, the function
/// returns `Ok(())`; otherwise, it returns an error with details about the
/// failure.
///
/// # Errors
/// Returns an error if any statement is malformed or any evaluation fails.
///
/// # Examples
/// ```
/// use curria::get_result;
///
/// // Declarations plus an output action: no error should occur.
/// let source = "double n = mult n 2\noutput: double 4";
/// assert!(get_result(source).is_ok());
///
/// // Example with an intentional error (too many arguments).
/// let source = "two = 2\noutput: two 5";
/// assert!(get_result(source).is_err());
/// ```
pub fn get_result(source: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut program = Program::new();

    for (number, line) in source.lines().enumerate() {
        if !program.read_line(line, number + 1)? {
            break;
        }
    }

    Ok(())
}
