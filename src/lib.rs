//! # flo
//!
//! flo is a minimal line-oriented scripting language. A script is a list of
//! lines, each of which assigns a variable (`let x = 1`), prints a value
//! (`print x * 2`), opens a conditional block (`if x > 1:`), flips it
//! (`else`), or is evaluated as a bare expression. Block members are marked
//! by leading spaces.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

use std::io::Write;

use crate::{error::ScriptError, interpreter::driver::Interpreter};

/// Defines the structure of parsed expressions and classified lines.
///
/// This module declares the `Expr` tree built by the expression parser, the
/// operator enums, and the `Statement` enum produced by the line classifier.
pub mod ast;
/// Provides the error types for parsing, evaluation and script runs.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches the failing expression and its line number for user feedback.
pub mod error;
/// Orchestrates script execution.
///
/// This module ties together line classification, the execution driver, the
/// variable environment and the expression pipeline (lexer, parser,
/// evaluator, values).
pub mod interpreter;
/// General numeric helpers.
pub mod util;

/// Runs a script and returns everything it printed.
///
/// Each run starts from an empty environment, so running the same script
/// twice yields the same output.
///
/// # Errors
/// Returns the first error raised by the script; the run stops there.
///
/// # Examples
/// ```
/// use flo::run_script;
///
/// assert_eq!(run_script("let x = 5\nprint x").unwrap(), "5\n");
/// assert_eq!(run_script("print 2 + 3 * 4").unwrap(), "14\n");
///
/// // 'y' is never assigned.
/// assert!(run_script("print y").is_err());
/// ```
pub fn run_script(source: &str) -> Result<String, ScriptError> {
    let mut output = Vec::new();
    run_script_to(source, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}

/// Runs a script, writing its output to `output` as it is produced.
///
/// # Errors
/// Returns the first error raised by the script, or an I/O error if writing
/// the output fails.
pub fn run_script_to<W: Write>(source: &str, output: W) -> Result<(), ScriptError> {
    Interpreter::new(output).run(source)
}
