//! # calx
//!
//! calx is a command-line arithmetic expression calculator written in Rust.
//! It tokenizes and parses infix arithmetic into an expression tree, renders
//! the tree in several notations, and evaluates it with IEEE-754 `f64`
//! arithmetic.

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
)]

use crate::{
    ast::ExprKind,
    error::ParseError,
    interpreter::{evaluator::evaluate, parser::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` node and related types that represent
/// the syntactic structure of an expression as a tree. The AST is built by
/// the parser and traversed by the evaluator and the renderers.
///
/// # Responsibilities
/// - Defines the expression kinds and the binary operator set.
/// - Carries the negation flag every node has alongside its kind.
/// - Records parse failures as ordinary nodes inside the tree.
pub mod ast;
/// Provides the error type for parse failures.
///
/// This module defines the error value stored inside failed parse trees. It
/// carries a formatted message together with the source line and column
/// where the failure was detected, and integrates with the standard error
/// handling traits.
///
/// # Responsibilities
/// - Defines `ParseError` with its message and source position.
/// - Renders failures for human-facing output.
pub mod error;
/// Orchestrates tokenizing, parsing, evaluation, and rendering.
///
/// This module ties together the tokenizer, the parser, the evaluator, and
/// the renderers to provide a complete pipeline from source text to a
/// numeric result or an alternate notation of the parsed tree.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, printer.
/// - Provides the entry points for parsing and evaluating user input.
pub mod interpreter;

/// Parses and evaluates a source string in one step.
///
/// This is the whole pipeline as one call for callers that only want the
/// number. The three possible outcomes are kept distinct: a malformed input
/// is an `Err`, an input with no expression at all (empty or whitespace
/// only) is `Ok(None)`, and everything else evaluates to `Ok(Some(value))`.
///
/// # Errors
/// Returns the parse failure recorded in the tree when the input is
/// malformed.
///
/// # Examples
/// ```
/// use calx::parse_and_eval;
///
/// assert_eq!(parse_and_eval("(1 + 2) * 3"), Ok(Some(9.0)));
/// assert_eq!(parse_and_eval(""), Ok(None));
///
/// // Malformed input carries its position along.
/// let error = parse_and_eval("1 +").unwrap_err();
/// assert_eq!(error.message, "Operator '+' missing right hand operand");
/// ```
pub fn parse_and_eval(source: &str) -> Result<Option<f64>, ParseError> {
    let expr = parse(source);
    match &expr.kind {
        ExprKind::Error(error) => Err(error.clone()),
        ExprKind::Unit => Ok(None),
        _ => Ok(Some(evaluate(&expr))),
    }
}
