//! Evaluator for a small prefix arithmetic language:
//!
//! ```text
//! let(a, 5, let(b, mult(a, 10), add(b, a)))   =>   55
//! ```
//!
//! Input goes through [`lexer::CharStream`], [`lexer::Scanner`] and [`lexer::TokenStream`]
//! into the recursive-descent [`parser`], which resolves every variable while parsing and
//! produces an immutable [`Expr`] tree. [`evaluate`] computes the tree's value with checked
//! 32-bit arithmetic.

pub mod error;
pub mod eval;
pub mod expr;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod span;

pub use error::{Error, ErrorKind, Result};
pub use eval::evaluate;
pub use expr::{BinaryOp, Expr};
pub use parser::parse;

/// Parses and evaluates `input`.
///
/// ```
/// assert_eq!(calc::calculate("let(a, 5, add(a, a))"), Ok(10));
/// assert_eq!(
///     calc::calculate("div(5, 0)").map_err(|e| e.kind()),
///     Err(calc::ErrorKind::Arithmetic)
/// );
/// ```
pub fn calculate(input: &str) -> Result<i32> {
    let expr = parse(input)?;
    Ok(evaluate(&expr)?)
}
