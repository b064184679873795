//! # lineval
//!
//! lineval is a small interactive calculator written in Rust.
//! It tokenizes a single line of arithmetic and reduces the resulting token
//! sequence in place, pass by pass, until a single number remains: first
//! parenthesized sub-expressions, then unary signs, then `*` and `/`, then
//! `+` and `-`.

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

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{lexer::Token, reducer::reduce, sequence::TokenSeq},
};

/// Provides unified error types for lexing and reduction.
///
/// This module defines all errors that can be raised while turning a line of
/// input into a number. It standardizes error reporting and carries detailed
/// information about failures for user feedback.
///
/// # Responsibilities
/// - Defines the error enum for all failure modes (lexer, reducer).
/// - Attaches detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Orchestrates the entire process of expression evaluation.
///
/// This module ties together lexing, the token sequence, in-place reduction,
/// and error handling to provide a complete pipeline from a line of text to a
/// numeric result. It exposes the types the evaluation entry point is built
/// from.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, token sequence, and reducer.
/// - Provides the building blocks for evaluating a single expression.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Evaluates one line of arithmetic and returns the numeric result.
///
/// This function lexes the whole line into a token sequence and reduces it in
/// place to a single number. It is the public entry point used by both the
/// command line and the interactive prompt.
///
/// # Errors
/// Returns a [`ParseError`] if the line contains characters outside the
/// grammar, holds no tokens at all, or cannot be reduced to a single number
/// (unbalanced parentheses, dangling operators).
///
/// # Examples
/// ```
/// use lineval::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
///
/// // A dangling operator aborts the evaluation with an error.
/// assert!(evaluate("3*").is_err());
/// ```
pub fn evaluate(source: &str) -> Result<f64, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut seq = TokenSeq::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            seq.append(tok);
        } else {
            let found = lexer.slice().chars().next().unwrap_or_default();
            return Err(ParseError::UnexpectedCharacter { found });
        }
    }

    if seq.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    reduce(&mut seq)
}
