/// The lexer module tokenizes a line of input for reduction.
///
/// The lexer reads the raw line and produces a stream of tokens, each
/// corresponding to a meaningful element of the expression: an integer
/// literal folded into a single number, an arithmetic operator, or a
/// parenthesis.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Accumulates digit runs into one number token per literal.
/// - Reports lexical errors for characters outside the grammar.
pub mod lexer;
/// The reducer module collapses a token sequence to a single number.
///
/// The reducer is the core of the crate: four ordered sweeps rewrite the
/// sequence in place, resolving parenthesized spans recursively, folding
/// unary signs, and then folding `*`/`/` and `+`/`-` left to right until one
/// number token survives.
///
/// # Responsibilities
/// - Applies the four reduction passes in precedence order.
/// - Recurses into parenthesized sub-spans and splices out their brackets.
/// - Reports unbalanced parentheses and dangling operators with location-free
///   diagnoses.
pub mod reducer;
/// The sequence module stores tokens in a doubly-linked arena.
///
/// This module defines the ordered token sequence the reducer mutates. Nodes
/// live in a growable arena and are addressed by copyable ids; neighbor links
/// are ordinary `Option` indices, so splicing a node out never leaves a
/// dangling reference.
///
/// # Responsibilities
/// - Provides O(1) append at the tail and O(1) removal of any node.
/// - Keeps head, tail, and neighbor links consistent across removals.
/// - Hands out shared and mutable access to the token stored at a node.
pub mod sequence;
