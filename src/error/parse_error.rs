#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or reduction.
///
/// Every error is fatal to the current evaluation: the whole line is
/// abandoned and no partial numeric result is produced alongside it.
pub enum ParseError {
    /// The lexer met a character outside the expression grammar.
    UnexpectedCharacter {
        /// The offending character.
        found: char,
    },
    /// The input line held no tokens at all.
    EmptyInput,
    /// A `(` has no matching `)` before the input ends.
    UnclosedParen,
    /// A `)` appeared with no corresponding open paren at this nesting level.
    UnexpectedCloseParen,
    /// A `(` is the last token, with nothing between it and the end of input.
    MissingParenContent,
    /// A binary operator's right-hand neighbor is missing or not a number.
    InvalidInfixOperand,
    /// Reduction finished in a state other than a single number.
    ///
    /// Reachable only through token shapes the grammar cannot reject, such as
    /// two adjacent numbers; a defect signal rather than a user mistake.
    InternalInvariantViolation,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found } => {
                write!(f, "Syntax error: unexpected character '{found}'.")
            },

            Self::EmptyInput => write!(f, "Nothing to evaluate."),

            Self::UnclosedParen => write!(f, "Syntax error: unclosed (."),

            Self::UnexpectedCloseParen => write!(f, "Syntax error: unexpected )."),

            Self::MissingParenContent => write!(f, "Syntax error: ) expected."),

            Self::InvalidInfixOperand => {
                write!(f, "Invalid right-hand side for infix operator.")
            },

            Self::InternalInvariantViolation => {
                write!(f, "Internal error: reduction did not end in a single number.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
