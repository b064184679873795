use logos::Logos;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the expression grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A run of digits is folded into
    /// one token; the value is held as a float because every later fold is
    /// floating-point arithmetic.
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// Operator and parenthesis tokens: `( ) + - * /`.
    #[token("(", |_| Op::LParen)]
    #[token(")", |_| Op::RParen)]
    #[token("+", |_| Op::Plus)]
    #[token("-", |_| Op::Minus)]
    #[token("*", |_| Op::Star)]
    #[token("/", |_| Op::Slash)]
    Op(Op),
    /// Trigonometric function names, such as `sin`.
    ///
    /// Recognized by the lexer but consumed by no reduction pass: an
    /// extension point that is not wired up yet. A line that uses one fails
    /// the single-number postcondition instead of evaluating.
    #[token("cos", |_| MathFn::Cos)]
    #[token("sin", |_| MathFn::Sin)]
    #[token("tan", |_| MathFn::Tan)]
    #[token("acos", |_| MathFn::Acos)]
    #[token("asin", |_| MathFn::Asin)]
    #[token("atan", |_| MathFn::Atan)]
    Function(MathFn),
    /// Tabs, spaces and feeds.
    #[regex(r"[ \t\f]+", logos::skip)]
    Ignored,
}

/// An operator or parenthesis symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
}

impl Op {
    /// Applies the operator to two numbers as a binary infix fold.
    ///
    /// Division keeps IEEE-754 semantics: dividing by zero yields an infinity
    /// or NaN rather than an error.
    ///
    /// # Returns
    /// - `Some(f64)`: The folded value for `+`, `-`, `*` and `/`.
    /// - `None`: For the parenthesis symbols, which have no arithmetic
    ///   meaning.
    ///
    /// # Examples
    /// ```
    /// use lineval::interpreter::lexer::Op;
    ///
    /// assert_eq!(Op::Star.apply(3.0, 4.0), Some(12.0));
    /// assert_eq!(Op::Slash.apply(1.0, 0.0), Some(f64::INFINITY));
    /// assert_eq!(Op::LParen.apply(1.0, 2.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Plus => Some(lhs + rhs),
            Self::Minus => Some(lhs - rhs),
            Self::Star => Some(lhs * rhs),
            Self::Slash => Some(lhs / rhs),
            Self::LParen | Self::RParen => None,
        }
    }
}

/// A trigonometric function name.
///
/// Declared for [`Token::Function`]; no reduction pass dispatches on these
/// yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFn {
    /// `cos`
    Cos,
    /// `sin`
    Sin,
    /// `tan`
    Tan,
    /// `acos`
    Acos,
    /// `asin`
    Asin,
    /// `atan`
    Atan,
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if the digit run fits in a float.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
