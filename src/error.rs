/// Parsing errors.
///
/// Defines all error types that can occur while lexing a line of input and
/// reducing its token sequence. Parse errors include unknown characters,
/// unbalanced parentheses, dangling operators, and any other issue that
/// aborts the evaluation of the current line.
pub mod parse_error;

pub use parse_error::ParseError;
