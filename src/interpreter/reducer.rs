use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Op, Token},
        sequence::{NodeId, TokenSeq},
    },
};

/// Result type used by the reducer.
///
/// All reduction passes return either a value of type `T` or a `ParseError`
/// describing why the evaluation was aborted.
pub type ReduceResult<T> = Result<T, ParseError>;

/// Reduces a token sequence in place to a single number and returns it.
///
/// Four ordered sweeps rewrite the sequence: parenthesized spans collapse
/// first (recursively), then unary signs fold into their operand, then `*`
/// and `/` fold left to right, then `+` and `-`. Every fold mutates the
/// left-hand number in place and removes the operator and right-hand tokens;
/// the reducer never creates tokens.
///
/// # Parameters
/// - `seq`: The sequence to reduce. Destructively mutated; on success it
///   holds exactly one number token.
///
/// # Returns
/// The value of the single surviving number token.
///
/// # Errors
/// - [`ParseError::EmptyInput`] if the sequence holds no tokens.
/// - The paren and operand errors diagnosed by the individual passes.
/// - [`ParseError::InternalInvariantViolation`] if more than one token
///   survives the passes, which only token shapes outside the expression
///   grammar can cause.
///
/// # Examples
/// ```
/// use lineval::interpreter::{
///     lexer::{Op, Token},
///     reducer::reduce,
///     sequence::TokenSeq,
/// };
///
/// let mut seq: TokenSeq =
///     [Token::Number(2.0), Token::Op(Op::Plus), Token::Number(3.0)].into_iter().collect();
///
/// assert_eq!(reduce(&mut seq), Ok(5.0));
/// assert_eq!(seq.len(), 1);
///
/// // Reducing the already-reduced sequence returns the same value.
/// assert_eq!(reduce(&mut seq), Ok(5.0));
/// ```
pub fn reduce(seq: &mut TokenSeq) -> ReduceResult<f64> {
    let Some(start) = seq.head() else {
        return Err(ParseError::EmptyInput);
    };
    let start = reduce_span(seq, start, false)?;

    if seq.len() == 1
       && let Token::Number(value) = *seq.token(start)
    {
        return Ok(value);
    }
    Err(ParseError::InternalInvariantViolation)
}

/// Runs the four reduction passes over the span beginning at `start`.
///
/// With `stop_at_rparen` set, the span is a parenthesized sub-expression:
/// every pass treats the first unmatched `)` as the end of the span and
/// leaves it in place for the caller to splice out. Without it, an unmatched
/// `)` is an error and the span runs to the end of the sequence.
///
/// # Returns
/// The id of the first node of the span after reduction. The first node can
/// move when a pass removes it, e.g. the `(` of a leading sub-expression or
/// a leading sign operator.
fn reduce_span(seq: &mut TokenSeq, start: NodeId, stop_at_rparen: bool) -> ReduceResult<NodeId> {
    let start = resolve_parens(seq, start, stop_at_rparen)?;
    let start = fold_signs(seq, start, stop_at_rparen)?;
    let start = fold_infix(seq, start, stop_at_rparen, [Op::Star, Op::Slash])?;
    fold_infix(seq, start, stop_at_rparen, [Op::Plus, Op::Minus])
}

/// Applies the shared end-of-span rule to a cursor position.
///
/// # Returns
/// - `Ok(Some(id))`: The cursor is on a live token inside the span.
/// - `Ok(None)`: The span ended normally, either at the end of the sequence
///   or at the `)` closing a parenthesized span.
///
/// # Errors
/// - [`ParseError::UnclosedParen`] if the sequence ends while a `)` is still
///   owed.
/// - [`ParseError::UnexpectedCloseParen`] if a `)` turns up at the outermost
///   nesting level.
fn span_cursor(seq: &TokenSeq,
               cursor: Option<NodeId>,
               stop_at_rparen: bool)
               -> ReduceResult<Option<NodeId>> {
    match cursor {
        None if stop_at_rparen => Err(ParseError::UnclosedParen),
        None => Ok(None),
        Some(id) if matches!(seq.token(id), Token::Op(Op::RParen)) => {
            if stop_at_rparen {
                Ok(None)
            } else {
                Err(ParseError::UnexpectedCloseParen)
            }
        },
        Some(id) => Ok(Some(id)),
    }
}

/// Pass 1: collapses every parenthesized span to its value.
///
/// A single left-to-right sweep. Each `(` recurses into the span that starts
/// just after it; the recursion leaves a single number followed by the
/// matching `)`, and both parens are then spliced out around it. The sweep
/// resumes after the collapsed span.
///
/// # Returns
/// The new first node of the span; collapsing a span that starts at `start`
/// relocates it to the surviving number.
///
/// # Errors
/// - [`ParseError::MissingParenContent`] if a `(` is the last token, or if
///   its span turns out to be empty (`()`).
/// - [`ParseError::InternalInvariantViolation`] if the recursion returns a
///   shape other than one number before the `)`.
/// - The end-of-span errors from [`span_cursor`].
fn resolve_parens(seq: &mut TokenSeq,
                  start: NodeId,
                  stop_at_rparen: bool)
                  -> ReduceResult<NodeId> {
    let mut first = start;
    let mut cursor = Some(start);

    while let Some(current) = span_cursor(seq, cursor, stop_at_rparen)? {
        if !matches!(seq.token(current), Token::Op(Op::LParen)) {
            cursor = seq.next(current);
            continue;
        }

        let Some(inner) = seq.next(current) else {
            return Err(ParseError::MissingParenContent);
        };
        reduce_span(seq, inner, true)?;

        // The recursion stopped at the matching ')', so the span between the
        // parens is now a single number.
        let number = match seq.next(current) {
            Some(id) if matches!(seq.token(id), Token::Number(_)) => id,
            Some(id) if matches!(seq.token(id), Token::Op(Op::RParen)) => {
                return Err(ParseError::MissingParenContent);
            },
            _ => return Err(ParseError::InternalInvariantViolation),
        };
        match seq.next(number) {
            Some(id) if matches!(seq.token(id), Token::Op(Op::RParen)) => {
                seq.remove(id);
            },
            _ => return Err(ParseError::InternalInvariantViolation),
        }
        seq.remove(current);

        if first == current {
            first = number;
        }
        cursor = seq.next(number);
    }

    Ok(first)
}

/// Pass 2: folds unary `+`/`-` signs into the number that follows them.
///
/// A sign operator occupies a prefix position when its predecessor is absent
/// or not a number; note that inside a parenthesized span the predecessor of
/// the first token is the `(` itself, which also counts as non-numeric. A
/// `-` in prefix position negates the following number; a `+` is dropped
/// unchanged.
///
/// # Returns
/// The new first node of the span; folding a leading sign relocates it to
/// the signed number.
fn fold_signs(seq: &mut TokenSeq, start: NodeId, stop_at_rparen: bool) -> ReduceResult<NodeId> {
    let mut first = start;
    let mut cursor = Some(start);

    while let Some(current) = span_cursor(seq, cursor, stop_at_rparen)? {
        cursor = seq.next(current);

        let Token::Op(op @ (Op::Plus | Op::Minus)) = *seq.token(current) else {
            continue;
        };
        let prefix_position = match seq.prev(current) {
            None => true,
            Some(prev) => !matches!(seq.token(prev), Token::Number(_)),
        };
        if !prefix_position {
            continue;
        }
        // A sign with no number after it is left for the infix passes to
        // diagnose.
        let Some(next) = cursor else {
            continue;
        };
        let Token::Number(value) = seq.token_mut(next) else {
            continue;
        };

        if op == Op::Minus {
            *value = -*value;
        }
        if first == current {
            first = next;
        }
        seq.remove(current);
    }

    Ok(first)
}

/// Passes 3 and 4: folds one precedence level of binary operators.
///
/// A fixed-point left-to-right sweep. At each number directly followed by
/// one of `ops`, the token after the operator must be a number; the fold
/// multiplies, divides, adds or subtracts it into the left number in place,
/// removes the operator and the right-hand number, and re-examines the same
/// position, so `a*b*c` folds as `(a*b)*c` by repeated folds at one cursor.
///
/// # Parameters
/// - `ops`: The two operators of this precedence level, `[Star, Slash]` or
///   `[Plus, Minus]`.
///
/// # Returns
/// The first node of the span, unchanged: this pass only removes tokens
/// strictly after the cursor.
///
/// # Errors
/// - [`ParseError::InvalidInfixOperand`] if the right-hand neighbor of a
///   scheduled operator is missing or not a number.
/// - The end-of-span errors from [`span_cursor`].
fn fold_infix(seq: &mut TokenSeq,
              start: NodeId,
              stop_at_rparen: bool,
              ops: [Op; 2])
              -> ReduceResult<NodeId> {
    let mut cursor = Some(start);

    while let Some(current) = span_cursor(seq, cursor, stop_at_rparen)? {
        let Token::Number(lhs) = *seq.token(current) else {
            cursor = seq.next(current);
            continue;
        };
        let infix = seq.next(current).and_then(|id| match *seq.token(id) {
                                         Token::Op(op) if ops.contains(&op) => Some((id, op)),
                                         _ => None,
                                     });
        let Some((op_id, op)) = infix else {
            cursor = seq.next(current);
            continue;
        };

        let Some(rhs_id) = seq.next(op_id) else {
            return Err(ParseError::InvalidInfixOperand);
        };
        let Token::Number(rhs) = *seq.token(rhs_id) else {
            return Err(ParseError::InvalidInfixOperand);
        };

        let folded = op.apply(lhs, rhs).ok_or(ParseError::InternalInvariantViolation)?;
        *seq.token_mut(current) = Token::Number(folded);
        seq.remove(rhs_id);
        seq.remove(op_id);

        // Stay on the folded number so a following operator of the same
        // level folds next.
        cursor = Some(current);
    }

    Ok(start)
}
