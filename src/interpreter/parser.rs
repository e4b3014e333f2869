use crate::{
    ast::{BinaryOperator, Expr, ExprKind},
    interpreter::lexer::{TokenKind, TokenStream},
};

/// Parses a complete source string into an expression tree.
///
/// The parser never fails in the `Result` sense. Malformed input produces
/// an `ExprKind::Error` node carrying the failure message and position, and
/// input with no operand at all produces `ExprKind::Unit`; callers branch
/// on the returned node's kind.
///
/// # Parameters
/// - `source`: The expression text.
///
/// # Returns
/// The root of the parsed tree.
///
/// ## Example
/// ```
/// use calx::{
///     ast::{BinaryOperator, Expr, ExprKind},
///     interpreter::parser::parse,
/// };
///
/// let expr = parse("1 + 2");
/// assert_eq!(expr,
///            Expr::binary(BinaryOperator::Add, Expr::number(1.0), Expr::number(2.0)));
///
/// let expr = parse("1 +");
/// assert!(matches!(expr.kind, ExprKind::Error(_)));
/// ```
#[must_use]
pub fn parse(source: &str) -> Expr {
    let mut stream = TokenStream::new(source);
    parse_subexpression(&mut stream, 0, &TokenKind::InputEnd)
}

/// Parses one subexpression with precedence climbing.
///
/// The operand step runs in a loop so any number of unary minus signs can
/// prefix the operand; each one toggles a local flag that is applied to the
/// finished operand once. The operator loop then reads ahead one token at a
/// time over a saved copy of the stream, so both the stop token and any
/// operator belonging to an enclosing call can be handed back unconsumed.
fn parse_subexpression(stream: &mut TokenStream<'_>,
                       minimum_precedence: u8,
                       stop: &TokenKind)
                       -> Expr {
    let mut negate = false;

    let mut left = loop {
        let token = stream.next_token();
        match token.kind {
            TokenKind::Number(value) => break Expr::number(value),
            TokenKind::Ident(name) => break Expr::variable(name),
            TokenKind::Byte(b'(') => {
                let inner = parse_subexpression(stream, 0, &TokenKind::Byte(b')'));
                if inner.is_error() {
                    return inner;
                }

                let close = stream.next_token();
                if close.kind != TokenKind::Byte(b')') {
                    return Expr::error(format!("Expected token ')', found '{}'", close.kind),
                                       close.line,
                                       close.column);
                }
                break inner;
            },
            // An odd number of leading minus signs negates the operand.
            TokenKind::Byte(b'-') => negate = !negate,
            TokenKind::InputEnd => return Expr::unit(),
            kind => {
                return Expr::error(format!("Unexpected token, '{kind}'"),
                                   token.line,
                                   token.column);
            },
        }
    };

    if negate {
        left = left.negate();
    }

    loop {
        let checkpoint = *stream;
        let token = stream.next_token();
        if token.kind == *stop {
            *stream = checkpoint;
            break;
        }

        let op = match token_to_binary_operator(&token.kind) {
            Some(op) => op,
            None => {
                return match token.kind {
                    TokenKind::Ident(name) => {
                        Expr::error(format!("Unexpected identifier, '{name}'"),
                                    token.line,
                                    token.column)
                    },
                    kind => {
                        Expr::error(format!("Unexpected token, '{kind}'"),
                                    token.line,
                                    token.column)
                    },
                };
            },
        };

        if op == BinaryOperator::Assign && !matches!(left.kind, ExprKind::Variable(_)) {
            return Expr::error("Left-hand side of operator '=' must be a variable".to_string(),
                               token.line,
                               token.column);
        }

        let (left_precedence, right_precedence) = operator_precedence(op);
        if left_precedence < minimum_precedence {
            // The operator belongs to an enclosing call; hand it back.
            *stream = checkpoint;
            break;
        }

        let right = parse_subexpression(stream, right_precedence, stop);
        if right.is_error() {
            return right;
        }
        if matches!(right.kind, ExprKind::Unit) {
            return Expr::error(format!("Operator '{op}' missing right hand operand"),
                               stream.line(),
                               stream.column());
        }

        left = Expr::binary(op, left, right);
    }

    left
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that is not one of the six operator
/// bytes.
///
/// # Parameters
/// - `kind`: Token kind to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use calx::{
///     ast::BinaryOperator,
///     interpreter::{lexer::TokenKind, parser::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&TokenKind::Byte(b'+')),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&TokenKind::Byte(b'!')), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: &TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Byte(b'+') => Some(BinaryOperator::Add),
        TokenKind::Byte(b'-') => Some(BinaryOperator::Sub),
        TokenKind::Byte(b'*') => Some(BinaryOperator::Mul),
        TokenKind::Byte(b'/') => Some(BinaryOperator::Div),
        TokenKind::Byte(b'^') => Some(BinaryOperator::Pow),
        TokenKind::Byte(b'=') => Some(BinaryOperator::Assign),
        _ => None,
    }
}

/// Returns the `(left, right)` binding precedences of an operator.
///
/// Each operator has a base precedence and an associativity, and the two
/// binding sides are derived from them so that associativity needs no
/// separate handling in the parser. A left-associative operator binds its
/// right side tighter than its left, which makes a following operator of
/// the same base fold to the left; a right-associative operator is the
/// mirror image.
///
/// ## Example
/// ```
/// use calx::{ast::BinaryOperator, interpreter::parser::operator_precedence};
///
/// // `-` folds to the left, `^` to the right.
/// assert_eq!(operator_precedence(BinaryOperator::Sub), (2, 3));
/// assert_eq!(operator_precedence(BinaryOperator::Pow), (7, 6));
/// ```
#[must_use]
pub const fn operator_precedence(op: BinaryOperator) -> (u8, u8) {
    use BinaryOperator::{Add, Assign, Div, Mul, Pow, Sub};

    let (base, right_associative) = match op {
        Assign => (0, 1),
        Add | Sub => (1, 0),
        Mul | Div => (2, 0),
        Pow => (3, 1),
    };
    (2 * base + right_associative, 2 * base + (1 - right_associative))
}
