use crate::ast::{Expr, ExprKind};

/// Renders an expression as fully parenthesized infix text.
///
/// Every binary node is wrapped in parentheses, so the output makes the
/// parsed structure explicit: `1 + 2 * 3` renders as `(1 + (2 * 3))`.
/// Negation prints as a leading `-` on the node it applies to. Numbers
/// render in Rust's shortest round-trip form, so feeding the output back
/// through the parser produces an equal value.
///
/// # Panics
/// Panics on `Error` nodes, which have no rendering; callers are expected
/// to branch on the node kind first. The same holds for the other
/// renderers.
///
/// ## Example
/// ```
/// use calx::interpreter::{parser::parse, printer::render_infix};
///
/// assert_eq!(render_infix(&parse("1 + 2 * 3")), "(1 + (2 * 3))");
/// assert_eq!(render_infix(&parse("-(1 + 1)")), "-(1 + 1)");
/// ```
#[must_use]
pub fn render_infix(expr: &Expr) -> String {
    let negation = if expr.negated { "-" } else { "" };
    match &expr.kind {
        ExprKind::Unit => format!("{negation}()"),
        ExprKind::Number(value) => format!("{negation}{value}"),
        ExprKind::Variable(name) => format!("{negation}{name}"),
        ExprKind::Binary { left, op, right } => {
            format!("{negation}({} {op} {})", render_infix(left), render_infix(right))
        },
        ExprKind::Error(error) => panic!("cannot render a parse failure: {error}"),
    }
}

/// Renders an expression as a prefix s-expression.
///
/// A negated binary node prints its `-` after the operator, directly before
/// the left operand; negated leaves take a leading `-`. Variables render as
/// `(var "name")`.
///
/// # Panics
/// Panics on `Error` nodes.
///
/// ## Example
/// ```
/// use calx::interpreter::{parser::parse, printer::render_sexpr};
///
/// assert_eq!(render_sexpr(&parse("1 + 2 * 3")), "(+ 1 (* 2 3))");
/// ```
#[must_use]
pub fn render_sexpr(expr: &Expr) -> String {
    let negation = if expr.negated { "-" } else { "" };
    match &expr.kind {
        ExprKind::Unit => format!("{negation}()"),
        ExprKind::Number(value) => format!("{negation}{value}"),
        ExprKind::Variable(name) => format!("{negation}(var \"{name}\")"),
        ExprKind::Binary { left, op, right } => {
            format!("({op} {negation}{} {})", render_sexpr(left), render_sexpr(right))
        },
        ExprKind::Error(error) => panic!("cannot render a parse failure: {error}"),
    }
}

/// Renders an expression in reverse Polish notation.
///
/// A negated binary node prints its `-` before the left operand's
/// rendering; negated leaves take a leading `-`.
///
/// # Panics
/// Panics on `Error` nodes.
///
/// ## Example
/// ```
/// use calx::interpreter::{parser::parse, printer::render_rpn};
///
/// assert_eq!(render_rpn(&parse("1 + 2 * 3")), "1 2 3 * +");
/// ```
#[must_use]
pub fn render_rpn(expr: &Expr) -> String {
    let negation = if expr.negated { "-" } else { "" };
    match &expr.kind {
        ExprKind::Unit => format!("{negation}()"),
        ExprKind::Number(value) => format!("{negation}{value}"),
        ExprKind::Variable(name) => format!("{negation}{name}"),
        ExprKind::Binary { left, op, right } => {
            format!("{negation}{} {} {op}", render_rpn(left), render_rpn(right))
        },
        ExprKind::Error(error) => panic!("cannot render a parse failure: {error}"),
    }
}
