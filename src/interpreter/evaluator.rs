use crate::ast::{BinaryOperator, Expr, ExprKind};

/// Computes the numeric value of an expression tree.
///
/// Arithmetic is IEEE-754 `f64` throughout, so division by zero produces an
/// infinity or NaN rather than a failure. Variables have no binding store
/// and read as `0.0`; an assignment evaluates to its right-hand side's
/// value. A node's negated flag negates the result after the node itself
/// has been computed.
///
/// # Parameters
/// - `expr`: The root of the tree to evaluate.
///
/// # Returns
/// The computed value.
///
/// Recursion is as deep as the tree, so pathologically nested input is
/// limited by the call stack.
///
/// # Panics
/// Panics when called on a `Unit` or `Error` node. Neither has a value;
/// callers are expected to branch on the node kind first.
///
/// ## Example
/// ```
/// use calx::interpreter::{evaluator::evaluate, parser::parse};
///
/// assert_eq!(evaluate(&parse("1 + 2 * 3")), 7.0);
/// assert_eq!(evaluate(&parse("2^-1")), 0.5);
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    let value = match &expr.kind {
        ExprKind::Number(value) => *value,
        // No binding store exists, so variables read as zero.
        ExprKind::Variable(_) => 0.0,
        ExprKind::Binary { left, op, right } => {
            let left = evaluate(left);
            let right = evaluate(right);
            match op {
                BinaryOperator::Add => left + right,
                BinaryOperator::Sub => left - right,
                BinaryOperator::Mul => left * right,
                BinaryOperator::Div => left / right,
                BinaryOperator::Pow => left.powf(right),
                // There is no store to write to; the assigned value is the
                // expression's value.
                BinaryOperator::Assign => right,
            }
        },
        ExprKind::Unit => panic!("the unit expression has no value"),
        ExprKind::Error(error) => panic!("cannot evaluate a parse failure: {error}"),
    };

    if expr.negated { -value } else { value }
}
