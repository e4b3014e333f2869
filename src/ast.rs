use crate::error::ParseError;

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every node pairs its shape (`ExprKind`) with a `negated` flag instead of
/// wrapping negated subtrees in a dedicated unary node. Unary minus in the
/// source toggles the flag, so `--x` and `x` produce identical trees, and
/// every consumer applies the flag uniformly to whatever kind the node
/// holds.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    /// The shape of this node.
    pub kind:    ExprKind,
    /// Whether the node's value is negated when evaluated or rendered.
    pub negated: bool,
}

/// The shape of an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// The empty expression, produced for input with no operand at all.
    /// It renders as `()` and has no value.
    Unit,
    /// A numeric literal.
    Number(f64),
    /// A reference to a variable by name.
    Variable(String),
    /// A binary operation.
    Binary {
        /// Left operand.
        left:  Box<Expr>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Expr>,
    },
    /// A parse failure recorded where a node should have been. The parser
    /// returns it unchanged instead of building anything around it, so the
    /// root of a failed parse is always the first failure found.
    Error(ParseError),
}

impl Expr {
    /// Creates the empty expression.
    #[must_use]
    pub const fn unit() -> Self {
        Self { kind:    ExprKind::Unit,
               negated: false, }
    }

    /// Creates a numeric literal node.
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self { kind:    ExprKind::Number(value),
               negated: false, }
    }

    /// Creates a variable reference node.
    #[must_use]
    pub fn variable(name: String) -> Self {
        Self { kind:    ExprKind::Variable(name),
               negated: false, }
    }

    /// Creates a binary operation node owning both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self { kind:    ExprKind::Binary { left: Box::new(left),
                                           op,
                                           right: Box::new(right), },
               negated: false, }
    }

    /// Creates a parse-failure node from a message and a source position.
    #[must_use]
    pub fn error(message: String, line: usize, column: usize) -> Self {
        Self { kind:    ExprKind::Error(ParseError { message, line, column }),
               negated: false, }
    }

    /// Toggles the negation flag.
    ///
    /// Negating twice restores the original node, which is how consecutive
    /// minus signs in the source cancel out.
    ///
    /// ## Example
    /// ```
    /// use calx::ast::Expr;
    ///
    /// assert_eq!(Expr::number(2.0).negate().negate(), Expr::number(2.0));
    /// assert!(Expr::number(2.0).negate().negated);
    /// ```
    #[must_use]
    pub fn negate(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Returns `true` when the node records a parse failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, ExprKind::Error(_))
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
    /// Assignment (`=`)
    Assign,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, Assign, Div, Mul, Pow, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Pow => "^",
            Assign => "=",
        };
        write!(f, "{operator}")
    }
}
