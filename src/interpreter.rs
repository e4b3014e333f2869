/// Computes the numeric value of parsed expressions.
///
/// This module implements a tree walk over the AST produced by the parser.
/// All arithmetic is IEEE-754 `f64`; there are no value types beyond
/// numbers and no binding store, so variables read as zero and assignments
/// pass their right-hand value through.
///
/// # Responsibilities
/// - Walks binary operations bottom-up and combines operand values.
/// - Applies deferred negation flags after each node is computed.
/// - Rejects unevaluable nodes (unit expressions, parse failures).
pub mod evaluator;
/// Produces tokens from source text.
///
/// This module defines the token types and the `TokenStream` cursor that
/// scans numbers, identifiers, and single-byte tokens on demand while
/// tracking line and column positions. The stream is freely copyable, which
/// is what the parser's lookahead is built on.
///
/// # Responsibilities
/// - Classifies bytes into number, identifier, and single-byte tokens.
/// - Tracks the 0-based line and the column of every token produced.
/// - Reports end of input indefinitely once the buffer is exhausted.
pub mod lexer;
/// Builds the expression tree.
///
/// This module implements a precedence-climbing parser over the token
/// stream. Failures never unwind through the call stack: they are recorded
/// as error nodes inside the tree and handed back through the normal return
/// path.
///
/// # Responsibilities
/// - Parses operands, including chains of unary minus and grouped
///   subexpressions.
/// - Folds binary operators according to their binding precedences.
/// - Records parse failures with their source positions.
pub mod parser;
/// Renders parsed expressions as text.
///
/// This module turns an expression tree back into a readable string in one
/// of three notations: fully parenthesized infix, prefix s-expressions, or
/// reverse Polish notation.
///
/// # Responsibilities
/// - Walks the tree and formats each node for the chosen notation.
/// - Places negation markers the way each notation expects them.
pub mod printer;
