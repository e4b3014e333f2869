/// Represents a parse failure and where it happened.
///
/// The parser never aborts: a failure is recorded as an `ExprKind::Error`
/// node carrying one of these, with the message already formatted at the
/// point of detection. `line` and `column` are the 0-based positions the
/// tokenizer reported; `Display` renders the line 1-based for human-facing
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// Details about the parse failure.
    pub message: String,
    /// The 0-based source line where the failure was detected.
    pub line:    usize,
    /// The byte offset from the start of that line.
    pub column:  usize,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: {}.",
               self.line + 1,
               self.column,
               self.message)
    }
}

impl std::error::Error for ParseError {}
