/// Classifies a single token produced by the tokenizer.
///
/// The tokenizer has rules for numbers and identifiers only; every other
/// byte in the input is handed to the parser as itself. That keeps the
/// token set closed: operators, parentheses, and outright garbage all
/// arrive as `Byte` tokens, and deciding which of them mean something is
/// the parser's job.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// The end of the input was reached. Polling past this point keeps
    /// producing `InputEnd`.
    InputEnd,
    /// A numeric literal.
    Number(f64),
    /// An identifier: a letter followed by letters, digits, or underscores.
    Ident(String),
    /// Any other single byte, carried verbatim.
    Byte(u8),
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputEnd => write!(f, "end of input"),
            Self::Number(value) => write!(f, "{value}"),
            Self::Ident(name) => write!(f, "{name}"),
            Self::Byte(byte) => write!(f, "{}", char::from(*byte)),
        }
    }
}

/// A token together with the position of its first byte.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was recognized.
    pub kind:   TokenKind,
    /// The 0-based line the token starts on.
    pub line:   usize,
    /// The byte offset of the token from the start of its line.
    pub column: usize,
}

/// A cursor over an immutable source buffer, producing tokens on demand.
///
/// The stream borrows its source and is `Copy`: saving and restoring a
/// position is plain value assignment. The parser leans on this to read a
/// whole token ahead and back out again, with the line and column
/// bookkeeping restored along with the offset.
///
/// ## Example
/// ```
/// use calx::interpreter::lexer::{TokenKind, TokenStream};
///
/// let mut stream = TokenStream::new("1 + two");
///
/// assert_eq!(stream.next_token().kind, TokenKind::Number(1.0));
/// assert_eq!(stream.next_token().kind, TokenKind::Byte(b'+'));
/// assert_eq!(stream.next_token().kind, TokenKind::Ident("two".to_string()));
/// assert_eq!(stream.next_token().kind, TokenKind::InputEnd);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TokenStream<'a> {
    src:        &'a [u8],
    at:         usize,
    line_start: usize,
    line:       usize,
}

impl<'a> TokenStream<'a> {
    /// Creates a token stream positioned at the start of `source`.
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { src:        source.as_bytes(),
               at:         0,
               line_start: 0,
               line:       0, }
    }

    /// Returns the byte offset of the cursor from the start of the buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.at
    }

    /// Returns the 0-based line the cursor is on.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Returns the byte offset of the cursor from the start of the current
    /// line.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.at - self.line_start
    }

    /// Produces the next token and advances past it.
    ///
    /// Leading whitespace is skipped first, so the token's position is that
    /// of its first byte. Once the buffer is exhausted, every further call
    /// returns an `InputEnd` token positioned at the end of the input.
    pub fn next_token(&mut self) -> Token {
        self.eat_space();

        let line = self.line;
        let column = self.column();

        let kind = if self.remaining() == 0 {
            TokenKind::InputEnd
        } else {
            match self.peek_byte() {
                byte if byte.is_ascii_digit() => self.number_token(),
                byte if byte.is_ascii_alphabetic() => self.ident_token(),
                byte => {
                    self.next_byte();
                    TokenKind::Byte(byte)
                },
            }
        };

        Token { kind, line, column }
    }

    const fn remaining(&self) -> usize {
        self.src.len() - self.at
    }

    fn peek_byte(&self) -> u8 {
        if self.remaining() == 0 {
            0
        } else {
            self.src[self.at]
        }
    }

    /// Consumes the current byte and returns the byte now under the cursor.
    ///
    /// Newlines are accounted for here, so the line and column stay correct
    /// no matter which scanning loop consumed them.
    fn next_byte(&mut self) -> u8 {
        debug_assert!(self.at < self.src.len());
        if self.src[self.at] == b'\n' {
            self.line_start = self.at + 1;
            self.line += 1;
        }
        self.at += 1;
        self.peek_byte()
    }

    fn eat_space(&mut self) {
        while self.remaining() > 0 && self.peek_byte().is_ascii_whitespace() {
            self.next_byte();
        }
    }

    /// Scans a maximal run of digits and dots starting at the cursor.
    ///
    /// The whole run is consumed as one token even when it is not a valid
    /// number. The value is taken from the longest numeric prefix, so
    /// `1.2.3` is a single token with the value `1.2`.
    fn number_token(&mut self) -> TokenKind {
        let start = self.at;
        let mut byte = self.peek_byte();
        while byte.is_ascii_digit() || byte == b'.' {
            byte = self.next_byte();
        }
        TokenKind::Number(leading_number(&self.src[start..self.at]))
    }

    fn ident_token(&mut self) -> TokenKind {
        let start = self.at;
        let mut byte = self.peek_byte();
        while byte.is_ascii_alphanumeric() || byte == b'_' {
            byte = self.next_byte();
        }
        // The run is ASCII letters, digits, and underscores only, so the
        // conversion is lossless.
        TokenKind::Ident(String::from_utf8_lossy(&self.src[start..self.at]).into_owned())
    }
}

/// Parses the numeric prefix of a digit-and-dot run, stopping at a second
/// dot.
fn leading_number(run: &[u8]) -> f64 {
    let mut end = run.len();
    let mut dot_seen = false;
    for (index, &byte) in run.iter().enumerate() {
        if byte == b'.' {
            if dot_seen {
                end = index;
                break;
            }
            dot_seen = true;
        }
    }
    String::from_utf8_lossy(&run[..end]).parse().unwrap_or(0.0)
}
