use calx::interpreter::lexer::{Token, TokenKind, TokenStream};
use proptest::prelude::*;

/// Collects every token kind in `source`, including the final `InputEnd`.
fn kinds(source: &str) -> Vec<TokenKind> {
    let mut stream = TokenStream::new(source);
    let mut kinds = Vec::new();
    loop {
        let token = stream.next_token();
        let done = token.kind == TokenKind::InputEnd;
        kinds.push(token.kind);
        if done {
            return kinds;
        }
    }
}

fn first(source: &str) -> Token {
    TokenStream::new(source).next_token()
}

#[test]
fn empty_input_is_immediately_exhausted() {
    let mut stream = TokenStream::new("");
    assert_eq!(stream.next_token().kind, TokenKind::InputEnd);
    assert_eq!(stream.next_token().kind, TokenKind::InputEnd);
}

#[test]
fn whitespace_only_input_is_exhausted() {
    assert_eq!(kinds(" \t \n "), vec![TokenKind::InputEnd]);
}

#[test]
fn numbers_and_operators_tokenize_individually() {
    assert_eq!(kinds("1+2"),
               vec![TokenKind::Number(1.0),
                    TokenKind::Byte(b'+'),
                    TokenKind::Number(2.0),
                    TokenKind::InputEnd]);
}

#[test]
fn a_number_run_keeps_every_dot_but_values_the_leading_prefix() {
    assert_eq!(first("1.2.3").kind, TokenKind::Number(1.2));

    let mut stream = TokenStream::new("1.2.3");
    stream.next_token();
    assert_eq!(stream.next_token().kind, TokenKind::InputEnd);
}

#[test]
fn numbers_do_not_absorb_a_following_identifier() {
    assert_eq!(kinds("123abc"),
               vec![TokenKind::Number(123.0),
                    TokenKind::Ident("abc".to_string()),
                    TokenKind::InputEnd]);
}

#[test]
fn identifiers_take_digits_and_underscores_after_the_first_letter() {
    assert_eq!(first("input_2a remainder").kind,
               TokenKind::Ident("input_2a".to_string()));
}

#[test]
fn identifiers_cannot_start_with_a_digit() {
    assert_eq!(kinds("9lives"),
               vec![TokenKind::Number(9.0),
                    TokenKind::Ident("lives".to_string()),
                    TokenKind::InputEnd]);
}

#[test]
fn an_underscore_cannot_start_an_identifier() {
    assert_eq!(kinds("_x"),
               vec![TokenKind::Byte(b'_'),
                    TokenKind::Ident("x".to_string()),
                    TokenKind::InputEnd]);
}

#[test]
fn unclassified_bytes_are_single_byte_tokens() {
    assert_eq!(kinds("#?"),
               vec![TokenKind::Byte(b'#'),
                    TokenKind::Byte(b'?'),
                    TokenKind::InputEnd]);
}

#[test]
fn non_ascii_bytes_tokenize_byte_by_byte() {
    // 'é' is two bytes in UTF-8; each one becomes its own token.
    assert_eq!(kinds("é"),
               vec![TokenKind::Byte(0xC3),
                    TokenKind::Byte(0xA9),
                    TokenKind::InputEnd]);
}

#[test]
fn an_interior_nul_byte_is_an_ordinary_token() {
    assert_eq!(kinds("1\0 2"),
               vec![TokenKind::Number(1.0),
                    TokenKind::Byte(0),
                    TokenKind::Number(2.0),
                    TokenKind::InputEnd]);
}

#[test]
fn token_positions_track_lines_and_columns() {
    let token = first("\n\n   .");
    assert_eq!(token.kind, TokenKind::Byte(b'.'));
    assert_eq!(token.line, 2);
    assert_eq!(token.column, 3);
}

#[test]
fn end_of_input_is_positioned_after_trailing_whitespace() {
    let mut stream = TokenStream::new("1 \n  ");
    stream.next_token();

    let end = stream.next_token();
    assert_eq!(end.kind, TokenKind::InputEnd);
    assert_eq!(end.line, 1);
    assert_eq!(end.column, 2);
}

#[test]
fn a_copied_stream_is_an_independent_position() {
    let mut stream = TokenStream::new("1 + 2");
    stream.next_token();

    let saved = stream;
    let mut ahead = stream;
    assert_eq!(ahead.next_token().kind, TokenKind::Byte(b'+'));

    stream = saved;
    assert_eq!(stream.next_token().kind, TokenKind::Byte(b'+'));
    assert_eq!(stream.next_token().kind, TokenKind::Number(2.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn every_byte_is_consumed_exactly_once(input in any::<String>()) {
        let mut stream = TokenStream::new(&input);
        let mut previous = stream.offset();
        loop {
            let token = stream.next_token();
            if token.kind == TokenKind::InputEnd {
                break;
            }
            // Every token, whitespace in front of it included, consumes at
            // least one byte, so the scan always makes progress.
            prop_assert!(stream.offset() > previous);
            previous = stream.offset();
        }
        prop_assert_eq!(stream.offset(), input.len());
    }

    #[test]
    fn line_and_column_match_newline_counts(input in any::<String>()) {
        let mut stream = TokenStream::new(&input);
        while stream.next_token().kind != TokenKind::InputEnd {}

        let newlines = input.bytes().filter(|&byte| byte == b'\n').count();
        prop_assert_eq!(stream.line(), newlines);

        let line_start = input.rfind('\n').map_or(0, |index| index + 1);
        prop_assert_eq!(stream.column(), input.len() - line_start);
    }
}
