//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Single and two-character operators
//! - Keywords and identifiers
//! - Numeric literals and the decimal point policy
//! - String literals and line counting
//! - Comments
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind},
};

fn token(kind: TokenKind, lexeme: &str, line: u32) -> Token {
    Token {
        kind,
        lexeme: lexeme.to_string(),
        line,
    }
}

#[test]
fn test_tokenize_single_char_operators() {
    let cases = [
        ("(", TokenKind::OpenParen),
        (")", TokenKind::CloseParen),
        ("[", TokenKind::OpenBracket),
        ("]", TokenKind::CloseBracket),
        ("{", TokenKind::OpenCurly),
        ("}", TokenKind::CloseCurly),
        (",", TokenKind::Comma),
        (".", TokenKind::Dot),
        (";", TokenKind::Semicolon),
        ("*", TokenKind::Star),
        ("/", TokenKind::Slash),
        ("+", TokenKind::Plus),
        ("-", TokenKind::Dash),
        ("!", TokenKind::Not),
        (":", TokenKind::Colon),
        ("|", TokenKind::BitOr),
        ("&", TokenKind::BitAnd),
        ("=", TokenKind::Assignment),
        ("<", TokenKind::Less),
        (">", TokenKind::Greater),
    ];

    for (source, kind) in cases {
        let mut lexer = Lexer::new(source);
        assert_eq!(lexer.get_token(), token(kind, "", 0), "source {:?}", source);
        assert_eq!(lexer.get_token(), token(TokenKind::EOF, "", 0));
    }
}

#[test]
fn test_tokenize_two_char_operators() {
    let cases = [
        ("==", TokenKind::Equals),
        ("!=", TokenKind::NotEquals),
        ("<=", TokenKind::LessEquals),
        (">=", TokenKind::GreaterEquals),
        ("<<", TokenKind::BitLShift),
        (">>", TokenKind::BitRShift),
    ];

    for (source, kind) in cases {
        let tokens = tokenize(source).unwrap();
        assert_eq!(tokens.len(), 2, "source {:?}", source);
        assert_eq!(tokens[0], token(kind, "", 0));
        assert_eq!(tokens[1].kind, TokenKind::EOF);
    }
}

#[test]
fn test_tokenize_keywords() {
    let source = "and or class super this false true for while if else nil fun lambda return let";
    let tokens = tokenize(source).unwrap();

    let expected = [
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Class,
        TokenKind::Super,
        TokenKind::This,
        TokenKind::False,
        TokenKind::True,
        TokenKind::For,
        TokenKind::While,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Nil,
        TokenKind::Fun,
        TokenKind::Lambda,
        TokenKind::Return,
        TokenKind::Let,
        TokenKind::EOF,
    ];
    assert_eq!(tokens.len(), expected.len());
    for (token, kind) in tokens.iter().zip(expected) {
        assert_eq!(token.kind, kind);
        assert_eq!(token.lexeme, "");
        assert!(kind == TokenKind::EOF || token.is_keyword());
    }
}

#[test]
fn test_keyword_wins_over_identifier() {
    let tokens = tokenize("while").unwrap();
    assert_eq!(tokens[0], token(TokenKind::While, "", 0));

    let tokens = tokenize("whilex While").unwrap();
    assert_eq!(tokens[0], token(TokenKind::Identifier, "whilex", 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "While", 0));
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo bar2 CamelCase x").unwrap();

    assert_eq!(tokens[0], token(TokenKind::Identifier, "foo", 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "bar2", 0));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "CamelCase", 0));
    assert_eq!(tokens[3], token(TokenKind::Identifier, "x", 0));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers() {
    let tokens = tokenize("42 3.14 0 100.5").unwrap();

    assert_eq!(tokens[0], token(TokenKind::Int, "42", 0));
    assert_eq!(tokens[1], token(TokenKind::Double, "3.14", 0));
    assert_eq!(tokens[2], token(TokenKind::Int, "0", 0));
    assert_eq!(tokens[3], token(TokenKind::Double, "100.5", 0));
    assert_eq!(tokens[4].kind, TokenKind::EOF);
}

#[test]
fn test_leading_zeros_are_kept() {
    let tokens = tokenize("00001").unwrap();

    assert_eq!(tokens[0], token(TokenKind::Int, "00001", 0));
}

#[test]
fn test_second_decimal_point_starts_new_token() {
    let tokens = tokenize("1.2.3").unwrap();

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Double, "1.2", 0),
            token(TokenKind::Dot, "", 0),
            token(TokenKind::Int, "3", 0),
            token(TokenKind::EOF, "", 0),
        ]
    );
}

#[test]
fn test_newline_counting() {
    let mut lexer = Lexer::new("\n");
    assert_eq!(lexer.get_token(), token(TokenKind::EOF, "", 1));

    let mut lexer = Lexer::new("\n\n0.21");
    assert_eq!(lexer.get_token(), token(TokenKind::Double, "0.21", 2));
}

#[test]
fn test_carriage_return_does_not_count() {
    let tokens = tokenize("a\r\nb\rc").unwrap();

    assert_eq!(tokens[0], token(TokenKind::Identifier, "a", 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "b", 1));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "c", 1));
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" "multiple words" """#).unwrap();

    assert_eq!(tokens[0], token(TokenKind::String, "hello", 0));
    assert_eq!(tokens[1], token(TokenKind::String, "multiple words", 0));
    assert_eq!(tokens[2], token(TokenKind::String, "", 0));
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_string_keeps_newlines_and_counts_them() {
    let tokens = tokenize("\"a\nb\" c").unwrap();

    assert_eq!(tokens[0], token(TokenKind::String, "a\nb", 0));
    assert_eq!(tokens[1], token(TokenKind::Identifier, "c", 1));
}

#[test]
fn test_string_has_no_escapes() {
    let tokens = tokenize(r#""tab\t""#).unwrap();

    assert_eq!(tokens[0], token(TokenKind::String, "tab\\t", 0));
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("\"abc");
    let token = lexer.get_token();

    assert_eq!(token.kind, TokenKind::Err);
    assert_eq!(token.lexeme, "\"abc");
    assert_eq!(lexer.last_error(), Some(&ErrorImpl::UnterminatedString));

    let error = tokenize("x = \"abc\n").unwrap_err();
    assert_eq!(error.message(), "unterminated string");
    assert_eq!(error.line(), 0);
}

#[test]
fn test_tokenize_comments() {
    let tokens = tokenize("let x // this is a comment\nlet y").unwrap();

    assert_eq!(
        tokens,
        vec![
            token(TokenKind::Let, "", 0),
            token(TokenKind::Identifier, "x", 0),
            token(TokenKind::Let, "", 1),
            token(TokenKind::Identifier, "y", 1),
            token(TokenKind::EOF, "", 1),
        ]
    );
}

#[test]
fn test_comment_is_transparent() {
    let mut lexer = Lexer::new("//comment\n3;");

    assert_eq!(lexer.get_token(), token(TokenKind::Int, "3", 1));
    assert_eq!(lexer.get_token(), token(TokenKind::Semicolon, "", 1));
    assert_eq!(lexer.get_token(), token(TokenKind::EOF, "", 1));
}

#[test]
fn test_comment_at_end_of_input() {
    let tokens = tokenize("1 // trailing").unwrap();

    assert_eq!(tokens[0], token(TokenKind::Int, "1", 0));
    assert_eq!(tokens[1], token(TokenKind::EOF, "", 0));
}

#[test]
fn test_slash_is_not_a_comment() {
    let tokens = tokenize("a / b").unwrap();

    assert_eq!(tokens[1], token(TokenKind::Slash, "", 0));
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_tokenize_unrecognized_token() {
    let mut lexer = Lexer::new("x @ y");

    assert_eq!(lexer.get_token().kind, TokenKind::Identifier);
    assert_eq!(lexer.get_token(), token(TokenKind::Err, "@", 0));
    assert_eq!(
        lexer.last_error(),
        Some(&ErrorImpl::UnrecognisedToken {
            token: "@".to_string()
        })
    );

    let error = tokenize("let x\n#").unwrap_err();
    assert_eq!(error.message(), "unknown token");
    assert_eq!(error.line(), 1);
}

#[test]
fn test_underscore_is_not_an_identifier_char() {
    let mut lexer = Lexer::new("_x");

    assert_eq!(lexer.get_token().kind, TokenKind::Err);
}

#[test]
fn test_eof_repeats() {
    let mut lexer = Lexer::new("  ");

    assert_eq!(lexer.get_token().kind, TokenKind::EOF);
    assert_eq!(lexer.get_token().kind, TokenKind::EOF);
}

#[test]
fn test_lexer_iterator_stops_after_eof() {
    let kinds: Vec<TokenKind> = Lexer::new("f(1)").map(|token| token.kind).collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Int,
            TokenKind::CloseParen,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_tokenize_function_declaration() {
    let tokens = tokenize("fun int add(a: int,) { return a; }").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Fun);
    assert_eq!(tokens[1], token(TokenKind::Identifier, "int", 0));
    assert_eq!(tokens[2], token(TokenKind::Identifier, "add", 0));
    assert_eq!(tokens[3].kind, TokenKind::OpenParen);
    assert_eq!(tokens[4], token(TokenKind::Identifier, "a", 0));
    assert_eq!(tokens[5].kind, TokenKind::Colon);
    assert_eq!(tokens[7].kind, TokenKind::Comma);
    assert_eq!(tokens[8].kind, TokenKind::CloseParen);
    assert_eq!(tokens[9].kind, TokenKind::OpenCurly);
}

#[test]
fn test_token_display() {
    assert_eq!(token(TokenKind::Identifier, "abc", 0).to_string(), "abc");
    assert_eq!(token(TokenKind::Semicolon, "", 0).to_string(), ";");
    assert_eq!(token(TokenKind::While, "", 0).to_string(), "while");
    assert_eq!(token(TokenKind::EOF, "", 0).to_string(), "EOF");
}
