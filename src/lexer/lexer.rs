use log::trace;

use crate::{
    errors::errors::{ErrorImpl, ParseError},
    MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Pull-based scanner over an in-memory source buffer.
///
/// Every call to [`Lexer::get_token`] skips whitespace and comments, then
/// consumes exactly the characters of one token. Lines are counted from 0
/// and only `\n` advances the counter.
#[derive(Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    line: u32,
    error: Option<ErrorImpl>,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            pos: 0,
            line: 0,
            error: None,
            finished: false,
        }
    }

    /// The lexical error behind the most recent `Err` token, if any.
    pub fn last_error(&self) -> Option<&ErrorImpl> {
        self.error.as_ref()
    }

    fn at(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn get_token(&mut self) -> Token {
        let token = self.scan_token();
        trace!(
            "token {} {:?} at line {}",
            token.kind,
            token.lexeme,
            token.line
        );
        token
    }

    fn scan_token(&mut self) -> Token {
        loop {
            self.skip_whitespace();

            let Some(c) = self.at() else {
                return MK_TOKEN!(TokenKind::EOF, self.line);
            };

            return match c {
                b'(' => self.fixed(TokenKind::OpenParen, 1),
                b')' => self.fixed(TokenKind::CloseParen, 1),
                b'[' => self.fixed(TokenKind::OpenBracket, 1),
                b']' => self.fixed(TokenKind::CloseBracket, 1),
                b'{' => self.fixed(TokenKind::OpenCurly, 1),
                b'}' => self.fixed(TokenKind::CloseCurly, 1),
                b',' => self.fixed(TokenKind::Comma, 1),
                b':' => self.fixed(TokenKind::Colon, 1),
                b';' => self.fixed(TokenKind::Semicolon, 1),
                b'.' => self.fixed(TokenKind::Dot, 1),
                b'+' => self.fixed(TokenKind::Plus, 1),
                b'-' => self.fixed(TokenKind::Dash, 1),
                b'*' => self.fixed(TokenKind::Star, 1),
                b'|' => self.fixed(TokenKind::BitOr, 1),
                b'&' => self.fixed(TokenKind::BitAnd, 1),
                b'/' => {
                    if self.peek() == Some(b'/') {
                        self.skip_comment();
                        continue;
                    }
                    self.fixed(TokenKind::Slash, 1)
                }
                b'=' => match self.peek() {
                    Some(b'=') => self.fixed(TokenKind::Equals, 2),
                    _ => self.fixed(TokenKind::Assignment, 1),
                },
                b'!' => match self.peek() {
                    Some(b'=') => self.fixed(TokenKind::NotEquals, 2),
                    _ => self.fixed(TokenKind::Not, 1),
                },
                b'<' => match self.peek() {
                    Some(b'=') => self.fixed(TokenKind::LessEquals, 2),
                    Some(b'<') => self.fixed(TokenKind::BitLShift, 2),
                    _ => self.fixed(TokenKind::Less, 1),
                },
                b'>' => match self.peek() {
                    Some(b'=') => self.fixed(TokenKind::GreaterEquals, 2),
                    Some(b'>') => self.fixed(TokenKind::BitRShift, 2),
                    _ => self.fixed(TokenKind::Greater, 1),
                },
                b'"' => self.tokenize_string(),
                c if c.is_ascii_digit() => self.tokenize_numeric(),
                c if c.is_ascii_alphabetic() => self.tokenize_ident(),
                _ => self.unrecognised(),
            };
        }
    }

    fn fixed(&mut self, kind: TokenKind, len: usize) -> Token {
        self.advance_n(len);
        MK_TOKEN!(kind, self.line)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            if !c.is_ascii_whitespace() {
                break;
            }
            if c == b'\n' {
                self.line += 1;
            }
            self.advance_n(1);
        }
    }

    // Consumes `//` through the end of the line, newline included.
    fn skip_comment(&mut self) {
        self.advance_n(2);
        while let Some(c) = self.at() {
            self.advance_n(1);
            if c == b'\n' {
                self.line += 1;
                break;
            }
        }
    }

    fn tokenize_string(&mut self) -> Token {
        let start_line = self.line;
        let quote = self.pos;
        self.advance_n(1);
        let start = self.pos;

        loop {
            match self.at() {
                None => {
                    self.error = Some(ErrorImpl::UnterminatedString);
                    return MK_TOKEN!(
                        TokenKind::Err,
                        self.source[quote..].to_string(),
                        start_line
                    );
                }
                Some(b'"') => break,
                Some(b'\n') => {
                    self.line += 1;
                    self.advance_n(1);
                }
                Some(_) => self.advance_n(1),
            }
        }

        let lexeme = self.source[start..self.pos].to_string();
        self.advance_n(1);

        MK_TOKEN!(TokenKind::String, lexeme, start_line)
    }

    // At most one decimal point; a second one starts a fresh token.
    fn tokenize_numeric(&mut self) -> Token {
        let start = self.pos;
        let mut kind = TokenKind::Int;

        while let Some(c) = self.at() {
            if c.is_ascii_digit() {
                self.advance_n(1);
            } else if c == b'.' && kind == TokenKind::Int {
                kind = TokenKind::Double;
                self.advance_n(1);
            } else {
                break;
            }
        }

        MK_TOKEN!(kind, self.source[start..self.pos].to_string(), self.line)
    }

    fn tokenize_ident(&mut self) -> Token {
        let start = self.pos;
        while self.at().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance_n(1);
        }

        let word = &self.source[start..self.pos];
        match RESERVED_LOOKUP.get(word) {
            Some(kind) => MK_TOKEN!(*kind, self.line),
            None => MK_TOKEN!(TokenKind::Identifier, word.to_string(), self.line),
        }
    }

    fn unrecognised(&mut self) -> Token {
        let Some(ch) = self.source[self.pos..].chars().next() else {
            return MK_TOKEN!(TokenKind::EOF, self.line);
        };
        self.advance_n(ch.len_utf8());

        let token = ch.to_string();
        self.error = Some(ErrorImpl::UnrecognisedToken {
            token: token.clone(),
        });

        MK_TOKEN!(TokenKind::Err, token, self.line)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the first `EOF`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.get_token();
        self.finished = token.kind == TokenKind::EOF;
        Some(token)
    }
}

/// Scans the whole source, failing on the first lexical error.
///
/// The returned vector always ends with an `EOF` token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.get_token();
        match token.kind {
            TokenKind::Err => {
                let error = lex
                    .last_error()
                    .cloned()
                    .unwrap_or(ErrorImpl::UnrecognisedToken {
                        token: token.lexeme.clone(),
                    });
                return Err(ParseError::new(error, token.line));
            }
            TokenKind::EOF => {
                tokens.push(token);
                return Ok(tokens);
            }
            _ => tokens.push(token),
        }
    }
}
