use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("and", TokenKind::And);
        map.insert("or", TokenKind::Or);
        map.insert("class", TokenKind::Class);
        map.insert("super", TokenKind::Super);
        map.insert("this", TokenKind::This);
        map.insert("false", TokenKind::False);
        map.insert("true", TokenKind::True);
        map.insert("for", TokenKind::For);
        map.insert("while", TokenKind::While);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("nil", TokenKind::Nil);
        map.insert("fun", TokenKind::Fun);
        map.insert("lambda", TokenKind::Lambda);
        map.insert("return", TokenKind::Return);
        map.insert("let", TokenKind::Let);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Err,

    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,

    Comma,
    Dot,
    Dash,
    Plus,
    Semicolon,
    Colon,
    Slash,
    Star,

    BitOr,
    BitAnd,
    BitLShift,
    BitRShift,

    Assignment, // =
    Equals,     // ==
    Not,        // !
    NotEquals,  // !=
    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Identifier,
    String,
    Int,
    Double,

    // Reserved
    And,
    Or,
    Class,
    Super,
    This,
    False,
    True,
    For,
    While,
    If,
    Else,
    Nil,
    Fun,
    Lambda,
    Return,
    Let,
}

impl TokenKind {
    /// Source text of fixed-text kinds; literal classes have none.
    pub fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenBracket => "[",
            TokenKind::CloseBracket => "]",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Dash => "-",
            TokenKind::Plus => "+",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::BitOr => "|",
            TokenKind::BitAnd => "&",
            TokenKind::BitLShift => "<<",
            TokenKind::BitRShift => ">>",
            TokenKind::Assignment => "=",
            TokenKind::Equals => "==",
            TokenKind::Not => "!",
            TokenKind::NotEquals => "!=",
            TokenKind::Less => "<",
            TokenKind::LessEquals => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEquals => ">=",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Class => "class",
            TokenKind::Super => "super",
            TokenKind::This => "this",
            TokenKind::False => "false",
            TokenKind::True => "true",
            TokenKind::For => "for",
            TokenKind::While => "while",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::Nil => "nil",
            TokenKind::Fun => "fun",
            TokenKind::Lambda => "lambda",
            TokenKind::Return => "return",
            TokenKind::Let => "let",
            TokenKind::EOF
            | TokenKind::Err
            | TokenKind::Identifier
            | TokenKind::String
            | TokenKind::Int
            | TokenKind::Double => return None,
        };

        Some(text)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: u32,
}

/// Shows the lexeme when there is one, the fixed text of the kind otherwise.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.lexeme.is_empty() {
            return write!(f, "{}", self.lexeme);
        }

        match self.kind.symbol() {
            Some(text) => write!(f, "{}", text),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl Token {
    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| *kind == self.kind)
    }
}
