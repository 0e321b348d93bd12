use std::fmt::Display;

use thiserror::Error;

/// A diagnostic produced while lexing or parsing.
///
/// Carries the failure kind and the (zero-based) line of the token that was
/// active when the failure was detected. Parsing stops at the first one.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} : {line}")]
pub struct ParseError {
    internal_error: ErrorImpl,
    line: u32,
}

impl ParseError {
    pub fn new(error_impl: ErrorImpl, line: u32) -> Self {
        ParseError {
            internal_error: error_impl,
            line,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The bare diagnostic text, without the line suffix.
    pub fn message(&self) -> String {
        self.internal_error.to_string()
    }

    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::UnterminatedString
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::IdentifierExpected { .. } => "IdentifierExpected",
            ErrorImpl::UnknownTerminal { .. } => "UnknownTerminal",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::TooManyParameters { .. } => "TooManyParameters",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::UnexpectedEof => "UnexpectedEof",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("Character `{}` is not part of the language", token))
            }
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::ExpectedToken { token: ";" } => {
                ErrorTip::Suggestion(String::from("Did you miss a semicolon?"))
            }
            ErrorImpl::ExpectedToken { token: "," } => ErrorTip::Suggestion(String::from(
                "Every parameter, including the last one, is followed by a comma",
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::TooManyParameters { max } => {
                ErrorTip::Suggestion(format!("Functions take at most {} parameters", max))
            }
            ErrorImpl::NestingTooDeep { max } => {
                ErrorTip::Suggestion(format!("Nesting is limited to {} levels", max))
            }
            _ => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unknown token")]
    UnrecognisedToken { token: String },
    #[error("unterminated string")]
    UnterminatedString,
    #[error("{token} expected")]
    ExpectedToken { token: &'static str },
    #[error("{what} identifier expected")]
    IdentifierExpected { what: &'static str },
    #[error("unknown Terminal token : {lexeme}")]
    UnknownTerminal { lexeme: String },
    #[error("invalid number : {token}")]
    NumberParseError { token: String },
    #[error("too many parameters : max {max}")]
    TooManyParameters { max: usize },
    #[error("nesting too deep : max {max}")]
    NestingTooDeep { max: usize },
    #[error("end of token stream")]
    UnexpectedEof,
}

impl ErrorImpl {
    pub fn expected(token: &'static str) -> Self {
        ErrorImpl::ExpectedToken { token }
    }

    pub fn identifier(what: &'static str) -> Self {
        ErrorImpl::IdentifierExpected { what }
    }
}
