//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//!
//! The lexer builds every token through this macro.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The token's source text (omit for fixed-text tokens)
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Int, "42".to_string(), 0);
/// let semicolon = MK_TOKEN!(TokenKind::Semicolon, 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: String::new(),
            line: $line,
        }
    };
    ($kind:expr, $lexeme:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $lexeme,
            line: $line,
        }
    };
}
