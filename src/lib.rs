#![allow(clippy::module_inception)]

use crate::{
    ast::ast::Program,
    errors::errors::{ErrorTip, ParseError},
    parser::parser::Parser,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// Parses `source` with the default parser configuration.
pub fn parse_source(source: &str) -> Result<Program, ParseError> {
    Parser::new(source).parse()
}

/// Returns the text of the zero-based `line` of `source`, without its
/// line terminator.
pub fn get_source_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line as usize)
        .map(|text| text.strip_suffix('\r').unwrap_or(text))
}

/// Renders a diagnostic for display.
///
/// Lines are shown one-based:
///
/// ```text
/// Error: ExpectedToken (Did you miss a semicolon?)
/// -> main.tua
///   |
/// 3 | let a: int = 1
///   | ; expected
/// ```
pub fn format_error(error: &ParseError, source: &str, file: &str) -> String {
    let line_string = (error.line() + 1).to_string();
    let padding = line_string.len() + 2;
    let header = match error.get_tip() {
        ErrorTip::None => error.get_error_name().to_string(),
        tip => format!("{} ({})", error.get_error_name(), tip),
    };
    let line_text = get_source_line(source, error.line()).unwrap_or("");

    format!(
        "Error: {header}\n-> {file}\n{bar:>padding$}\n{line_string} | {text}\n{bar:>padding$} {message}",
        bar = "|",
        text = line_text.trim(),
        message = error.message(),
    )
}

#[cfg(test)]
mod tests {
    use crate::errors::errors::{ErrorImpl, ParseError};

    #[test]
    fn test_get_source_line() {
        let source = "let a: int = 1;\r\nlet b: int = 2;\nb;";

        assert_eq!(super::get_source_line(source, 0), Some("let a: int = 1;"));
        assert_eq!(super::get_source_line(source, 2), Some("b;"));
        assert_eq!(super::get_source_line(source, 3), None);
    }

    #[test]
    fn test_format_error() {
        let source = "let a: int = 1;\n    let b: int = 2";
        let error = super::parse_source(source).unwrap_err();

        assert_eq!(
            super::format_error(&error, source, "main.tua"),
            "Error: ExpectedToken (Did you miss a semicolon?)\n\
             -> main.tua\n  \
             |\n\
             2 | let b: int = 2\n  \
             | ; expected"
        );
    }

    #[test]
    fn test_format_error_without_tip() {
        let error = ParseError::new(ErrorImpl::UnexpectedEof, 0);

        assert_eq!(
            super::format_error(&error, "", "empty.tua"),
            "Error: UnexpectedEof\n-> empty.tua\n  |\n1 | \n  | end of token stream"
        );
    }
}
