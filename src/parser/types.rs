use crate::{ast::types::Type, errors::errors::ParseError};

use super::parser::Parser;

/// Parses a type name. `what` names its role for the diagnostic, e.g.
/// `"return type"` gives `return type identifier expected`.
pub fn parse_type(parser: &mut Parser, what: &'static str) -> Result<Type, ParseError> {
    Ok(Type::new(parser.expect_identifier(what)?))
}
