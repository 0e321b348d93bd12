//! Parser module for building the syntax tree.
//!
//! This module contains the parser that pulls tokens from a lexer, one at a
//! time, and builds a `Program`. It uses a Pratt parser for expressions with
//! operator precedence and handles:
//!
//! - Statement parsing (declarations, blocks, control flow, returns)
//! - Expression parsing (binary and prefix operators, calls, literals, lambdas)
//! - Type names in declarations
//! - Parse limits (parameter count, nesting depth) from `ParserConfig`
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! Parsing stops at the first error.

pub mod config;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
