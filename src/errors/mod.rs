//! Error types and error handling for the front end.
//!
//! This module defines the single diagnostic type shared by the lexer and
//! the parser. It includes:
//!
//! - `ParseError`, a failure kind paired with the source line it occurred on
//! - `ErrorImpl`, the closed set of failure kinds and their messages
//! - `ErrorTip`, optional suggestions shown alongside a diagnostic

pub mod errors;

#[cfg(test)]
mod tests;
