//! Parser implementation for building the syntax tree.
//!
//! This module contains the main Parser struct and the program entry point.
//! The parser keeps exactly one token of lookahead (`current_token`) and
//! pulls the next token from its lexer only when the current one is
//! consumed. It uses a Pratt parser approach with NUD/LED handlers for
//! expression parsing and specialized functions for statement parsing.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{ErrorImpl, ParseError},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    config::ParserConfig,
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_terminated_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// This struct owns the lexer and the current lookahead token, and holds
/// the lookup tables for parsing statements and expressions.
pub struct Parser<'a> {
    /// Source of tokens, advanced only by `consume_token`
    lexer: Lexer<'a>,
    /// The one token of lookahead
    current_token: Token,
    config: ParserConfig,
    /// Current nesting of statements and expressions
    depth: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `source` with the default configuration.
    pub fn new(source: &'a str) -> Self {
        Parser::with_config(source, ParserConfig::default())
    }

    /// Creates a parser over `source` and pulls the first token.
    pub fn with_config(source: &'a str, config: ParserConfig) -> Self {
        let mut lexer = Lexer::new(source);
        let current_token = lexer.get_token();

        let mut parser = Parser {
            lexer,
            current_token,
            config,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token.kind
    }

    pub fn match_token_kind(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    /// Pulls the next token from the lexer and returns the one it replaces.
    ///
    /// Fails without advancing when the current token is a lexer error or
    /// the end of input.
    pub fn consume_token(&mut self) -> Result<Token, ParseError> {
        match self.current_token.kind {
            TokenKind::Err => Err(self.lexical_error()),
            TokenKind::EOF => Err(ParseError::new(
                ErrorImpl::UnexpectedEof,
                self.current_token.line,
            )),
            _ => {
                let next = self.lexer.get_token();
                Ok(mem::replace(&mut self.current_token, next))
            }
        }
    }

    /// Consumes a token of the expected kind, or fails with `error`.
    pub fn expect(
        &mut self,
        expected_kind: TokenKind,
        error: ErrorImpl,
    ) -> Result<Token, ParseError> {
        if self.match_token_kind(expected_kind) {
            self.consume_token()
        } else {
            Err(self.error_at_current(error))
        }
    }

    /// Consumes an identifier and returns its text.
    ///
    /// `what` names the role of the identifier in the diagnostic.
    pub fn expect_identifier(&mut self, what: &'static str) -> Result<String, ParseError> {
        Ok(self
            .expect(TokenKind::Identifier, ErrorImpl::identifier(what))?
            .lexeme)
    }

    /// Builds a diagnostic at the line of the current token.
    ///
    /// A lexer error token always wins over `error`.
    pub fn error_at_current(&self, error: ErrorImpl) -> ParseError {
        if self.match_token_kind(TokenKind::Err) {
            return self.lexical_error();
        }
        ParseError::new(error, self.current_token.line)
    }

    fn lexical_error(&self) -> ParseError {
        let error = self
            .lexer
            .last_error()
            .cloned()
            .unwrap_or_else(|| ErrorImpl::UnrecognisedToken {
                token: self.current_token.lexeme.clone(),
            });
        ParseError::new(error, self.current_token.line)
    }

    /// Runs `parse_fn` one nesting level deeper, failing once the configured
    /// depth is reached.
    pub fn nested<T>(
        &mut self,
        parse_fn: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        if self.depth >= self.config.max_depth {
            return Err(self.error_at_current(ErrorImpl::NestingTooDeep {
                max: self.config.max_depth,
            }));
        }

        self.depth += 1;
        let result = parse_fn(self);
        self.depth -= 1;
        result
    }

    pub fn get_stmt_handler(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud_handler(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led_handler(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind` in infix position; `Default` if it has none.
    pub fn get_binding_power(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Default)
    }

    /// Registers a left denotation (infix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Prefix handlers leave the binding power table alone, so a token can be
    /// both prefix and infix (`-`, `(`).
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Parses statements until the end of input.
    ///
    /// This is the main entry point for parsing. Every top-level statement
    /// must be terminated by `;`. The first error ends parsing and no
    /// partial program is returned.
    pub fn parse(mut self) -> Result<Program, ParseError> {
        debug!("parsing program");

        let mut statements = vec![];

        while !self.match_token_kind(TokenKind::EOF) {
            match parse_terminated_stmt(&mut self) {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    debug!("parse failed: {}", error);
                    return Err(error);
                }
            }
        }

        debug!("parsed {} top-level statements", statements.len());
        Ok(Program::new(statements))
    }
}
