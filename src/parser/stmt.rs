use crate::{
    ast::{
        expressions::Expr,
        statements::{Block, Stmt},
    },
    errors::errors::{ErrorImpl, ParseError},
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_expr, parse_params},
        lookups::BindingPower,
    },
};

use super::{parser::Parser, types::parse_type};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.nested(|parser| {
        if let Some(stmt_fn) = parser.get_stmt_handler(parser.current_token_kind()) {
            return stmt_fn(parser);
        }

        let expr = parse_expr(parser, BindingPower::Default)?;
        Ok(Stmt::Expr(expr))
    })
}

/// A statement followed by its `;`, as required at top level and in blocks.
pub fn parse_terminated_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    let stmt = parse_stmt(parser)?;
    parser.expect(TokenKind::Semicolon, ErrorImpl::expected(";"))?;

    Ok(stmt)
}

pub fn parse_block(parser: &mut Parser) -> Result<Block, ParseError> {
    parser.expect(TokenKind::OpenCurly, ErrorImpl::expected("{"))?;

    let mut statements = vec![];

    while !parser.match_token_kind(TokenKind::CloseCurly) {
        statements.push(parse_terminated_stmt(parser)?);
    }

    parser.consume_token()?;

    Ok(Block::new(statements))
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    Ok(Stmt::Block(parse_block(parser)?))
}

/// `( expr )` in front of an `if` or `while` body.
fn parse_condition(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.expect(TokenKind::OpenParen, ErrorImpl::expected("("))?;
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, ErrorImpl::expected(")"))?;

    Ok(condition)
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    let condition = parse_condition(parser)?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.match_token_kind(TokenKind::Else) {
        parser.consume_token()?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::IfElse {
        condition,
        then_block,
        else_block,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    let condition = parse_condition(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While { condition, body })
}

// let x: int = 3
pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    let name = parser.expect_identifier("variable")?;
    parser.expect(TokenKind::Colon, ErrorImpl::expected(":"))?;
    let ty = parse_type(parser, "type")?;

    let init = if parser.match_token_kind(TokenKind::Assignment) {
        parser.consume_token()?;
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    Ok(Stmt::VarDecl { name, ty, init })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    if parser.match_token_kind(TokenKind::Semicolon) || parser.match_token_kind(TokenKind::CloseCurly)
    {
        return Ok(Stmt::Return(None));
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    Ok(Stmt::Return(Some(value)))
}

// fun int add(a: int, b: int,) { ... }
pub fn parse_fun_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    let return_type = parse_type(parser, "return type")?;
    let name = parser.expect_identifier("function")?;
    parser.expect(TokenKind::OpenParen, ErrorImpl::expected("("))?;
    let params = parse_params(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::FunctionDecl {
        return_type,
        name,
        params,
        body,
    })
}

// class Dog: Animal { ... }
pub fn parse_class_decl_stmt(parser: &mut Parser) -> Result<Stmt, ParseError> {
    parser.consume_token()?;

    let name = parser.expect_identifier("class")?;

    let parent = if parser.match_token_kind(TokenKind::Colon) {
        parser.consume_token()?;
        Some(parse_type(parser, "parent class")?)
    } else {
        None
    };

    let body = parse_block(parser)?;

    Ok(Stmt::ClassDecl { name, parent, body })
}
