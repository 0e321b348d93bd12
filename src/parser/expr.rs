use crate::{
    ast::expressions::{BinaryOp, Expr, Literal, Param, UnaryOp},
    errors::errors::{ErrorImpl, ParseError},
    lexer::tokens::TokenKind,
};

use super::{
    config::Associativity, lookups::BindingPower, parser::Parser, stmt::parse_block,
    types::parse_type,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, ParseError> {
    parser.nested(|parser| {
        // First parse NUD
        let token_kind = parser.current_token_kind();
        let Some(nud_fn) = parser.get_nud_handler(token_kind) else {
            return Err(parser.error_at_current(ErrorImpl::UnknownTerminal {
                lexeme: parser.current_token().to_string(),
            }));
        };

        let mut left = nud_fn(parser)?;

        // While the current token binds tighter than `bp`, keep extending lhs
        loop {
            let token_kind = parser.current_token_kind();
            let token_bp = parser.get_binding_power(token_kind);
            if token_bp <= bp {
                break;
            }

            let Some(led_fn) = parser.get_led_handler(token_kind) else {
                break;
            };
            left = led_fn(parser, left, token_bp)?;
        }

        Ok(left)
    })
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let token = parser.current_token();

    let literal = match token.kind {
        TokenKind::Int => match token.lexeme.parse::<i32>() {
            Ok(value) => Literal::Int(value),
            Err(_) => return Err(invalid_number(parser)),
        },
        TokenKind::Double => match token.lexeme.parse::<f64>() {
            Ok(value) if value.is_finite() => Literal::Double(value),
            _ => return Err(invalid_number(parser)),
        },
        TokenKind::String => Literal::Str(token.lexeme.clone()),
        TokenKind::True => Literal::Bool(true),
        TokenKind::False => Literal::Bool(false),
        _ => {
            return Err(parser.error_at_current(ErrorImpl::UnknownTerminal {
                lexeme: token.to_string(),
            }))
        }
    };

    parser.consume_token()?;
    Ok(Expr::Literal(literal))
}

fn invalid_number(parser: &Parser) -> ParseError {
    parser.error_at_current(ErrorImpl::NumberParseError {
        token: parser.current_token().lexeme.clone(),
    })
}

/// A symbol, or an assignment when the identifier is followed by `=`.
pub fn parse_symbol_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let name = parser.consume_token()?.lexeme;

    if !parser.match_token_kind(TokenKind::Assignment) {
        return Ok(Expr::Symbol(name));
    }

    parser.consume_token()?;
    let value = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::assign(name, value))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    let operator_token = parser.consume_token()?;
    let op = match operator_token.kind {
        TokenKind::Not => UnaryOp::Not,
        _ => UnaryOp::Negate,
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::unary(op, operand))
}

pub fn binary_operator(kind: TokenKind) -> Option<BinaryOp> {
    let op = match kind {
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Dash => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Equals => BinaryOp::Eq,
        TokenKind::NotEquals => BinaryOp::NotEq,
        TokenKind::Less => BinaryOp::Lt,
        TokenKind::Greater => BinaryOp::Gt,
        TokenKind::LessEquals => BinaryOp::LtEq,
        TokenKind::GreaterEquals => BinaryOp::GtEq,
        TokenKind::BitOr => BinaryOp::BitOr,
        TokenKind::BitAnd => BinaryOp::BitAnd,
        TokenKind::BitLShift => BinaryOp::Shl,
        TokenKind::BitRShift => BinaryOp::Shr,
        _ => return None,
    };
    Some(op)
}

pub fn parse_binary_expr(
    parser: &mut Parser,
    left: Expr,
    bp: BindingPower,
) -> Result<Expr, ParseError> {
    if parser.config().associativity == Associativity::Right {
        return parse_right_binary_chain(parser, left);
    }

    let op = expect_binary_operator(parser)?;
    let right = parse_expr(parser, bp)?;

    Ok(Expr::binary(op, left, right))
}

fn expect_binary_operator(parser: &mut Parser) -> Result<BinaryOp, ParseError> {
    let Some(op) = binary_operator(parser.current_token_kind()) else {
        return Err(parser.error_at_current(ErrorImpl::UnknownTerminal {
            lexeme: parser.current_token().to_string(),
        }));
    };
    parser.consume_token()?;

    Ok(op)
}

/// Every binary operator takes the whole rest of the chain as its right
/// operand, regardless of precedence: `2*3+4` is `2*(3+4)`.
///
/// Operands are collected in a loop and folded from the right, so a long
/// flat chain does not count against the nesting limit.
fn parse_right_binary_chain(parser: &mut Parser, left: Expr) -> Result<Expr, ParseError> {
    let mut chain = vec![];

    while binary_operator(parser.current_token_kind()).is_some() {
        let op = expect_binary_operator(parser)?;
        // Stops at the next binary operator, keeps call suffixes.
        let operand = parse_expr(parser, BindingPower::Multiplicative)?;
        chain.push((op, operand));
    }

    let Some((mut op, mut right)) = chain.pop() else {
        return Ok(left);
    };
    while let Some((prev_op, operand)) = chain.pop() {
        right = Expr::binary(op, operand, right);
        op = prev_op;
    }

    Ok(Expr::binary(op, left, right))
}

/// `( expr )`, kept as an explicit `Group` node.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.consume_token()?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen, ErrorImpl::expected(")"))?;

    Ok(Expr::group(expr))
}

/// Arguments are separated by commas, without a trailing one.
pub fn parse_call_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, ParseError> {
    parser.consume_token()?;

    let mut args = vec![];

    if !parser.match_token_kind(TokenKind::CloseParen) {
        args.push(parse_expr(parser, BindingPower::Default)?);

        while !parser.match_token_kind(TokenKind::CloseParen) {
            parser.expect(TokenKind::Comma, ErrorImpl::expected(","))?;
            args.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.consume_token()?;

    Ok(Expr::call(left, args))
}

// lambda int (a: int, b: int,) { ... }
pub fn parse_lambda_expr(parser: &mut Parser) -> Result<Expr, ParseError> {
    parser.consume_token()?;

    let return_type = parse_type(parser, "return type")?;
    parser.expect(TokenKind::OpenParen, ErrorImpl::expected("("))?;
    let params = parse_params(parser)?;
    let body = parse_block(parser)?;

    Ok(Expr::Function {
        return_type,
        params,
        body,
    })
}

/// Parameter list after the opening parenthesis, through the closing one.
///
/// Every parameter is `name: type,`; the comma after the last one is
/// required too.
pub fn parse_params(parser: &mut Parser) -> Result<Vec<Param>, ParseError> {
    let max_params = parser.config().max_params;
    let mut params = vec![];

    while !parser.match_token_kind(TokenKind::CloseParen) {
        if params.len() == max_params {
            return Err(parser.error_at_current(ErrorImpl::TooManyParameters { max: max_params }));
        }

        let name = parser.expect_identifier("parameter")?;
        parser.expect(TokenKind::Colon, ErrorImpl::expected(":"))?;
        let ty = parse_type(parser, "type")?;
        parser.expect(TokenKind::Comma, ErrorImpl::expected(","))?;

        params.push((name, ty));
    }

    parser.consume_token()?;

    Ok(params)
}
