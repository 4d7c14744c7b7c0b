use crate::{
    ast::{ast::LiteralValue, expressions::Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

/// Precedence climbing over the binding power table.
///
/// The right operand is parsed with the operator's own binding power as the
/// new minimum, so chains of equal precedence nest to the right:
/// `1 - 2 - 3` is `1 - (2 - 3)`.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    let mut left = parse_primary_expr(parser)?;

    loop {
        let operator_bp = parser.binding_power(parser.tokens.peek(0));
        if operator_bp <= bp {
            break;
        }

        let operator = parser.tokens.advance().value.clone();
        let right = parse_expr(parser, operator_bp)?;

        left = Expr::binary(operator, left, right);
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.tokens.peek(0).clone();

    match token.kind {
        TokenKind::Number => {
            parser.tokens.advance();
            Ok(Expr::Literal {
                value: LiteralValue::from_number_text(&token.value),
            })
        }
        TokenKind::String => {
            parser.tokens.advance();
            Ok(Expr::string(token.value))
        }
        TokenKind::Identifier => {
            parser.tokens.advance();

            match token.value.as_str() {
                "true" => return Ok(Expr::Literal { value: LiteralValue::Boolean(true) }),
                "false" => return Ok(Expr::Literal { value: LiteralValue::Boolean(false) }),
                "nil" => return Ok(Expr::Literal { value: LiteralValue::Null }),
                _ => {}
            }

            let symbol = Expr::identifier(token.value);

            if parser.tokens.current_kind() == TokenKind::OpenParen {
                return parse_call_expr(parser, symbol);
            }

            Ok(symbol)
        }
        TokenKind::OpenParen => parse_grouping_expr(parser),
        _ => Err(Error::new(
            ErrorImpl::ExpectedExpression {
                token: token.describe(),
            },
            token.span.start,
        )),
    }
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.tokens.require(TokenKind::OpenParen, None)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.tokens.require(TokenKind::CloseParen, None)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expr) -> Result<Expr, Error> {
    parser.tokens.require(TokenKind::OpenParen, None)?;

    let mut args = vec![];

    if parser.tokens.current_kind() != TokenKind::CloseParen {
        loop {
            args.push(parse_expr(parser, BindingPower::Default)?);

            if !parser.tokens.consume_if(TokenKind::Comma, None) {
                break;
            }
        }
    }

    parser.tokens.require(TokenKind::CloseParen, None)?;

    Ok(Expr::call(callee, args))
}
