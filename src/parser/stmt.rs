use crate::{
    ast::{
        expressions::Expr,
        statements::{ElifBranch, Param, Stmt, VarKind},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
};

use super::parser::Parser;

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(handler) = parser.stmt_handler() {
        return handler(parser);
    }

    let starts_assignment = matches!(
        parser.tokens.current_kind(),
        TokenKind::Identifier | TokenKind::Keyword
    ) && parser.tokens.peek(1).is(TokenKind::Operator, Some("="));

    if starts_assignment {
        return parse_assign_stmt(parser);
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    end_simple_stmt(parser);

    Ok(Stmt::ExprStatement { expression })
}

/// Simple statements swallow one trailing line break when present.
fn end_simple_stmt(parser: &mut Parser) {
    parser.tokens.consume_if(TokenKind::Newline, None);
}

/// Whether the statement ends here, leaving an optional operand absent.
fn at_line_end(parser: &mut Parser) -> bool {
    if parser.tokens.consume_if(TokenKind::Newline, None) {
        return true;
    }

    matches!(parser.tokens.current_kind(), TokenKind::Dedent | TokenKind::EOF)
}

/// Parses `NEWLINE INDENT statements DEDENT`.
fn parse_block(parser: &mut Parser) -> Result<Vec<Stmt>, Error> {
    parser.tokens.require(TokenKind::Newline, None)?;
    // Blank lines between the header and the body emit only NEWLINEs.
    parser.tokens.skip_blank_lines();
    parser.tokens.require(TokenKind::Indent, None)?;

    let mut statements = Vec::new();

    parser.tokens.skip_blank_lines();
    while !matches!(parser.tokens.current_kind(), TokenKind::Dedent | TokenKind::EOF) {
        statements.push(parse_stmt(parser)?);
        parser.tokens.skip_blank_lines();
    }

    parser.tokens.require(TokenKind::Dedent, None)?;

    Ok(statements)
}

/// Parses `condition ':' block`, the shape shared by `if`, `elif` and `while`.
fn parse_guarded_block(parser: &mut Parser) -> Result<(Expr, Vec<Stmt>), Error> {
    let condition = parse_expr(parser, BindingPower::Default)?;
    parser.tokens.require(TokenKind::Colon, None)?;
    let body = parse_block(parser)?;

    Ok((condition, body))
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = match parser.tokens.advance().value.as_str() {
        "let" => VarKind::Let,
        _ => VarKind::Var,
    };

    let name = parser.tokens.require(TokenKind::Identifier, None)?.value;

    let value = if parser.tokens.consume_if(TokenKind::Operator, Some("=")) {
        Some(parse_expr(parser, BindingPower::Default)?)
    } else {
        None
    };

    end_simple_stmt(parser);

    Ok(Stmt::VarDecl { kind, name, value })
}

pub fn parse_assign_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = Expr::identifier(parser.tokens.advance().value.clone());
    parser.tokens.require(TokenKind::Operator, Some("="))?;
    let value = parse_expr(parser, BindingPower::Default)?;

    end_simple_stmt(parser);

    Ok(Stmt::Assign { target, value })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("if"))?;
    let (condition, then_branch) = parse_guarded_block(parser)?;

    let mut elif_branches = Vec::new();
    while parser.tokens.consume_if(TokenKind::Keyword, Some("elif")) {
        let (condition, body) = parse_guarded_block(parser)?;
        elif_branches.push(ElifBranch { condition, body });
    }

    let else_branch = if parser.tokens.consume_if(TokenKind::Keyword, Some("else")) {
        parser.tokens.require(TokenKind::Colon, None)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(Stmt::If {
        condition,
        then_branch,
        elif_branches,
        else_branch,
    })
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("return"))?;

    if at_line_end(parser) {
        return Ok(Stmt::Return { value: None });
    }

    let value = parse_expr(parser, BindingPower::Default)?;
    end_simple_stmt(parser);

    Ok(Stmt::Return { value: Some(value) })
}

/// `proc name(param: type, ...): returnType =` followed by an indented body.
pub fn parse_proc_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("proc"))?;
    let name = parser.tokens.require(TokenKind::Identifier, None)?.value;

    let mut params = Vec::new();
    if parser.tokens.consume_if(TokenKind::OpenParen, None) {
        while parser.tokens.current_kind() != TokenKind::CloseParen {
            let param_name = parser.tokens.require(TokenKind::Identifier, None)?.value;

            let type_name = if parser.tokens.consume_if(TokenKind::Colon, None) {
                Some(parser.tokens.require(TokenKind::Identifier, None)?.value)
            } else {
                None
            };

            params.push(Param { name: param_name, type_name });

            if !parser.tokens.consume_if(TokenKind::Comma, None) {
                break;
            }
        }

        parser.tokens.require(TokenKind::CloseParen, None)?;
    }

    let mut return_type = None;
    if parser.tokens.consume_if(TokenKind::Colon, None)
        && parser.tokens.current_kind() == TokenKind::Identifier
    {
        return_type = Some(parser.tokens.advance().value.clone());
    }

    parser.tokens.consume_if(TokenKind::Operator, Some("="));

    let body = parse_block(parser)?;

    Ok(Stmt::ProcDecl {
        name,
        params,
        return_type,
        body,
    })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("while"))?;
    let (condition, body) = parse_guarded_block(parser)?;

    Ok(Stmt::While { condition, body })
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("for"))?;
    let iterator = parser.tokens.require(TokenKind::Identifier, None)?.value;

    let has_in = parser.tokens.consume_if(TokenKind::Keyword, Some("in"))
        || parser.tokens.consume_if(TokenKind::Identifier, Some("in"));

    if !has_in {
        let found = parser.tokens.peek(0);
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: found.describe(),
                message: String::from("expected `in` after for iterator"),
            },
            found.span.start,
        ));
    }

    let (iterable, body) = parse_guarded_block(parser)?;

    Ok(Stmt::For {
        iterator,
        iterable,
        body,
    })
}

pub fn parse_import_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("import"))?;
    let module = parser.tokens.require(TokenKind::Identifier, None)?.value;

    end_simple_stmt(parser);

    Ok(Stmt::Import { module })
}

pub fn parse_discard_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.tokens.require(TokenKind::Keyword, Some("discard"))?;

    if at_line_end(parser) {
        return Ok(Stmt::Discard { expression: None });
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    end_simple_stmt(parser);

    Ok(Stmt::Discard {
        expression: Some(expression),
    })
}
