use std::collections::HashMap;

use crate::{ast::statements::Stmt, errors::errors::Error};

use super::{parser::Parser, stmt::*};

/// Operator binding strength, weakest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Or,
    And,
    Range,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Member,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Logical, spelled as words
    parser.led("or", BindingPower::Or);
    parser.led("and", BindingPower::And);

    parser.led("..", BindingPower::Range);

    parser.led("==", BindingPower::Equality);
    parser.led("!=", BindingPower::Equality);

    // Relational
    parser.led("<", BindingPower::Relational);
    parser.led(">", BindingPower::Relational);
    parser.led("<=", BindingPower::Relational);
    parser.led(">=", BindingPower::Relational);

    // Additive and multiplicative
    parser.led("+", BindingPower::Additive);
    parser.led("-", BindingPower::Additive);
    parser.led("*", BindingPower::Multiplicative);
    parser.led("/", BindingPower::Multiplicative);
    parser.led("%", BindingPower::Multiplicative);

    // Member
    parser.led(".", BindingPower::Member);

    // Statements
    parser.stmt("var", parse_var_decl_stmt);
    parser.stmt("let", parse_var_decl_stmt);
    parser.stmt("if", parse_if_stmt);
    parser.stmt("return", parse_return_stmt);
    parser.stmt("proc", parse_proc_decl_stmt);
    parser.stmt("while", parse_while_stmt);
    parser.stmt("for", parse_for_stmt);
    parser.stmt("import", parse_import_stmt);
    parser.stmt("discard", parse_discard_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<&'static str, StmtHandler>;
pub type BPLookup = HashMap<&'static str, BindingPower>;
