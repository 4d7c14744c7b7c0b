//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! Statements are parsed by recursive descent, dispatched on their leading
//! keyword; expressions by precedence climbing over a binding power table.
//!
//! It maintains lookup tables for:
//! - Statement handlers, keyed by keyword
//! - Binding powers for infix operators

use std::collections::HashMap;

use crate::{
    ast::{ast::Program, statements::Stmt},
    errors::errors::Error,
    lexer::tokens::{Token, TokenKind},
};

use super::{
    cursor::TokenCursor,
    lookups::{create_token_lookups, BPLookup, BindingPower, StmtHandler, StmtLookup},
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Cursor over the token stream
    pub tokens: TokenCursor,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for operator binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a parser over `tokens` with all lookup tables registered.
    pub fn new(tokens: Vec<Token>) -> Self {
        let mut parser = Parser {
            tokens: TokenCursor::new(tokens),
            stmt_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Returns the statement handler for the current token, if it is a
    /// keyword that starts a statement.
    pub fn stmt_handler(&self) -> Option<StmtHandler> {
        let token = self.tokens.peek(0);
        if token.kind != TokenKind::Keyword {
            return None;
        }

        self.stmt_lookup.get(token.value.as_str()).copied()
    }

    /// Returns the binding power of `token` when it is an infix operator.
    ///
    /// `and`/`or` are lexed as identifiers, so both kinds are looked up.
    pub fn binding_power(&self, token: &Token) -> BindingPower {
        match token.kind {
            TokenKind::Operator | TokenKind::Identifier => self
                .binding_power_lookup
                .get(token.value.as_str())
                .copied()
                .unwrap_or(BindingPower::Default),
            _ => BindingPower::Default,
        }
    }

    /// Registers an infix operator and its binding power.
    pub fn led(&mut self, operator: &'static str, binding_power: BindingPower) {
        self.binding_power_lookup.insert(operator, binding_power);
    }

    /// Registers a statement handler for a keyword.
    pub fn stmt(&mut self, keyword: &'static str, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(keyword, stmt_fn);
    }

    /// Parses statements until `EOF`.
    pub fn parse_program(&mut self) -> Result<Program, Error> {
        let mut body: Vec<Stmt> = vec![];

        self.tokens.skip_blank_lines();
        while !self.tokens.at_end() {
            body.push(parse_stmt(self)?);
            self.tokens.skip_blank_lines();
        }

        Ok(Program::new(body))
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. The first malformed construct
/// aborts the whole parse; no partial tree is returned.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    Parser::new(tokens).parse_program()
}
