//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It handles:
//!
//! - Statement parsing (declarations, procs, control flow, blocks)
//! - Expression parsing (binary ops, calls, literals, grouping)
//! - Bounds-safe token access through a cursor
//!
//! Expressions use precedence climbing with a binding power table; the
//! first malformed construct aborts the parse.

pub mod cursor;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
