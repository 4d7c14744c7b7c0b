use lazy_static::lazy_static;
use serde::Serialize;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("var");
        set.insert("let");
        set.insert("if");
        set.insert("elif");
        set.insert("else");
        set.insert("while");
        set.insert("for");
        set.insert("proc");
        set.insert("return");
        set.insert("in");
        set.insert("discard");
        set.insert("of");
        set.insert("when");
        set.insert("const");
        set.insert("type");
        set.insert("import");
        set
    };

    /// Operator lexicon, longest first so `..` wins over `.` and `==` over `=`.
    pub static ref OPERATORS: Vec<&'static str> = {
        let mut ops = vec![
            "==", "!=", "<=", ">=", "->", ":=", "+", "-", "*", "/", "%", "<", ">", "=", ".", "..",
        ];
        ops.sort_by(|a, b| b.len().cmp(&a.len()));
        ops
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize)]
pub enum TokenKind {
    Indent,
    Dedent,
    Newline,
    EOF,

    Keyword,
    Identifier,
    Number,
    String,
    Operator,

    Colon,
    Comma,
    OpenParen,
    CloseParen,
}

impl TokenKind {
    /// The short upper-case name used in diagnostics and token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::EOF => "EOF",
            TokenKind::Keyword => "KW",
            TokenKind::Identifier => "IDENT",
            TokenKind::Number => "NUMBER",
            TokenKind::String => "STRING",
            TokenKind::Operator => "OP",
            TokenKind::Colon => "COLON",
            TokenKind::Comma => "COMMA",
            TokenKind::OpenParen => "LPAREN",
            TokenKind::CloseParen => "RPAREN",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Token {
    pub fn is(&self, kind: TokenKind, value: Option<&str>) -> bool {
        self.kind == kind && value.map_or(true, |value| self.value == value)
    }

    /// `KIND` or `KIND(value)`, used in error messages.
    pub fn describe(&self) -> String {
        describe(self.kind, Some(&self.value))
    }
}

pub(crate) fn describe(kind: TokenKind, value: Option<&str>) -> String {
    match value {
        Some(value) if !value.is_empty() => {
            format!("{}({})", kind, value.escape_debug())
        }
        _ => kind.to_string(),
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} @{}", self.describe(), self.span.start)
    }
}
