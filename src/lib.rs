#![allow(clippy::module_inception)]

use std::fmt::Display;

use serde::Serialize;

use crate::{ast::ast::Program, errors::errors::{Error, ErrorTip}};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// 1-based line and column in the normalized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    pub fn start() -> Self {
        Position { line: 1, column: 1 }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Tokenizes and parses `source` in one go.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = lexer::lexer::tokenize(source)?;
    parser::parser::parse(tokens)
}

/// Returns the text of the 1-based `line` in `source`, without its line break.
pub fn get_line_at_position(source: &str, line: u32) -> Option<String> {
    let normalized = source.replace("\r\n", "\n");
    normalized
        .split('\n')
        .nth(line.saturating_sub(1) as usize)
        .map(String::from)
}

/// Formats an error with the offending source line and a caret under the column.
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
    /*
        Error: UnexpectedToken (expected COLON but got NEWLINE)
        -> main.nim
          |
        3 | if x == 1
          | ---------^
    */

    let position = error.get_position();
    let line_str = position.line.to_string();
    let padding = line_str.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("Error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}:{}\n", file, position));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let line_text = get_line_at_position(source, position.line).unwrap_or_default();
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_str, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));
    out
}

/// Prints [`render_error`] output to stderr.
pub fn display_error(error: &Error, source: &str, file: &str) {
    eprintln!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
