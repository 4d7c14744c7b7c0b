use lazy_static::lazy_static;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, OPERATORS, RESERVED_LOOKUP};

/// Columns a leading tab counts for when measuring indentation.
pub const TAB_WIDTH: usize = 4;

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^[0-9][0-9_.xA-Fa-f]*").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
    ];
}

/// Lexer behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LexerConfig {
    /// Reject characters no rule recognises instead of passing them
    /// through as one-character `OP` tokens.
    pub strict: bool,
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    indent_stack: Vec<usize>,
    config: LexerConfig,
}

impl Lexer {
    pub fn new(source: &str, config: LexerConfig) -> Lexer {
        Lexer {
            tokens: vec![],
            source: source.replace("\r\n", "\n"),
            pos: 0,
            line: 1,
            column: 1,
            indent_stack: vec![0],
            config,
        }
    }

    pub fn advance(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    /// Pushes a token with no extent at the current position.
    fn push_marker(&mut self, kind: TokenKind) {
        let here = self.position();
        self.push(MK_TOKEN!(kind, String::new(), Span { start: here, end: here }));
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self, n: usize) -> Option<char> {
        self.remainder().chars().nth(n)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Measures the leading whitespace of the current line and adjusts the
    /// indentation stack, emitting `INDENT`/`DEDENT` tokens as needed.
    ///
    /// Blank and comment-only lines leave the stack untouched.
    fn handle_indentation(&mut self) -> Result<(), Error> {
        let mut width = 0;
        let mut leading = 0;

        for ch in self.remainder().chars() {
            match ch {
                ' ' => width += 1,
                '\t' => width += TAB_WIDTH,
                _ => break,
            }
            leading += 1;
        }

        self.advance_n(leading);

        match self.at() {
            None | Some('\n') => return Ok(()),
            _ => {}
        }

        let top = self.current_indent();

        if width > top {
            self.indent_stack.push(width);
            self.push_marker(TokenKind::Indent);
        } else if width < top {
            while width < self.current_indent() {
                self.indent_stack.pop();
                self.push_marker(TokenKind::Dedent);
            }

            if width != self.current_indent() {
                return Err(Error::new(
                    ErrorImpl::IndentationMismatch { width },
                    self.position(),
                ));
            }
        }

        Ok(())
    }

    fn current_indent(&self) -> usize {
        // The base level is never popped: widths are unsigned.
        self.indent_stack.last().copied().unwrap_or(0)
    }

    fn read_string(&mut self) {
        let start = self.position();
        let quote = match self.advance() {
            Some(quote) => quote,
            None => return,
        };
        let mut value = String::new();

        if self.peek(0) == Some(quote) && self.peek(1) == Some(quote) {
            self.advance_n(2);

            while !self.at_eof() {
                if self.peek(0) == Some(quote)
                    && self.peek(1) == Some(quote)
                    && self.peek(2) == Some(quote)
                {
                    self.advance_n(3);
                    break;
                }

                if let Some(ch) = self.advance() {
                    value.push(ch);
                }
            }
        } else {
            while let Some(ch) = self.at() {
                if ch == quote {
                    break;
                }

                self.advance();
                value.push(ch);

                // Escapes are kept verbatim, the backslash shields one character.
                if ch == '\\' {
                    if let Some(escaped) = self.advance() {
                        value.push(escaped);
                    }
                }
            }

            if self.at() == Some(quote) {
                self.advance();
            }
        }

        self.push(MK_TOKEN!(TokenKind::String, value, Span { start, end: self.position() }));
    }

    fn match_operator(&mut self) -> bool {
        let operator = OPERATORS
            .iter()
            .find(|op| self.remainder().starts_with(**op))
            .copied();

        match operator {
            Some(op) => {
                let start = self.position();
                self.advance_n(op.len());
                self.push(MK_TOKEN!(
                    TokenKind::Operator,
                    String::from(op),
                    Span { start, end: self.position() }
                ));
                true
            }
            None => false,
        }
    }

    fn match_pattern(&mut self) -> bool {
        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(self.remainder()) {
                let matched = found.as_str().to_string();
                (pattern.handler)(self, &matched);
                return true;
            }
        }

        false
    }

    fn unrecognised(&mut self, ch: char) -> Result<(), Error> {
        if self.config.strict {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken { token: ch.to_string() },
                self.position(),
            ));
        }

        let start = self.position();
        self.advance();
        self.push(MK_TOKEN!(
            TokenKind::Operator,
            ch.to_string(),
            Span { start, end: self.position() }
        ));
        Ok(())
    }

    fn finish(mut self) -> Vec<Token> {
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push_marker(TokenKind::Dedent);
        }

        self.push_marker(TokenKind::EOF);
        self.tokens
    }
}

fn number_handler(lexer: &mut Lexer, matched: &str) {
    // A numeric run never swallows a range operator: `0..10` is three tokens.
    let literal = match matched.find("..") {
        Some(index) => &matched[..index],
        None => matched,
    };

    let start = lexer.position();
    lexer.advance_n(literal.len());
    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        String::from(literal),
        Span { start, end: lexer.position() }
    ));
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.chars().count());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    let kind = if RESERVED_LOOKUP.contains(matched) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };

    let start = lexer.position();
    lexer.advance_n(matched.len());
    lexer.push(MK_TOKEN!(kind, String::from(matched), Span { start, end: lexer.position() }));
}

/// Tokenizes `source` with the default (lenient) configuration.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    tokenize_with(source, LexerConfig::default())
}

pub fn tokenize_with(source: &str, config: LexerConfig) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, config);

    while !lex.at_eof() {
        if lex.column == 1 {
            lex.handle_indentation()?;
            if lex.at_eof() {
                break;
            }
        }

        let ch = match lex.at() {
            Some(ch) => ch,
            None => break,
        };

        match ch {
            ' ' | '\t' | '\r' => {
                lex.advance();
            }
            '\n' => {
                let start = lex.position();
                lex.advance();
                lex.push(MK_TOKEN!(
                    TokenKind::Newline,
                    String::from("\n"),
                    Span { start, end: lex.position() }
                ));
            }
            '"' | '\'' => lex.read_string(),
            _ => {
                // Operators go first so `:=` is not split into `:` and `=`.
                if lex.match_operator() || lex.match_pattern() {
                    continue;
                }

                lex.unrecognised(ch)?;
            }
        }
    }

    Ok(lex.finish())
}
