//! Sequential reader over a token stream.
//!
//! The cursor never runs off the end of its tokens: every lookahead past
//! the last token yields the final token, which is always `EOF`.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{describe, Token, TokenKind},
    Position, Span,
};

pub struct TokenCursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl TokenCursor {
    /// Wraps `tokens`, appending an `EOF` marker if the stream lacks one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::start);

            tokens.push(Token {
                kind: TokenKind::EOF,
                value: String::new(),
                span: Span { start: end, end },
            });
        }

        TokenCursor { tokens, pos: 0 }
    }

    /// Returns the token `offset` positions ahead without consuming it.
    pub fn peek(&self, offset: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + offset).min(last)]
    }

    pub fn current_kind(&self) -> TokenKind {
        self.peek(0).kind
    }

    /// Returns the current token and moves past it.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos.min(self.tokens.len() - 1);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[index]
    }

    pub fn at_end(&self) -> bool {
        self.current_kind() == TokenKind::EOF
    }

    /// Whether the current token has `kind` and, when given, `value`.
    pub fn check(&self, kind: TokenKind, value: Option<&str>) -> bool {
        self.peek(0).is(kind, value)
    }

    /// Consumes the current token only if it matches.
    pub fn consume_if(&mut self, kind: TokenKind, value: Option<&str>) -> bool {
        if self.check(kind, value) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes and returns the current token, failing if it does not match.
    pub fn require(&mut self, kind: TokenKind, value: Option<&str>) -> Result<Token, Error> {
        if self.check(kind, value) {
            return Ok(self.advance().clone());
        }

        let found = self.peek(0);
        Err(Error::new(
            ErrorImpl::UnexpectedToken {
                expected: describe(kind, value),
                found: found.describe(),
            },
            found.span.start,
        ))
    }

    pub fn skip_blank_lines(&mut self) {
        while self.current_kind() == TokenKind::Newline {
            self.advance();
        }
    }
}
