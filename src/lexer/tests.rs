//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Indentation tracking and synthetic block tokens
//! - Keywords and identifiers
//! - Numeric and string literals
//! - Operators and punctuation
//! - Comments
//! - Error cases

use crate::errors::errors::ErrorImpl;

use super::{
    lexer::{tokenize, tokenize_with, LexerConfig},
    tokens::{Token, TokenKind},
};

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

fn layout(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .filter(|kind| matches!(kind, TokenKind::Indent | TokenKind::Dedent))
        .collect()
}

fn count(tokens: &[Token], kind: TokenKind) -> usize {
    tokens.iter().filter(|token| token.kind == kind).count()
}

#[test]
fn test_tokenize_keywords() {
    let source = "var let if elif else while for proc return in discard of when const type import";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens.len(), 17);
    for token in &tokens[..16] {
        assert_eq!(token.kind, TokenKind::Keyword, "{} should be a keyword", token.value);
    }
    assert_eq!(tokens[16].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_identifiers() {
    let tokens = tokenize("foo baz_123 _underscore CamelCase echo and").unwrap();

    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(tokens[0].value, "foo");
    assert_eq!(tokens[1].value, "baz_123");
    assert_eq!(tokens[2].value, "_underscore");
    assert_eq!(tokens[3].value, "CamelCase");
    assert_eq!(tokens[4].kind, TokenKind::Identifier);
    assert_eq!(tokens[5].kind, TokenKind::Identifier);
    assert_eq!(tokens[6].kind, TokenKind::EOF);
}

#[test]
fn test_tokenize_numbers_permissively() {
    let tokens = tokenize("42 3.14 0xFF 1_000 1.2.3").unwrap();

    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].value, "0xFF");
    assert_eq!(tokens[3].value, "1_000");
    assert_eq!(tokens[4].kind, TokenKind::Number);
    assert_eq!(tokens[4].value, "1.2.3");
}

#[test]
fn test_number_stops_before_range() {
    let tokens = tokenize("0..10").unwrap();

    assert_eq!(kinds(&tokens), vec![TokenKind::Number, TokenKind::Operator, TokenKind::Number, TokenKind::EOF]);
    assert_eq!(tokens[0].value, "0");
    assert_eq!(tokens[1].value, "..");
    assert_eq!(tokens[2].value, "10");
}

#[test]
fn test_tokenize_strings() {
    let tokens = tokenize(r#""hello" 'world' "multiple words""#).unwrap();

    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].value, "hello");
    assert_eq!(tokens[1].value, "world");
    assert_eq!(tokens[2].value, "multiple words");
    assert_eq!(tokens[3].kind, TokenKind::EOF);
}

#[test]
fn test_string_escapes_are_kept_verbatim() {
    let tokens = tokenize(r#""tab\there" "quote\"inside""#).unwrap();

    assert_eq!(tokens[0].value, "tab\\there");
    assert_eq!(tokens[1].value, "quote\\\"inside");
}

#[test]
fn test_empty_string() {
    let tokens = tokenize(r#"f("", 'a')"#).unwrap();

    assert_eq!(tokens[2].kind, TokenKind::String);
    assert_eq!(tokens[2].value, "");
    assert_eq!(tokens[4].value, "a");
}

#[test]
fn test_block_string_spans_lines() {
    let source = "var doc = \"\"\"first\n  second \\n\"\"\"\nx";
    let tokens = tokenize(source).unwrap();

    assert_eq!(tokens[3].kind, TokenKind::String);
    assert_eq!(tokens[3].value, "first\n  second \\n");
    assert_eq!(tokens[4].kind, TokenKind::Newline);
    assert_eq!(tokens[5].value, "x");
    assert_eq!(count(&tokens, TokenKind::Indent), 0);
}

#[test]
fn test_tokenize_operators_longest_match() {
    let tokens = tokenize("== != <= >= -> := + - * / % < > = . ..").unwrap();
    let values: Vec<&str> = tokens[..16].iter().map(|token| token.value.as_str()).collect();

    assert_eq!(
        values,
        vec!["==", "!=", "<=", ">=", "->", ":=", "+", "-", "*", "/", "%", "<", ">", "=", ".", ".."]
    );
    assert!(tokens[..16].iter().all(|token| token.kind == TokenKind::Operator));
}

#[test]
fn test_tokenize_punctuation() {
    let tokens = tokenize("f(a, b):").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::OpenParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::CloseParen,
            TokenKind::Colon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    let tokens = tokenize("x = 1 # trailing\n# whole line\ny").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Operator,
            TokenKind::Number,
            TokenKind::Newline,
            TokenKind::Newline,
            TokenKind::Identifier,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_unrecognised_character_passes_through() {
    let tokens = tokenize("a @ b").unwrap();

    assert_eq!(tokens[1].kind, TokenKind::Operator);
    assert_eq!(tokens[1].value, "@");
}

#[test]
fn test_unrecognised_character_rejected_in_strict_mode() {
    let error = tokenize_with("a @ b", LexerConfig { strict: true }).unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::UnrecognisedToken { token: "@".to_string() });
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_indent_and_dedent() {
    let source = "if x:\n    y\nz\n";
    let tokens = tokenize(source).unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Keyword,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::EOF,
        ]
    );
    assert!(tokens[4].value.is_empty());
}

#[test]
fn test_balanced_blocks() {
    let sources = [
        "a\n  b\n    c\n  d\ne\n",
        "a\n  b\n    c",
        "proc f() =\n    if x:\n        return 1\n    return 2\n",
        "",
        "\n\n   \n",
    ];

    for source in sources {
        let tokens = tokenize(source).unwrap();
        assert_eq!(
            count(&tokens, TokenKind::Indent),
            count(&tokens, TokenKind::Dedent),
            "unbalanced blocks for {:?}",
            source
        );
    }
}

#[test]
fn test_blank_lines_do_not_affect_layout() {
    let dense = "a\n    b\n    c\nd\n";
    let sparse = "a\n\n    b\n  \n\t\n    c\n\nd\n";

    assert_eq!(layout(dense), layout(sparse));
}

#[test]
fn test_comment_lines_at_block_level_keep_layout() {
    let plain = "a\n    b\n    c\nd\n";
    let commented = "a\n    # note\n    b\n    c\n# tail\nd\n";

    assert_eq!(layout(plain), layout(commented));
}

#[test]
fn test_comment_line_indentation_counts() {
    let source = "if x:\n    y = 1\n# note\n    z = 2\n";

    assert_eq!(
        layout(source),
        vec![TokenKind::Indent, TokenKind::Dedent, TokenKind::Indent, TokenKind::Dedent]
    );
}

#[test]
fn test_tab_counts_as_four_spaces() {
    let source = "a\n\tb\n    c\nd\n";

    assert_eq!(layout(source), vec![TokenKind::Indent, TokenKind::Dedent]);
}

#[test]
fn test_indentation_mismatch() {
    let error = tokenize("a\n    b\n  c\n").unwrap_err();

    assert_eq!(error.kind(), &ErrorImpl::IndentationMismatch { width: 2 });
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_two_trailing_dedents_before_eof() {
    let source = "if a:\n    if b:\n        c\n";
    let tokens = tokenize(source).unwrap();
    let tail = &tokens[tokens.len() - 3..];

    assert_eq!(kinds(tail), vec![TokenKind::Dedent, TokenKind::Dedent, TokenKind::EOF]);
}

#[test]
fn test_dedent_to_outer_level_emits_one_per_level() {
    let source = "a\n  b\n    c\nd\n";

    assert_eq!(
        layout(source),
        vec![TokenKind::Indent, TokenKind::Indent, TokenKind::Dedent, TokenKind::Dedent]
    );
}

#[test]
fn test_crlf_is_normalized() {
    let tokens = tokenize("a\r\n    b\r\n").unwrap();

    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Indent,
            TokenKind::Identifier,
            TokenKind::Newline,
            TokenKind::Dedent,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_token_positions() {
    let tokens = tokenize("var x = 1\n  y").unwrap();

    assert_eq!(tokens[0].span.start.line, 1);
    assert_eq!(tokens[0].span.start.column, 1);
    assert_eq!(tokens[1].span.start.column, 5);
    assert_eq!(tokens[3].span.start.column, 9);
    assert_eq!(tokens[5].kind, TokenKind::Indent);
    assert_eq!(tokens[6].span.start.line, 2);
    assert_eq!(tokens[6].span.start.column, 3);
}

#[test]
fn test_token_display() {
    let tokens = tokenize("x = 'a'\n").unwrap();

    assert_eq!(tokens[0].to_string(), "IDENT(x) @1:1");
    assert_eq!(tokens[2].to_string(), "STRING(a) @1:5");
    assert_eq!(tokens[3].to_string(), "NEWLINE(\\n) @1:8");
    assert_eq!(tokens[4].to_string(), "EOF @2:1");
}
