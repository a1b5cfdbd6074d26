//! Integration tests for the lexer
//!
//! Tests tokenization of ck2 text.

use ckmap_foundation::ErrorKind;
use ckmap_language::{Lexer, TokenKind};

// =============================================================================
// Basic Tokens
// =============================================================================

#[test]
fn tokenize_region_header() {
    let tokens = Lexer::tokenize("world_europe_west = {").unwrap();
    assert_eq!(tokens.len(), 4); // word, =, {, eof
    assert!(matches!(&tokens[0].kind, TokenKind::Word(w) if w == "world_europe_west"));
    assert!(matches!(tokens[1].kind, TokenKind::Equals));
    assert!(matches!(tokens[2].kind, TokenKind::LBrace));
    assert!(matches!(tokens[3].kind, TokenKind::Eof));
}

#[test]
fn tokenize_integers() {
    let tokens = Lexer::tokenize("0 42 -17 1000000").unwrap();
    assert!(matches!(tokens[0].kind, TokenKind::Int(0)));
    assert!(matches!(tokens[1].kind, TokenKind::Int(42)));
    assert!(matches!(tokens[2].kind, TokenKind::Int(-17)));
    assert!(matches!(tokens[3].kind, TokenKind::Int(1_000_000)));
}

#[test]
fn tokenize_dates_stay_words() {
    let tokens = Lexer::tokenize("1066.9.15 = { }").unwrap();
    assert!(matches!(&tokens[0].kind, TokenKind::Word(w) if w == "1066.9.15"));
}

#[test]
fn tokenize_quoted_string() {
    let tokens = Lexer::tokenize("\"hello world\"").unwrap();
    assert!(matches!(&tokens[0].kind, TokenKind::String(s) if s == "hello world"));
}

#[test]
fn tokenize_empty_quoted_string() {
    let tokens = Lexer::tokenize("\"\"").unwrap();
    assert!(matches!(&tokens[0].kind, TokenKind::String(s) if s.is_empty()));
}

// =============================================================================
// Comments and Whitespace
// =============================================================================

#[test]
fn comments_are_not_tokens() {
    let tokens = Lexer::tokenize("# -*- ck2 -*-\n\n# region list\n").unwrap();
    assert_eq!(tokens.len(), 1);
}

#[test]
fn comment_ends_at_newline() {
    let tokens = Lexer::tokenize("a = b # c = d\ne = f").unwrap();
    assert_eq!(tokens.len(), 7);
}

#[test]
fn crlf_is_whitespace() {
    let tokens = Lexer::tokenize("a = 1\r\nb = 2\r\n").unwrap();
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[3].span.line, 2);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn unterminated_string_reports_line() {
    let err = Lexer::tokenize("a = 1\nb = \"never closed").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Lex(_)));
    assert_eq!(err.context.unwrap().line, Some(2));
}

#[test]
fn control_character_is_rejected() {
    let err = Lexer::tokenize("a = \u{7}").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Lex(_)));
}

// =============================================================================
// Streaming
// =============================================================================

#[test]
fn next_token_repeats_eof() {
    let mut lexer = Lexer::new("x");
    assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Word(_)));
    assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Eof));
    assert!(matches!(lexer.next_token().unwrap().kind, TokenKind::Eof));
}

#[test]
fn spans_cover_token_text() {
    let source = "county = \"c_kent\"";
    let tokens = Lexer::tokenize(source).unwrap();
    assert_eq!(tokens[0].span.text(source), "county");
    assert_eq!(tokens[2].span.text(source), "\"c_kent\"");
}
