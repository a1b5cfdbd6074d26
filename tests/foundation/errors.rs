//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use ckmap_foundation::{Error, ErrorContext, ErrorKind, Type};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_lex() {
    let err = Error::lex("unterminated quoted string");
    assert!(matches!(err.kind, ErrorKind::Lex(_)));
    assert!(err.is_load_error());
}

#[test]
fn error_parse() {
    let err = Error::parse("'='", "'}'");
    assert!(matches!(&err.kind, ErrorKind::Parse { expected, found } if expected == "'='" && found == "'}'"));
}

#[test]
fn error_type_mismatch() {
    let err = Error::type_mismatch(Type::List, Type::Block);
    let msg = err.to_string();
    assert!(msg.contains("list"));
    assert!(msg.contains("block"));
}

#[test]
fn error_io_is_not_a_load_error() {
    let err = Error::io("could not write to file 'x'");
    assert!(!err.is_load_error());
    assert!(err.to_string().contains("could not write"));
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn display_includes_path_and_position() {
    let err = Error::schema("unrecognized key 'baronies' in region 'r'")
        .at(4, 2)
        .in_source("map/geographical_region.txt");
    assert_eq!(
        err.to_string(),
        "schema error: unrecognized key 'baronies' in region 'r' (at map/geographical_region.txt:4:2)"
    );
}

#[test]
fn display_with_source_only() {
    let err = Error::io("boom").with_context(ErrorContext::new().with_source("a.txt"));
    assert_eq!(err.to_string(), "io error: boom (at a.txt)");
}

#[test]
fn empty_context_is_not_displayed() {
    let err = Error::lex("bad").with_context(ErrorContext::new());
    assert_eq!(err.to_string(), "lex error: bad");
}

#[test]
fn error_is_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    takes_error(&Error::lex("x"));
}
