//! Integration tests for Layer 1: Language
//!
//! Tests for lexer, parser, and document model.

mod lexer;
