//! Lexer, parser, and document model for the ck2 text format.
//!
//! This crate provides:
//! - [`Lexer`] - Tokenization of ck2 text
//! - [`Parser`] - Recursive descent into a typed [`Document`]
//! - [`Value`] / [`Statement`] - The document tree with type-checked accessors
//! - [`Limits`] - Bounds on input size and nesting depth

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod document;
pub mod lexer;
pub mod limits;
pub mod parser;
pub mod span;
pub mod token;


pub use document::{Document, Statement, Value};
pub use lexer::{Lexer, is_bare_word};
pub use limits::Limits;
pub use parser::{Parser, parse, parse_with_limits};
pub use span::Span;
pub use token::{Token, TokenKind};
