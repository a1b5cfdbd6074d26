//! Token types for the ck2 text format.
//!
//! Tokens are the output of the lexer and input to the parser. Comments and
//! whitespace never become tokens.

use crate::span::Span;

/// A token from lexical analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// The type and value of this token.
    pub kind: TokenKind,
    /// Source location of this token.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if this token can stand alone as a value or a key.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        self.kind.is_scalar()
    }
}

/// Token types for the ck2 text format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    /// Bare word like `e_britannia`, `yes`, or `1066.1.1`
    Word(String),
    /// Quoted string like `"Kingdom of England"` (quotes removed)
    String(String),
    /// Integer literal like `42` or `-17`
    Int(i64),
    /// `=`
    Equals,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true for bare words, quoted strings and integers.
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Self::Word(_) | Self::String(_) | Self::Int(_))
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Word(_) => "word",
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Equals => "'='",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::Eof => "end of input",
        }
    }

    /// Describes this token for error messages, including its text when short.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Word(w) => format!("word '{w}'"),
            Self::String(s) => format!("string \"{s}\""),
            Self::Int(n) => format!("integer {n}"),
            other => other.name().to_string(),
        }
    }
}
