//! Error types for ckmap.
//!
//! Uses `thiserror` for the error kinds. Every load-time error can carry an
//! [`ErrorContext`] naming the file and position it came from.

use std::fmt;

use thiserror::Error;

use crate::title::Tier;
use crate::types::Type;

/// Result alias used throughout ckmap.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for ckmap operations.
#[derive(Debug)]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the position of this error, keeping any source already set.
    #[must_use]
    pub fn at(mut self, line: u32, column: u32) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_position(line, column));
        self
    }

    /// Records the file this error came from, keeping any position already set.
    #[must_use]
    pub fn in_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a lexical error.
    #[must_use]
    pub fn lex(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lex(message.into()))
    }

    /// Creates a parse error describing what was expected and what was found.
    #[must_use]
    pub fn parse(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse {
            expected: expected.into(),
            found: found.into(),
        })
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a schema error.
    #[must_use]
    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Schema(message.into()))
    }

    /// Creates a title tier mismatch error.
    #[must_use]
    pub fn tier_mismatch(title: impl Into<String>, expected: Tier, actual: Option<Tier>) -> Self {
        Self::new(ErrorKind::TierMismatch {
            title: title.into(),
            expected,
            actual,
        })
    }

    /// Creates a limit exceeded error.
    #[must_use]
    pub fn limit_exceeded(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LimitExceeded(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Returns true if this error was raised while loading input
    /// (lexing, parsing, type or schema checking).
    #[must_use]
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Lex(_)
                | ErrorKind::Parse { .. }
                | ErrorKind::TypeMismatch { .. }
                | ErrorKind::Schema(_)
                | ErrorKind::TierMismatch { .. }
                | ErrorKind::LimitExceeded(_)
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        match &self.context {
            Some(context) if !context.is_empty() => write!(f, " ({context})"),
            _ => Ok(()),
        }
    }
}

impl std::error::Error for Error {}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed input at the character level.
    #[error("lex error: {0}")]
    Lex(String),

    /// Token sequence does not fit the grammar.
    #[error("parse error: expected {expected}, found {found}")]
    Parse {
        /// What the grammar required at this point.
        expected: String,
        /// What was actually there.
        found: String,
    },

    /// A value had a different shape than the one requested.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The requested shape.
        expected: Type,
        /// The actual shape.
        actual: Type,
    },

    /// Well-formed input that does not describe the expected structure.
    #[error("schema error: {0}")]
    Schema(String),

    /// A title name does not carry the expected tier prefix.
    #[error("title '{title}' is not a {expected} title{}", describe_tier(.actual))]
    TierMismatch {
        /// The offending title.
        title: String,
        /// The required tier.
        expected: Tier,
        /// The tier the prefix denotes, if any.
        actual: Option<Tier>,
    },

    /// A configured parser limit was exceeded.
    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),
}

fn describe_tier(tier: &Option<Tier>) -> String {
    match tier {
        Some(tier) => format!(" (it is a {tier} title)"),
        None => String::new(),
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Source file path.
    pub source: Option<String>,
    /// Line number in source (1-based).
    pub line: Option<u32>,
    /// Column number in source (1-based).
    pub column: Option<u32>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: u32, column: u32) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Returns true if no location information is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.source.is_none() && self.line.is_none()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at ")?;
        if let Some(source) = &self.source {
            write!(f, "{source}")?;
            if self.line.is_some() {
                write!(f, ":")?;
            }
        }
        match (self.line, self.column) {
            (Some(line), Some(col)) => write!(f, "{line}:{col}"),
            (Some(line), None) => write!(f, "{line}"),
            _ => Ok(()),
        }
    }
}
