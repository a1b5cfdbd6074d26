//! The parsed document tree.
//!
//! A [`Document`] is the root block of a file: an ordered list of
//! [`Statement`]s. Values are accessed through type-checked accessors that
//! fail with a type mismatch instead of guessing.

use std::fmt;
use std::path::Path;

use ckmap_foundation::{Error, Result, Tier, Type, expect_tier};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::limits::Limits;
use crate::parser::parse_with_limits;
use crate::span::Span;

/// A parsed value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    /// Integer literal like `42`
    Integer(i64),
    /// Bare word or quoted string
    String(String),
    /// `{ a b c }`, scalars only. Element kinds are not checked by the parser.
    List(Vec<Value>),
    /// `{ k = v ... }`
    Block(Vec<Statement>),
}

impl Value {
    /// Returns the shape of this value.
    #[must_use]
    pub const fn value_type(&self) -> Type {
        match self {
            Self::Integer(_) => Type::Integer,
            Self::String(_) => Type::String,
            Self::List(_) => Type::List,
            Self::Block(_) => Type::Block,
        }
    }

    /// Returns true if this is an integer.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(_))
    }

    /// Returns true if this is a string.
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Self::String(_))
    }

    /// Returns true if this is a list.
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns true if this is a block.
    #[must_use]
    pub const fn is_block(&self) -> bool {
        matches!(self, Self::Block(_))
    }

    /// Extracts an integer.
    ///
    /// # Errors
    /// Returns a type mismatch if this is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            other => Err(Error::type_mismatch(Type::Integer, other.value_type())),
        }
    }

    /// Extracts a string.
    ///
    /// # Errors
    /// Returns a type mismatch if this is not a string.
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Self::String(s) => Ok(s),
            other => Err(Error::type_mismatch(Type::String, other.value_type())),
        }
    }

    /// Extracts the elements of a list.
    ///
    /// # Errors
    /// Returns a type mismatch if this is not a list.
    pub fn as_list(&self) -> Result<&[Value]> {
        match self {
            Self::List(items) => Ok(items),
            other => Err(Error::type_mismatch(Type::List, other.value_type())),
        }
    }

    /// Extracts the statements of a block.
    ///
    /// `{ }` parses as an empty list and is accepted here as an empty block.
    ///
    /// # Errors
    /// Returns a type mismatch if this is not a block.
    pub fn as_block(&self) -> Result<&[Statement]> {
        match self {
            Self::Block(statements) => Ok(statements),
            Self::List(items) if items.is_empty() => Ok(&[]),
            other => Err(Error::type_mismatch(Type::Block, other.value_type())),
        }
    }

    /// Extracts a string and checks that it names a title of `tier`.
    ///
    /// # Errors
    /// Returns a type mismatch if this is not a string, or a tier mismatch if
    /// its prefix denotes another tier.
    pub fn as_title(&self, tier: Tier) -> Result<&str> {
        expect_tier(self.as_string()?, tier)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
            Self::List(items) => {
                write!(f, "{{")?;
                for item in items {
                    write!(f, " {item}")?;
                }
                write!(f, " }}")
            }
            Self::Block(statements) => {
                write!(f, "{{")?;
                for statement in statements {
                    write!(f, " {} = {}", statement.key, statement.value)?;
                }
                write!(f, " }}")
            }
        }
    }
}

/// A `key = value` pair. The key is always a string or an integer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Statement {
    /// The key, a scalar.
    pub key: Value,
    /// The value.
    pub value: Value,
    /// Where the key starts in the source.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub span: Span,
}

impl Statement {
    /// Creates a new statement.
    #[must_use]
    pub const fn new(key: Value, value: Value, span: Span) -> Self {
        Self { key, value, span }
    }

    /// Returns true if the key is a string equal to `name`.
    #[must_use]
    pub fn key_eq(&self, name: &str) -> bool {
        matches!(&self.key, Value::String(key) if key == name)
    }

    /// Extracts the key as a string.
    ///
    /// # Errors
    /// Returns a type mismatch if the key is an integer.
    pub fn key_str(&self) -> Result<&str> {
        self.key.as_string()
    }

    /// Attaches this statement's position to an error.
    #[must_use]
    pub fn locate(&self, err: Error) -> Error {
        err.at(self.span.line, self.span.column)
    }
}

/// A parsed file: the root block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    statements: Vec<Statement>,
    source: Option<String>,
}

impl Document {
    /// Creates a document from its root statements.
    #[must_use]
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements,
            source: None,
        }
    }

    /// Reads and parses a file with default limits.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a load error
    /// (qualified with the path) if it cannot be decoded or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with_limits(path, Limits::default())
    }

    /// Reads and parses a file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, or a load error
    /// (qualified with the path) if it cannot be decoded, parsed, or exceeds
    /// `limits`.
    pub fn load_with_limits(path: impl AsRef<Path>, limits: Limits) -> Result<Self> {
        let path = path.as_ref();
        let shown = path.display().to_string();

        let bytes = std::fs::read(path)
            .map_err(|e| Error::io(format!("failed to read file '{shown}': {e}")))?;
        let text = decode(&bytes).map_err(|e| e.in_source(shown.clone()))?;

        let mut document =
            parse_with_limits(text, limits).map_err(|e| e.in_source(shown.clone()))?;
        tracing::debug!(
            path = %shown,
            statements = document.len(),
            "parsed document"
        );
        document.source = Some(shown);
        Ok(document)
    }

    /// Returns the path this document was loaded from, if any.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Returns the root statements in source order.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Iterates over the root statements.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Returns the value of the first root statement whose key is `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.statements
            .iter()
            .find(|s| s.key_eq(key))
            .map(|s| &s.value)
    }

    /// Returns the number of root statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Returns true if there are no root statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Qualifies an error raised while interpreting this document with its path.
    #[must_use]
    pub fn qualify(&self, err: Error) -> Error {
        match &self.source {
            Some(source) => err.in_source(source.clone()),
            None => err,
        }
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl std::str::FromStr for Document {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        crate::parser::parse(source)
    }
}

/// Decodes file contents as UTF-8, reporting where the first bad byte is.
fn decode(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let valid = &bytes[..e.valid_up_to()];
        let line_start = valid.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        let line = valid.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = valid.len() - line_start + 1;
        Error::lex("invalid UTF-8 in input").at(
            u32::try_from(line).unwrap_or(u32::MAX),
            u32::try_from(column).unwrap_or(u32::MAX),
        )
    })
}
