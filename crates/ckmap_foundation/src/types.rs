//! Value shape tags for type-checked extraction.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The shape of a parsed value.
///
/// Used by accessors to report what was requested versus what was found.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Type {
    /// 64-bit signed integer.
    Integer,
    /// Text, quoted or bare.
    String,
    /// Ordered sequence of scalars inside braces.
    List,
    /// Ordered sequence of `key = value` statements inside braces.
    Block,
}

impl Type {
    /// Returns true if this is a scalar shape (integer or string).
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        matches!(self, Self::Integer | Self::String)
    }

    /// Returns true if this is a brace-delimited aggregate (list or block).
    #[must_use]
    pub const fn is_aggregate(self) -> bool {
        matches!(self, Self::List | Self::Block)
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::String => write!(f, "string"),
            Self::List => write!(f, "list"),
            Self::Block => write!(f, "block"),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
