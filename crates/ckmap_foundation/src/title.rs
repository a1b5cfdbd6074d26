//! Title tiers.
//!
//! Landed titles encode their tier in a one-letter prefix followed by an
//! underscore: `b_` barony, `c_` county, `d_` duchy, `k_` kingdom, `e_` empire.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A level in the landed-title hierarchy, lowest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tier {
    /// `b_` titles.
    Barony,
    /// `c_` titles.
    County,
    /// `d_` titles.
    Duchy,
    /// `k_` titles.
    Kingdom,
    /// `e_` titles.
    Empire,
}

impl Tier {
    /// Returns the tier denoted by a prefix letter.
    #[must_use]
    pub const fn from_prefix(c: u8) -> Option<Self> {
        match c {
            b'b' => Some(Self::Barony),
            b'c' => Some(Self::County),
            b'd' => Some(Self::Duchy),
            b'k' => Some(Self::Kingdom),
            b'e' => Some(Self::Empire),
            _ => None,
        }
    }

    /// Returns the prefix letter for this tier.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Barony => 'b',
            Self::County => 'c',
            Self::Duchy => 'd',
            Self::Kingdom => 'k',
            Self::Empire => 'e',
        }
    }

    /// Returns a human-readable name for this tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Barony => "barony",
            Self::County => "county",
            Self::Duchy => "duchy",
            Self::Kingdom => "kingdom",
            Self::Empire => "empire",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the tier encoded in a title name, or `None` if the name does not
/// follow the `<letter>_<rest>` convention.
#[must_use]
pub fn title_tier(title: &str) -> Option<Tier> {
    match title.as_bytes() {
        [c, b'_', _, ..] => Tier::from_prefix(*c),
        _ => None,
    }
}

/// Checks that `title` belongs to `tier`, returning it unchanged.
///
/// # Errors
/// Returns a tier mismatch error if the prefix is missing or denotes another tier.
pub fn expect_tier(title: &str, tier: Tier) -> Result<&str> {
    match title_tier(title) {
        Some(actual) if actual == tier => Ok(title),
        actual => Err(Error::tier_mismatch(title, tier, actual)),
    }
}
