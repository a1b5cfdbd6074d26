//! Core types for ckmap.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with path and location context
//! - [`Type`] - Value shape tags used by type-checked accessors
//! - [`Tier`] - Title hierarchy tiers encoded in title name prefixes

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod title;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use title::{Tier, expect_tier, title_tier};
pub use types::Type;
