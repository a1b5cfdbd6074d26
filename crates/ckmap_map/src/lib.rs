//! Map metadata for ckmap.
//!
//! This crate provides:
//! - [`ProvinceMap`] - Province-id validity and sea-zone membership
//! - [`DefaultMap`] - The `map/default.map` file of a game or mod directory

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod default_map;

pub use default_map::{DefaultMap, ProvinceMap};
