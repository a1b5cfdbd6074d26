//! ckmap - Crusader Kings II map data tooling
//!
//! This crate re-exports all layers of the ckmap system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: ckmap_regions     Region hierarchy, cascading deletion, writer
//!          ckmap_map         default.map loader, province-id predicates
//! Layer 1: ckmap_language    Lexer, parser, document model
//! Layer 0: ckmap_foundation  Core types (Error, Type, title tiers)
//! ```

pub use ckmap_foundation as foundation;
pub use ckmap_language as language;
pub use ckmap_map as map;
pub use ckmap_regions as regions;
