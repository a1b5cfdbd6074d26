//! Region hierarchy loading, cascading deletion, and writing.
//!
//! This crate provides:
//! - [`Region`] - A named grouping of sub-regions, duchies, counties and provinces
//! - [`RegionFile`] - The regions of one file, with cascading delete operations
//! - [`write_regions`] - Serialization back to the ck2 text format
//! - [`WriterConfig`] - Output options

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod region;
pub mod region_file;
pub mod writer;

pub use config::WriterConfig;
pub use region::{Region, RegionField};
pub use region_file::{RegionFile, build_regions};
pub use writer::{HEADER, to_text, write_regions};
