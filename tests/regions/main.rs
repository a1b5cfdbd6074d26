//! Integration tests for Layer 2: Regions
//!
//! Tests for building regions, cascading deletion, and writing.

mod cascade;
mod writer;
