//! Integration tests for Layer 0: Foundation
//!
//! Tests for errors, type tags, and title tiers.

mod errors;
mod titles;
