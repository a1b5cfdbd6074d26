//! Cross-layer integration tests for ckmap
//!
//! Tests that load, edit and write region files end to end.
