//! Parser limits.

/// Bounds on the resources a single parse may consume.
///
/// Nesting depth is bounded because the parser is recursive descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum nesting depth of braces (default: 256).
    pub max_depth: usize,
    /// Maximum input size in bytes (default: 64 MiB).
    pub max_file_size: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_depth: 256,
            max_file_size: 64 * 1024 * 1024,
        }
    }
}

impl Limits {
    /// Creates limits with no restrictions.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            max_file_size: usize::MAX,
        }
    }

    /// Builder method to set the maximum nesting depth.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Builder method to set the maximum input size.
    #[must_use]
    pub const fn with_max_file_size(mut self, max_file_size: usize) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}
