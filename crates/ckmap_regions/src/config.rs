//! Configuration for writing region files.

/// Options for [`RegionFile::write`](crate::RegionFile::write).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Write to a temporary file in the destination directory and rename it
    /// into place, so a failed write leaves any existing file untouched.
    pub atomic: bool,
}

impl WriterConfig {
    /// Creates a configuration with atomic replacement enabled.
    #[must_use]
    pub const fn atomic() -> Self {
        Self { atomic: true }
    }

    /// Builder method to set atomic replacement.
    #[must_use]
    pub const fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }
}
