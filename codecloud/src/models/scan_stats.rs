// src/models/scan_stats.rs

/// Counters produced by one traversal of the base directory.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanStats {
    /// Files handed to an extractor and successfully handled by it.
    pub files_processed: u64,
    /// Files dropped because they matched an exclusion pattern.
    pub files_skipped: u64,
    /// Directories that were never descended into.
    pub dirs_pruned: u64,
}

impl ScanStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            files_processed: 0,
            files_skipped: 0,
            dirs_pruned: 0,
        }
    }
}
