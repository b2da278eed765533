// src/core/scanner/walker.rs
use log::{debug, warn};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::exclude::ExcludePatterns;
use crate::models::ScanStats;

/// Depth-first traversal of a base directory that honours exclusion patterns.
///
/// Excluded directories are pruned before they are read, so nothing beneath
/// them is ever visited. Excluded files are counted as skipped. Patterns are
/// matched against paths relative to the base directory.
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'a> {
    base_dir: &'a Path,
    patterns: &'a ExcludePatterns,
}

impl<'a> TreeWalker<'a> {
    #[inline]
    #[must_use]
    pub const fn new(base_dir: &'a Path, patterns: &'a ExcludePatterns) -> Self {
        Self { base_dir, patterns }
    }

    /// Calls `visit` for every file that survives the exclusion patterns.
    ///
    /// `visit` returns whether it handled the file; handled files are counted
    /// in [`ScanStats::files_processed`]. Traversal errors are logged and the
    /// walk carries on.
    #[inline]
    pub fn walk<F>(&self, mut visit: F) -> ScanStats
    where
        F: FnMut(&Path) -> bool,
    {
        let mut stats = ScanStats::new();
        let mut dirs_pruned: u64 = 0;

        let entries = WalkDir::new(self.base_dir)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let pruned = self.should_prune(entry);
                if pruned {
                    debug!("Pruning {}", entry.path().display());
                    dirs_pruned = dirs_pruned.saturating_add(1);
                }
                !pruned
            });

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let location = err
                        .path()
                        .map_or_else(|| self.base_dir.display().to_string(), |p| p.display().to_string());
                    warn!("Could not read {location}: {err}");
                    continue;
                }
            };
            if is_directory(&entry) {
                continue;
            }

            if self.is_excluded(entry.path()) {
                stats.files_skipped = stats.files_skipped.saturating_add(1);
                continue;
            }

            if visit(entry.path()) {
                stats.files_processed = stats.files_processed.saturating_add(1);
            }
        }

        stats.dirs_pruned = dirs_pruned;
        stats
    }

    fn should_prune(&self, entry: &DirEntry) -> bool {
        entry.depth() > 0 && is_directory(entry) && self.is_excluded(entry.path())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(self.base_dir).unwrap_or(path);
        self.patterns.matches(relative)
    }
}

/// Real directories and symlinks to directories. Links are never followed,
/// but a linked directory is still a directory, not a file.
fn is_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir())
}
