// src/core/scanner/language.rs
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::core::exclude::ExcludePatterns;
use crate::core::languages::language_for_path;
use crate::core::scanner::walker::TreeWalker;
use crate::models::{FrequencyTable, ScanStats};

/// Language distribution of the files under a base directory.
#[derive(Debug, Default)]
pub struct LanguageScan {
    pub counts: FrequencyTable,
    /// Paths grouped by language label, in traversal order.
    pub files_by_language: BTreeMap<&'static str, Vec<PathBuf>>,
    pub stats: ScanStats,
}

/// Counts files per language. Files with an unrecognised extension are
/// neither processed nor skipped.
#[inline]
#[must_use]
pub fn collect_languages(base_dir: &Path, patterns: &ExcludePatterns) -> LanguageScan {
    let mut counts = FrequencyTable::new();
    let mut files_by_language: BTreeMap<&'static str, Vec<PathBuf>> = BTreeMap::new();

    let stats = TreeWalker::new(base_dir, patterns).walk(|path| {
        let Some(language) = language_for_path(path) else {
            return false;
        };
        counts.increment(language);
        files_by_language
            .entry(language)
            .or_default()
            .push(path.to_path_buf());
        true
    });

    LanguageScan {
        counts,
        files_by_language,
        stats,
    }
}
