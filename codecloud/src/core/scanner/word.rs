// src/core/scanner/word.rs
use log::warn;
use std::fs;
use std::path::Path;

use crate::core::exclude::ExcludePatterns;
use crate::core::scanner::walker::TreeWalker;
use crate::models::{FrequencyTable, ScanStats};

/// File name suffixes whose contents are tokenized. Matching is case-sensitive.
pub const TEXT_EXTENSIONS: &[&str] = &[
    ".py", ".js", ".ts", ".tsx", ".jsx", ".java", ".go", ".cs", ".cpp", ".c", ".h", ".md",
    ".txt", ".html", ".css", ".json", ".yaml", ".yml", ".sh", ".rs", ".rb", ".php", ".scala",
    ".kt",
];

/// Words gathered from every text file under a base directory.
#[derive(Debug, Default)]
pub struct WordScan {
    /// Every word in traversal order, duplicates included.
    pub words: Vec<String>,
    pub stats: ScanStats,
}

impl WordScan {
    #[inline]
    #[must_use]
    pub fn frequencies(&self) -> FrequencyTable {
        self.words.iter().collect()
    }
}

#[inline]
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| {
        let name = name.as_encoded_bytes();
        TEXT_EXTENSIONS
            .iter()
            .any(|ext| name.ends_with(ext.as_bytes()))
    })
}

/// Lowercases `content` and returns every maximal run of ASCII letters that
/// is at least two characters long.
#[inline]
#[must_use]
pub fn extract_words(content: &str) -> Vec<String> {
    content
        .to_lowercase()
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|word| word.len() >= 2)
        .map(str::to_owned)
        .collect()
}

/// Decodes UTF-8, dropping any invalid byte sequences.
#[inline]
#[must_use]
pub fn decode_permissive(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Tokenizes every text file under `base_dir` that the patterns keep.
///
/// Unreadable files are logged and left out of the processed count.
#[inline]
#[must_use]
pub fn collect_words(base_dir: &Path, patterns: &ExcludePatterns) -> WordScan {
    let mut words = Vec::new();

    let stats = TreeWalker::new(base_dir, patterns).walk(|path| {
        if !is_text_file(path) {
            return false;
        }
        match fs::read(path) {
            Ok(bytes) => {
                words.extend(extract_words(&decode_permissive(&bytes)));
                true
            }
            Err(err) => {
                warn!("Could not read {}: {err}", path.display());
                false
            }
        }
    });

    WordScan { words, stats }
}
