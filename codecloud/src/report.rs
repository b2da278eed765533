// src/report.rs
use std::io::{self, Write};

use crate::models::{FrequencyTable, ScanStats};

/// Traversal counters, followed by a blank line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_scan_stats(out: &mut dyn Write, stats: &ScanStats) -> io::Result<()> {
    writeln!(out, "Files processed: {}", stats.files_processed)?;
    writeln!(out, "Files skipped: {}", stats.files_skipped)?;
    writeln!(out, "Directories pruned: {}", stats.dirs_pruned)?;
    writeln!(out)
}

/// Word totals before and after stopword filtering, then the `top` most
/// common remaining words.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_word_summary(
    out: &mut dyn Write,
    all_words: &FrequencyTable,
    filtered: &FrequencyTable,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "Total words found: {}", all_words.total())?;
    writeln!(out, "Unique words: {}", all_words.len())?;
    writeln!(out, "After filtering stopwords: {} unique words", filtered.len())?;
    writeln!(out)?;
    writeln!(out, "Top {top} most common words:")?;
    for (word, count) in filtered.top(top) {
        writeln!(out, "  {word}: {count}")?;
    }
    Ok(())
}

/// Every language with its file count and share of all analysed files.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
#[inline]
pub fn write_language_summary(out: &mut dyn Write, languages: &FrequencyTable) -> io::Result<()> {
    writeln!(out, "Total files analyzed: {}", languages.total())?;
    writeln!(out, "Languages found: {}", languages.len())?;
    writeln!(out)?;
    writeln!(out, "Language distribution:")?;
    for (language, count) in languages.ranked() {
        writeln!(
            out,
            "  {language:20}: {count:5} files ({:5.1}%)",
            languages.percentage(language)
        )?;
    }
    Ok(())
}
