// src/core/exclude/loader.rs
use crate::core::exclude::ExcludePatterns;
use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

/// Loads exclusion patterns from a plain-text file, one glob per line.
///
/// A missing file means "no exclusions" and yields an empty pattern set.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
#[inline]
pub fn load_exclude_patterns(exclude_file: &Path) -> Result<ExcludePatterns> {
    if !exclude_file.exists() {
        return Ok(ExcludePatterns::new());
    }

    let content = fs::read_to_string(exclude_file).with_context(|| {
        format!(
            "Failed to read exclusion file: {}",
            exclude_file.display()
        )
    })?;

    Ok(content.lines().collect())
}
