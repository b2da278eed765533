// src/pipeline.rs
use anyhow::Result;
use log::{info, warn};
use std::io::Write;
use std::path::Path;

use crate::config::Config;
use crate::core::exclude::ExcludePatterns;
use crate::core::scanner::{LanguageScan, collect_languages, collect_words};
use crate::core::stopwords::{StopwordFilter, StopwordSource};
use crate::models::FrequencyTable;
use crate::render::{CloudSettings, RenderError, Renderer};
use crate::report::{write_language_summary, write_scan_stats, write_word_summary};
use crate::workspace::Workspace;

const WORD_TITLE: &str = "Wordcloud";
const LANGUAGE_TITLE: &str = "Language wordcloud";

/// Collects words under the base directory, drops stopwords, reports the
/// most common ones and renders the word cloud.
///
/// Returns the filtered table.
///
/// # Errors
///
/// Returns an error only if writing the report to `out` fails; missing
/// stopword data and render failures are reported and tolerated.
#[inline]
pub fn run_word_cloud(
    workspace: &Workspace,
    patterns: &ExcludePatterns,
    config: &Config,
    source: &dyn StopwordSource,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<FrequencyTable> {
    writeln!(out, "Collecting words from files...")?;
    let scan = collect_words(&workspace.base_dir, patterns);
    write_scan_stats(out, &scan.stats)?;

    let all_words = scan.frequencies();
    if source.needs_download() {
        writeln!(out, "Downloading NLTK stopwords data...")?;
    }
    let filter = StopwordFilter::load(source, config.stopwords.programming_keywords);
    info!("Filtering with {} stopwords", filter.len());
    let filtered = filter.apply(&all_words);

    write_word_summary(out, &all_words, &filtered, config.top)?;
    render_cloud(
        out,
        renderer,
        &filtered,
        &config.words,
        &workspace.output(&config.words.output),
        WORD_TITLE,
    )?;
    Ok(filtered)
}

/// Counts files per language under the base directory, reports the
/// distribution and renders the language cloud.
///
/// # Errors
///
/// Returns an error only if writing the report to `out` fails.
#[inline]
pub fn run_language_cloud(
    workspace: &Workspace,
    patterns: &ExcludePatterns,
    config: &Config,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<LanguageScan> {
    writeln!(out, "Analyzing programming languages used...")?;
    let scan = collect_languages(&workspace.base_dir, patterns);
    write_scan_stats(out, &scan.stats)?;

    write_language_summary(out, &scan.counts)?;
    render_cloud(
        out,
        renderer,
        &scan.counts,
        &config.languages,
        &workspace.output(&config.languages.output),
        LANGUAGE_TITLE,
    )?;
    Ok(scan)
}

/// Renders `table` and reports the outcome on `out`.
fn render_cloud(
    out: &mut dyn Write,
    renderer: &dyn Renderer,
    table: &FrequencyTable,
    settings: &CloudSettings,
    output: &Path,
    title: &str,
) -> Result<()> {
    writeln!(out)?;
    if table.is_empty() {
        writeln!(out, "Nothing to render for {title}")?;
        return Ok(());
    }

    match renderer.render(table, settings, output) {
        Ok(()) => {
            writeln!(out, "✓ {title} saved to {}", output.display())?;
        }
        Err(RenderError::Unavailable(reason)) => {
            info!("Skipping {title}: {reason}");
            writeln!(out, "⚠ {title} not rendered: {reason}")?;
        }
        Err(err) => {
            warn!("Failed to render {}: {err}", output.display());
            writeln!(out, "⚠ Could not save {title}: {err}")?;
        }
    }
    Ok(())
}
