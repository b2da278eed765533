// tests/integration_tests/word_cloud_test.rs
use super::common::{RecordingRenderer, create_exclude_file, create_test_file, setup_workspace};
use anyhow::Result;
use codecloud::core::stopwords::{CorpusFetcher, LexiconError};
use codecloud::{
    Config, ExcludePatterns, FixedStopwords, NltkStopwords, StopwordFilter, collect_words,
    load_exclude_patterns, run_word_cloud,
};
use std::cell::Cell;
use std::io::{Cursor, Write as _};
use std::rc::Rc;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

struct CountingFetcher {
    archive: Vec<u8>,
    calls: Rc<Cell<u32>>,
}

impl CorpusFetcher for CountingFetcher {
    fn fetch(&self) -> Result<Vec<u8>, LexiconError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.archive.clone())
    }
}

fn stopwords_archive(words: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file("stopwords/english", SimpleFileOptions::default())?;
    writer.write_all(words.as_bytes())?;
    Ok(writer.finish()?.into_inner())
}

#[test]
fn test_word_pipeline_reports_and_renders() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "README.md", "The parser and the lexer")?;
    create_test_file(&ws.base_dir, "src/lexer.rs", "fn lexer() -> Token { Token::new() }")?;
    create_test_file(&ws.base_dir, "assets/logo.png", "binary")?;
    let renderer = RecordingRenderer::default();
    let mut out = Vec::new();

    let filtered = run_word_cloud(
        &ws,
        &ExcludePatterns::new(),
        &Config::default(),
        &FixedStopwords::new(["the", "and"]),
        &renderer,
        &mut out,
    )?;

    assert_eq!(filtered.get("token"), 2);
    assert_eq!(filtered.get("lexer"), 2);
    assert!(!filtered.contains("the"));

    let calls = renderer.calls.into_inner();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, ws.tool_dir.join("images/wordcloud.png"));
    assert_eq!(calls[0].1, filtered);

    let text = String::from_utf8(out)?;
    assert!(text.starts_with("Collecting words from files...\nFiles processed: 2\n"));
    assert!(text.contains("Total words found: 10\n"));
    assert!(text.contains("Unique words: 7\n"));
    assert!(text.contains("After filtering stopwords: 5 unique words\n"));
    assert!(text.contains("Top 50 most common words:\n  lexer: 2\n  token: 2\n  fn: 1\n"));
    Ok(())
}

#[test]
fn test_configured_top_limits_listing() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "notes.txt", "alpha alpha beta gamma")?;
    let config = Config {
        top: 1,
        ..Config::default()
    };
    let mut out = Vec::new();

    run_word_cloud(
        &ws,
        &ExcludePatterns::new(),
        &config,
        &FixedStopwords::default(),
        &RecordingRenderer::default(),
        &mut out,
    )?;

    let text = String::from_utf8(out)?;
    assert!(text.contains("Top 1 most common words:\n  alpha: 2\n\n"));
    assert!(!text.contains("  beta: 1"));
    Ok(())
}

#[test]
fn test_word_extraction_is_idempotent() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(&ws.tool_dir, &["build"])?;
    create_test_file(&ws.base_dir, "a.py", "import os\nos.path.join(a, b)")?;
    create_test_file(&ws.base_dir, "b/c.js", "const snake_case_name = 1;")?;
    create_test_file(&ws.base_dir, "build/out.js", "minified")?;
    let patterns = load_exclude_patterns(&ws.exclude_file())?;

    let first = collect_words(&ws.base_dir, &patterns);
    let second = collect_words(&ws.base_dir, &patterns);

    assert_eq!(first.frequencies(), second.frequencies());
    assert_eq!(first.stats, second.stats);
    assert!(!first.frequencies().contains("minified"));
    Ok(())
}

#[test]
fn test_stopwords_are_fetched_once_and_installed() -> Result<()> {
    let (root, ws) = setup_workspace()?;
    let data_dir = root.path().join("nltk_data");
    let calls = Rc::new(Cell::new(0));
    let fetcher = CountingFetcher {
        archive: stopwords_archive("the\nof\n")?,
        calls: Rc::clone(&calls),
    };
    let source = NltkStopwords::new(vec![data_dir.clone()])
        .with_fetcher(fetcher, Some(data_dir.clone()));
    create_test_file(&ws.base_dir, "doc.md", "the shape of the tree")?;

    let filter = StopwordFilter::load(&source, false);
    let again = StopwordFilter::load(&source, false);
    let table = collect_words(&ws.base_dir, &ExcludePatterns::new()).frequencies();

    assert_eq!(calls.get(), 1);
    assert_eq!(filter.len(), 2);
    assert_eq!(again.len(), 2);
    assert!(data_dir.join("corpora/stopwords/english").is_file());
    let filtered = filter.apply(&table);
    assert_eq!(filtered.len(), 2);
    assert_eq!(filtered.get("shape"), 1);
    assert_eq!(filtered.get("tree"), 1);
    Ok(())
}

#[test]
fn test_missing_stopwords_offline_keeps_every_word() -> Result<()> {
    let (root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "doc.md", "the shape of the tree")?;
    let source = NltkStopwords::new(vec![root.path().join("empty_nltk_data")]);
    let mut out = Vec::new();

    let filtered = run_word_cloud(
        &ws,
        &ExcludePatterns::new(),
        &Config::default(),
        &source,
        &RecordingRenderer::default(),
        &mut out,
    )?;

    assert_eq!(filtered.get("the"), 2);
    assert_eq!(filtered.len(), 4);
    Ok(())
}

#[test]
fn test_stopword_download_is_announced_on_stdout() -> Result<()> {
    let (root, ws) = setup_workspace()?;
    let data_dir = root.path().join("nltk_data");
    let calls = Rc::new(Cell::new(0));
    let fetcher = CountingFetcher {
        archive: stopwords_archive("the\n")?,
        calls: Rc::clone(&calls),
    };
    let source = NltkStopwords::new(vec![data_dir.clone()]).with_fetcher(fetcher, Some(data_dir));
    create_test_file(&ws.base_dir, "doc.md", "the tree")?;

    let mut first = Vec::new();
    run_word_cloud(
        &ws,
        &ExcludePatterns::new(),
        &Config::default(),
        &source,
        &RecordingRenderer::default(),
        &mut first,
    )?;
    let mut second = Vec::new();
    run_word_cloud(
        &ws,
        &ExcludePatterns::new(),
        &Config::default(),
        &source,
        &RecordingRenderer::default(),
        &mut second,
    )?;

    assert_eq!(calls.get(), 1);
    assert!(String::from_utf8(first)?.contains("Downloading NLTK stopwords data...\n"));
    assert!(!String::from_utf8(second)?.contains("Downloading"));
    Ok(())
}
