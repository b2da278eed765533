// tests/integration_tests/scenarios_test.rs
use super::common::{RecordingRenderer, create_exclude_file, create_test_file, setup_workspace};
use anyhow::Result;
use codecloud::{
    Config, ExcludePatterns, FixedStopwords, FrequencyTable, StopwordFilter, collect_languages,
    collect_words, load_exclude_patterns, run_language_cloud, run_word_cloud,
};

#[test]
fn test_single_python_file() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "a.py", "def foo(): return foo")?;

    let scan = collect_words(&ws.base_dir, &ExcludePatterns::new());

    assert_eq!(scan.words, vec!["def", "foo", "return", "foo"]);
    let mut expected = FrequencyTable::new();
    expected.add("def", 1);
    expected.add("foo", 2);
    expected.add("return", 1);
    assert_eq!(scan.frequencies(), expected);

    let filter = StopwordFilter::load(&FixedStopwords::new(["the", "a", "of"]), false);
    assert_eq!(filter.apply(&scan.frequencies()), expected);
    Ok(())
}

#[test]
fn test_unknown_extension_is_not_counted() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "x.go", "package x")?;
    create_test_file(&ws.base_dir, "y.rs", "mod y;")?;
    create_test_file(&ws.base_dir, "z.unknown", "???")?;

    let scan = collect_languages(&ws.base_dir, &ExcludePatterns::new());

    let mut expected = FrequencyTable::new();
    expected.add("Go", 1);
    expected.add("Rust", 1);
    assert_eq!(scan.counts, expected);
    assert_eq!(scan.stats.files_processed, 2);
    assert_eq!(scan.stats.files_skipped, 0);
    Ok(())
}

#[test]
fn test_node_modules_is_pruned() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(&ws.tool_dir, &["node_modules", "node_modules/lib.js"])?;
    create_test_file(&ws.base_dir, "node_modules/lib.js", "module.exports = lib")?;
    create_test_file(&ws.base_dir, "app.js", "require lib")?;
    let patterns = load_exclude_patterns(&ws.exclude_file())?;

    let words = collect_words(&ws.base_dir, &patterns);
    let languages = collect_languages(&ws.base_dir, &patterns);

    assert_eq!(patterns.len(), 2);
    for stats in [words.stats, languages.stats] {
        assert_eq!(stats.files_processed, 1);
        assert_eq!(stats.files_skipped, 0);
        assert_eq!(stats.dirs_pruned, 1);
    }
    assert!(!words.frequencies().contains("module"));
    assert_eq!(languages.counts.get("JavaScript"), 1);
    Ok(())
}

#[test]
fn test_empty_base_directory() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    let patterns = load_exclude_patterns(&ws.exclude_file())?;
    let renderer = RecordingRenderer::default();
    let mut out = Vec::new();

    let words = run_word_cloud(
        &ws,
        &patterns,
        &Config::default(),
        &FixedStopwords::default(),
        &renderer,
        &mut out,
    )?;
    let languages = run_language_cloud(&ws, &patterns, &Config::default(), &renderer, &mut out)?;

    assert!(words.is_empty());
    assert!(languages.counts.is_empty());
    assert_eq!(languages.stats.files_processed, 0);
    assert!(renderer.calls.into_inner().is_empty());
    let text = String::from_utf8(out)?;
    assert!(text.contains("Files processed: 0\n"));
    assert!(text.contains("Total words found: 0\n"));
    assert!(text.contains("Total files analyzed: 0\n"));
    Ok(())
}
