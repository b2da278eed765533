// tests/integration_tests/exclusion_test.rs
use super::common::{create_exclude_file, create_test_file, setup_workspace};
use anyhow::Result;
use codecloud::{collect_languages, collect_words, load_exclude_patterns};

#[test]
fn test_exclusion_file_round_trip() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(
        &ws.tool_dir,
        &["# build output", "", "target", "*.min.js", "  ", ".git"],
    )?;

    let patterns = load_exclude_patterns(&ws.exclude_file())?;

    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns.iter().collect::<Vec<_>>(), vec!["target", "*.min.js", ".git"]);
    assert!(patterns.matches("target/debug/build.rs"));
    assert!(patterns.matches("web/vendor.min.js"));
    assert!(patterns.matches(".git/HEAD"));
    assert!(!patterns.matches("src/targets.rs"));
    Ok(())
}

#[test]
fn test_missing_exclusion_file_excludes_nothing() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_test_file(&ws.base_dir, "target/out.rs", "fn main() {}")?;

    let patterns = load_exclude_patterns(&ws.exclude_file())?;
    let scan = collect_languages(&ws.base_dir, &patterns);

    assert!(patterns.is_empty());
    assert_eq!(scan.counts.get("Rust"), 1);
    Ok(())
}

#[test]
fn test_excluded_directory_is_never_visited() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(&ws.tool_dir, &["vendor"])?;
    create_test_file(&ws.base_dir, "vendor/deep/nested/lib.go", "package lib")?;
    create_test_file(&ws.base_dir, "vendor/mod.rs", "mod deep;")?;
    create_test_file(&ws.base_dir, "cmd/main.go", "package main")?;

    let patterns = load_exclude_patterns(&ws.exclude_file())?;
    let scan = collect_languages(&ws.base_dir, &patterns);

    let visited: Vec<_> = scan.files_by_language.values().flatten().collect();
    assert_eq!(visited.len(), 1);
    assert!(visited.iter().all(|path| !path.starts_with(ws.base_dir.join("vendor"))));
    assert_eq!(scan.stats.dirs_pruned, 1);
    assert_eq!(scan.stats.files_skipped, 0);
    Ok(())
}

#[test]
fn test_basename_match_skips_any_extension() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(&ws.tool_dir, &["generated_*"])?;
    create_test_file(&ws.base_dir, "api/generated_client.rs", "fn client() {}")?;
    create_test_file(&ws.base_dir, "docs/generated_notes.md", "autogenerated notes")?;
    create_test_file(&ws.base_dir, "api/handwritten.rs", "fn handwritten() {}")?;

    let patterns = load_exclude_patterns(&ws.exclude_file())?;
    let words = collect_words(&ws.base_dir, &patterns);
    let languages = collect_languages(&ws.base_dir, &patterns);

    assert_eq!(words.words, vec!["fn", "handwritten"]);
    assert_eq!(words.stats.files_processed, 1);
    assert_eq!(words.stats.files_skipped, 2);
    assert_eq!(languages.counts.get("Rust"), 1);
    assert!(!languages.counts.contains("Markdown"));
    Ok(())
}

#[test]
fn test_base_dir_name_does_not_trigger_patterns() -> Result<()> {
    let (_root, ws) = setup_workspace()?;
    create_exclude_file(&ws.tool_dir, &["project"])?;
    create_test_file(&ws.base_dir, "main.py", "print")?;

    let patterns = load_exclude_patterns(&ws.exclude_file())?;
    let scan = collect_languages(&ws.base_dir, &patterns);

    assert_eq!(scan.counts.get("Python"), 1);
    Ok(())
}
