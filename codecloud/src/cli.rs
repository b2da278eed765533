// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::core::exclude::load_exclude_patterns;
use crate::core::stopwords::{HttpFetcher, NltkStopwords, default_data_dirs, default_download_dir};
use crate::pipeline::{run_language_cloud, run_word_cloud};
use crate::render::WordCloudRenderer;
use crate::workspace::Workspace;

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory holding exclude.txt, codecloud.toml and the images/ output
    #[arg(short = 'd', long, default_value = ".")]
    pub tool_dir: PathBuf,

    /// Directory to analyse (defaults to the parent of the tool directory)
    #[arg(short, long)]
    pub base_dir: Option<PathBuf>,

    /// Only build the word cloud
    #[arg(short, long)]
    pub words: bool,

    /// Only build the language cloud
    #[arg(short, long)]
    pub languages: bool,

    /// Number of words to list (overrides codecloud.toml)
    #[arg(short, long)]
    pub top: Option<usize>,

    /// Never download stopword data
    #[arg(long)]
    pub offline: bool,
}

impl Args {
    /// With neither pipeline selected, both run.
    const fn pipelines(&self) -> (bool, bool) {
        if self.words || self.languages {
            (self.words, self.languages)
        } else {
            (true, true)
        }
    }
}

/// Runs the selected pipelines and writes the report to stdout.
///
/// # Errors
///
/// Returns an error if the configuration or exclusion file is unreadable or
/// malformed, or if writing to stdout fails.
#[inline]
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(&args, &mut out)
}

/// [`run`] with the report written to `out`.
///
/// # Errors
///
/// See [`run`].
#[inline]
pub fn run_with_output(args: &Args, out: &mut dyn Write) -> Result<()> {
    let workspace = Workspace::resolve(&args.tool_dir, args.base_dir.as_deref())?;
    let mut config = Config::load(&workspace.config_file())?;
    if let Some(top) = args.top {
        config.top = top;
    }

    writeln!(out, "Base directory: {}", workspace.base_dir.display())?;
    writeln!(out, "Loading exclusion patterns...")?;
    let patterns = load_exclude_patterns(&workspace.exclude_file())?;
    writeln!(out, "Loaded {} exclusion patterns", patterns.len())?;
    writeln!(out)?;

    let renderer = WordCloudRenderer::new(config.font.clone());
    let (words, languages) = args.pipelines();

    if words {
        let data_dirs = if config.stopwords.data_dirs.is_empty() {
            default_data_dirs()
        } else {
            config.stopwords.data_dirs.clone()
        };
        let mut source = NltkStopwords::new(data_dirs);
        if config.stopwords.download && !args.offline {
            source = source.with_fetcher(
                HttpFetcher::new(config.stopwords.url.clone()),
                default_download_dir(),
            );
        }
        run_word_cloud(&workspace, &patterns, &config, &source, &renderer, out)?;
    }

    if words && languages {
        writeln!(out)?;
    }

    if languages {
        run_language_cloud(&workspace, &patterns, &config, &renderer, out)?;
    }

    Ok(())
}
