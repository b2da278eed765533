// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod pipeline;
pub mod render;
pub mod report;
pub mod workspace;

pub use cli::{Args, run, run_with_output};
pub use config::Config;
pub use crate::core::exclude::{ExcludePatterns, load_exclude_patterns};
pub use crate::core::languages::{language_for_extension, language_for_path};
pub use crate::core::scanner::{LanguageScan, WordScan, collect_languages, collect_words, extract_words};
pub use crate::core::stopwords::{FixedStopwords, NltkStopwords, StopwordFilter, StopwordSource};
pub use models::{FrequencyTable, ScanStats};
pub use pipeline::{run_language_cloud, run_word_cloud};
pub use render::{CloudSettings, Palette, RenderError, Renderer, WordCloudRenderer};
pub use workspace::Workspace;
