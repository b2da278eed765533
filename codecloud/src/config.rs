// src/config.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::stopwords::STOPWORDS_URL;
use crate::render::{CloudSettings, Palette};

/// Name of the optional configuration file inside the tool directory.
pub const CONFIG_FILE: &str = "codecloud.toml";

/// Number of words listed in the word report unless overridden.
pub const DEFAULT_TOP: usize = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub top: usize,
    /// TrueType font used by the renderer; system fonts are searched when unset.
    pub font: Option<PathBuf>,
    pub stopwords: StopwordConfig,
    pub words: CloudSettings,
    pub languages: CloudSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            font: None,
            stopwords: StopwordConfig::default(),
            words: CloudSettings::words(),
            languages: CloudSettings::languages(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StopwordConfig {
    /// Adds the programming keyword list to the stopwords.
    pub programming_keywords: bool,
    /// Fetch the NLTK package when it is not installed.
    pub download: bool,
    /// Replaces the default NLTK data directories when non-empty.
    pub data_dirs: Vec<PathBuf>,
    pub url: String,
}

impl Default for StopwordConfig {
    fn default() -> Self {
        Self {
            programming_keywords: false,
            download: true,
            data_dirs: Vec::new(),
            url: String::from(STOPWORDS_URL),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    top: Option<usize>,
    font: Option<PathBuf>,
    stopwords: StopwordConfig,
    words: CloudOverrides,
    languages: CloudOverrides,
}

/// Partial `CloudSettings`; each field present replaces the preset's value.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct CloudOverrides {
    width: Option<u32>,
    height: Option<u32>,
    background: Option<String>,
    palette: Option<Palette>,
    max_words: Option<usize>,
    relative_scaling: Option<f32>,
    min_font_size: Option<f32>,
    output: Option<PathBuf>,
}

impl CloudOverrides {
    fn apply(self, mut settings: CloudSettings) -> CloudSettings {
        if let Some(width) = self.width {
            settings.width = width;
        }
        if let Some(height) = self.height {
            settings.height = height;
        }
        if let Some(background) = self.background {
            settings.background = background;
        }
        if let Some(palette) = self.palette {
            settings.palette = palette;
        }
        if let Some(max_words) = self.max_words {
            settings.max_words = max_words;
        }
        if let Some(relative_scaling) = self.relative_scaling {
            settings.relative_scaling = relative_scaling;
        }
        if let Some(min_font_size) = self.min_font_size {
            settings.min_font_size = min_font_size;
        }
        if let Some(output) = self.output {
            settings.output = output;
        }
        settings
    }
}

impl Config {
    /// Reads `path`, falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// configuration.
    #[inline]
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Parses configuration text; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML or unknown keys.
    #[inline]
    pub fn parse(content: &str) -> Result<Self> {
        let raw: RawConfig = toml::from_str(content)?;
        Ok(Self {
            top: raw.top.unwrap_or(DEFAULT_TOP),
            font: raw.font,
            stopwords: raw.stopwords,
            words: raw.words.apply(CloudSettings::words()),
            languages: raw.languages.apply(CloudSettings::languages()),
        })
    }
}
