// src/render.rs
mod image;
mod layout;
mod palette;

use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::FrequencyTable;

pub use self::image::WordCloudRenderer;
pub use layout::{MARGIN, PlacedLabel, arrange};
pub use palette::{Palette, parse_color};

/// Appearance and destination of one cloud image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CloudSettings {
    pub width: u32,
    pub height: u32,
    pub background: String,
    pub palette: Palette,
    /// Upper bound on the number of labels drawn.
    pub max_words: usize,
    /// 0 sizes labels by rank only, 1 makes size proportional to frequency.
    pub relative_scaling: f32,
    pub min_font_size: f32,
    /// Relative to the tool directory.
    pub output: PathBuf,
}

impl CloudSettings {
    /// Square viridis canvas for the word pipeline.
    #[inline]
    #[must_use]
    pub fn words() -> Self {
        Self {
            width: 1600,
            height: 1600,
            background: String::from("white"),
            palette: Palette::Viridis,
            max_words: 200,
            relative_scaling: 0.5,
            min_font_size: 10.0,
            output: PathBuf::from("images/wordcloud.png"),
        }
    }

    /// Wide Set1 canvas for the language pipeline.
    #[inline]
    #[must_use]
    pub fn languages() -> Self {
        Self {
            width: 1600,
            height: 800,
            background: String::from("white"),
            palette: Palette::Set1,
            max_words: 50,
            relative_scaling: 0.5,
            min_font_size: 12.0,
            output: PathBuf::from("images/wordcloud_languages.png"),
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    /// A prerequisite of the renderer is missing; the cloud is skipped.
    #[error("{0}")]
    Unavailable(String),
    #[error("invalid background colour '{0}'")]
    InvalidColor(String),
    #[error("failed to write image: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode image: {0}")]
    Image(#[from] ::image::ImageError),
}

/// Turns a frequency table into an image file.
pub trait Renderer {
    /// # Errors
    ///
    /// Returns [`RenderError::Unavailable`] when the renderer cannot work in
    /// this environment, or another variant when drawing or writing fails.
    fn render(
        &self,
        table: &FrequencyTable,
        settings: &CloudSettings,
        output: &Path,
    ) -> Result<(), RenderError>;
}
