// src/render/image.rs
use ab_glyph::{FontVec, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::FrequencyTable;
use crate::render::{CloudSettings, RenderError, Renderer, arrange, parse_color};

/// Fonts tried in order when none is configured.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Draws horizontal labels with a TrueType font and saves a PNG.
#[derive(Debug, Clone, Default)]
pub struct WordCloudRenderer {
    font: Option<PathBuf>,
}

impl WordCloudRenderer {
    /// `font` overrides the built-in list of system font locations.
    #[inline]
    #[must_use]
    pub const fn new(font: Option<PathBuf>) -> Self {
        Self { font }
    }

    fn load_font(&self) -> Result<FontVec, RenderError> {
        let candidates: Vec<PathBuf> = self.font.as_ref().map_or_else(
            || FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            |font| vec![font.clone()],
        );

        for path in &candidates {
            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(err) => {
                    debug!("No font at {}: {err}", path.display());
                    continue;
                }
            };
            match FontVec::try_from_vec(bytes) {
                Ok(font) => {
                    debug!("Using font {}", path.display());
                    return Ok(font);
                }
                Err(err) => warn!("Unusable font {}: {err}", path.display()),
            }
        }

        Err(RenderError::Unavailable(format!(
            "no usable TrueType font found (tried {} location(s))",
            candidates.len()
        )))
    }
}

impl Renderer for WordCloudRenderer {
    fn render(
        &self,
        table: &FrequencyTable,
        settings: &CloudSettings,
        output: &Path,
    ) -> Result<(), RenderError> {
        let background = parse_color(&settings.background)
            .ok_or_else(|| RenderError::InvalidColor(settings.background.clone()))?;
        let font = self.load_font()?;

        let entries = table.top(settings.max_words);
        let placed = arrange(&entries, settings, |text, size| {
            text_size(PxScale::from(size), &font, text)
        });
        debug!("Placed {} of {} labels", placed.len(), entries.len());

        let mut canvas = RgbImage::from_pixel(settings.width, settings.height, Rgb(background));
        for (rank, label) in placed.iter().enumerate() {
            let color = settings.palette.color(rank, placed.len());
            draw_text_mut(
                &mut canvas,
                Rgb(color),
                label.x,
                label.y,
                PxScale::from(label.font_size),
                &font,
                &label.text,
            );
        }

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        canvas.save(output)?;
        Ok(())
    }
}
