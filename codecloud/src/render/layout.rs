// src/render/layout.rs
use std::f32::consts::TAU;

use crate::render::CloudSettings;

/// Free space kept around every label, in pixels.
pub const MARGIN: u32 = 2;

/// Factor applied to the font size when a label finds no free slot.
const SHRINK: f32 = 0.9;

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabel {
    pub text: String,
    pub font_size: f32,
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy)]
struct Bounds {
    left: i64,
    top: i64,
    right: i64,
    bottom: i64,
}

impl Bounds {
    fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        let (left, top) = (i64::from(x), i64::from(y));
        Self {
            left,
            top,
            right: left + i64::from(width),
            bottom: top + i64::from(height),
        }
    }

    fn of(label: &PlacedLabel) -> Self {
        Self::new(label.x, label.y, label.width, label.height)
    }

    fn fits(&self, width: u32, height: u32) -> bool {
        let margin = i64::from(MARGIN);
        self.left >= margin
            && self.top >= margin
            && self.right + margin <= i64::from(width)
            && self.bottom + margin <= i64::from(height)
    }

    fn overlaps(&self, other: &Self) -> bool {
        let margin = i64::from(MARGIN);
        self.left < other.right + margin
            && other.left < self.right + margin
            && self.top < other.bottom + margin
            && other.top < self.bottom + margin
    }
}

/// Places ranked labels on the canvas, largest first.
///
/// `measure` returns the pixel width and height of a label at a font size.
/// The first label starts at a quarter of the canvas height; each following
/// label is scaled from its predecessor by `relative_scaling` blended with
/// its normalized frequency. A label that finds no free slot shrinks and
/// retries. Layout ends as soon as a label would drop below
/// `min_font_size`, so fewer than `max_words` labels may be placed.
#[must_use]
pub fn arrange<M>(
    entries: &[(&str, u64)],
    settings: &CloudSettings,
    mut measure: M,
) -> Vec<PlacedLabel>
where
    M: FnMut(&str, f32) -> (u32, u32),
{
    let entries: Vec<(&str, u64)> = entries
        .iter()
        .copied()
        .filter(|(_, count)| *count > 0)
        .take(settings.max_words)
        .collect();
    let Some(&(_, max_count)) = entries.first() else {
        return Vec::new();
    };

    let scaling = settings.relative_scaling.clamp(0.0, 1.0);
    let min_font_size = settings.min_font_size.max(1.0);
    let mut font_size = (settings.height as f32 / 4.0).round();
    let mut previous = 1.0_f32;
    let mut placed: Vec<PlacedLabel> = Vec::new();

    for (rank, (text, count)) in entries.into_iter().enumerate() {
        let frequency = count as f32 / max_count as f32;
        if rank > 0 {
            font_size = ((scaling * frequency / previous + (1.0 - scaling)) * font_size).round();
        }

        loop {
            if font_size < min_font_size {
                return placed;
            }
            let (width, height) = measure(text, font_size);
            if let Some((x, y)) = find_slot(width, height, settings, &placed) {
                placed.push(PlacedLabel {
                    text: text.to_owned(),
                    font_size,
                    x,
                    y,
                    width,
                    height,
                });
                break;
            }
            font_size = (font_size * SHRINK).floor();
        }
        previous = frequency;
    }

    placed
}

/// Walks an elliptical Archimedean spiral out from the canvas centre and
/// returns the first top-left corner where the box is free.
fn find_slot(
    width: u32,
    height: u32,
    settings: &CloudSettings,
    placed: &[PlacedLabel],
) -> Option<(i32, i32)> {
    if width.saturating_add(2 * MARGIN) > settings.width
        || height.saturating_add(2 * MARGIN) > settings.height
    {
        return None;
    }

    let canvas_width = settings.width as f32;
    let canvas_height = settings.height as f32;
    let aspect = canvas_width / canvas_height;
    let (centre_x, centre_y) = (canvas_width / 2.0, canvas_height / 2.0);
    let max_radius = canvas_height.hypot(canvas_height) / 2.0;
    // Finer steps for small labels, coarser for large ones.
    let step = (height as f32 / 4.0).max(2.0);

    let mut angle = 0.0_f32;
    loop {
        let radius = step * angle / TAU;
        if radius > max_radius {
            return None;
        }

        let x = (centre_x + radius * aspect * angle.cos() - width as f32 / 2.0).round() as i32;
        let y = (centre_y + radius * angle.sin() - height as f32 / 2.0).round() as i32;
        let candidate = Bounds::new(x, y, width, height);
        if candidate.fits(settings.width, settings.height)
            && placed.iter().all(|label| !candidate.overlaps(&Bounds::of(label)))
        {
            return Some((x, y));
        }

        angle += step / radius.max(step);
    }
}
