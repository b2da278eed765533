// src/render/palette.rs
use serde::Deserialize;

/// Colour schemes for the labels of a cloud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Sequential purple-to-yellow ramp, sampled by rank.
    Viridis,
    /// Nine qualitative colours, cycled by rank.
    Set1,
}

const VIRIDIS: [[u8; 3]; 5] = [
    [0x44, 0x01, 0x54],
    [0x3b, 0x52, 0x8b],
    [0x21, 0x91, 0x8c],
    [0x5e, 0xc9, 0x62],
    [0xfd, 0xe7, 0x25],
];

const SET1: [[u8; 3]; 9] = [
    [0xe4, 0x1a, 0x1c],
    [0x37, 0x7e, 0xb8],
    [0x4d, 0xaf, 0x4a],
    [0x98, 0x4e, 0xa3],
    [0xff, 0x7f, 0x00],
    [0xff, 0xff, 0x33],
    [0xa6, 0x56, 0x28],
    [0xf7, 0x81, 0xbf],
    [0x99, 0x99, 0x99],
];

impl Palette {
    /// Colour of the label at `rank` among `count` labels.
    #[inline]
    #[must_use]
    pub fn color(self, rank: usize, count: usize) -> [u8; 3] {
        match self {
            Self::Viridis => {
                let position = if count <= 1 {
                    0.0
                } else {
                    rank as f32 / (count - 1) as f32
                };
                sample(&VIRIDIS, position)
            }
            Self::Set1 => SET1[rank % SET1.len()],
        }
    }
}

/// Linear interpolation between evenly spaced colour stops.
fn sample(stops: &[[u8; 3]], position: f32) -> [u8; 3] {
    let last = stops.len() - 1;
    let scaled = position.clamp(0.0, 1.0) * last as f32;
    let lower = (scaled.floor() as usize).min(last - 1);
    let fraction = scaled - lower as f32;
    let (from, to) = (stops[lower], stops[lower + 1]);

    let mut color = [0_u8; 3];
    for (channel, value) in color.iter_mut().enumerate() {
        let start = f32::from(from[channel]);
        let end = f32::from(to[channel]);
        *value = (start + (end - start) * fraction).round() as u8;
    }
    color
}

/// Parses a colour name (`white`, `black`, `gray`/`grey`) or a `#rrggbb` /
/// `#rgb` hex string.
#[inline]
#[must_use]
pub fn parse_color(value: &str) -> Option<[u8; 3]> {
    let value = value.trim().to_ascii_lowercase();
    match value.as_str() {
        "white" => return Some([255, 255, 255]),
        "black" => return Some([0, 0, 0]),
        "gray" | "grey" => return Some([128, 128, 128]),
        _ => {}
    }

    let hex = value.strip_prefix('#')?;
    let digits: Vec<u8> = hex
        .chars()
        .map(|c| c.to_digit(16).and_then(|d| u8::try_from(d).ok()))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [r, g, b] => Some([r * 17, g * 17, b * 17]),
        [r1, r2, g1, g2, b1, b2] => Some([r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2]),
        _ => None,
    }
}
