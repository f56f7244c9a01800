//! Canvas palette and hex color parsing

use crate::error::{Result, ThemeError};
use calm_paint::Color;

/// Deep navy behind every canvas mode (#0d1b2a). Fade overlays and full
/// wipes both paint with this color.
pub const CANVAS_BACKGROUND: Color = Color {
    r: 13.0 / 255.0,
    g: 27.0 / 255.0,
    b: 42.0 / 255.0,
    a: 1.0,
};

/// The colors the canvas engine draws with
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasPalette {
    /// Dominant effect color
    pub accent: Color,
    /// Minority effect color
    pub secondary: Color,
    /// Fade and wipe color
    pub background: Color,
}

impl CanvasPalette {
    pub fn new(accent: Color, secondary: Color) -> Self {
        Self {
            accent,
            secondary,
            background: CANVAS_BACKGROUND,
        }
    }

    /// Build from two `#rrggbb` strings as stored in theme tables
    pub fn from_hex(accent: &str, secondary: &str) -> Result<Self> {
        Ok(Self::new(parse_hex_color(accent)?, parse_hex_color(secondary)?))
    }

    /// Build from raw RGB triples
    pub fn from_rgb(accent: [u8; 3], secondary: [u8; 3]) -> Self {
        Self::new(
            Color::from_rgb8(accent[0], accent[1], accent[2]),
            Color::from_rgb8(secondary[0], secondary[1], secondary[2]),
        )
    }
}

impl Default for CanvasPalette {
    /// Ocean, the fallback theme
    fn default() -> Self {
        Self::from_rgb([72, 181, 160], [58, 143, 183])
    }
}

/// Parse `#rrggbb` or `#rgb` (leading `#` optional) into an opaque color
pub fn parse_hex_color(input: &str) -> Result<Color> {
    let invalid = || ThemeError::InvalidHex(input.to_string());
    let digits = input.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let expanded = match digits.len() {
        6 => digits.to_string(),
        3 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => return Err(invalid()),
    };

    let value = u32::from_str_radix(&expanded, 16).map_err(|_| invalid())?;
    Ok(Color::from_hex(value))
}
