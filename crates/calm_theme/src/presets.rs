//! Built-in profile themes.

use crate::error::{Result, ThemeError};
use crate::palette::{parse_hex_color, CanvasPalette};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in theme preset catalog.
///
/// Deserializes leniently: an unknown id decodes as [`ThemePreset::Ocean`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ThemePreset {
    /// Teal on blue. The fallback for unknown ids.
    #[default]
    Ocean,
    /// Coral on orchid.
    Sunset,
    /// Leaf green on olive.
    Forest,
    /// Magenta on cyan.
    Neon,
    /// Blue-gray on slate.
    Mono,
}

impl ThemePreset {
    /// Stable preset id for config/serialization.
    pub fn id(self) -> &'static str {
        match self {
            Self::Ocean => "ocean",
            Self::Sunset => "sunset",
            Self::Forest => "forest",
            Self::Neon => "neon",
            Self::Mono => "mono",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Ocean => "Ocean",
            Self::Sunset => "Sunset",
            Self::Forest => "Forest",
            Self::Neon => "Neon",
            Self::Mono => "Mono",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [ThemePreset] {
        const PRESETS: [ThemePreset; 5] = [
            ThemePreset::Ocean,
            ThemePreset::Sunset,
            ThemePreset::Forest,
            ThemePreset::Neon,
            ThemePreset::Mono,
        ];
        &PRESETS
    }

    /// `(accent, secondary)` hex pair
    pub fn hex_pair(self) -> (&'static str, &'static str) {
        match self {
            Self::Ocean => ("#48b5a0", "#3a8fb7"),
            Self::Sunset => ("#e8845a", "#c46bb0"),
            Self::Forest => ("#6abf69", "#8a9a5a"),
            Self::Neon => ("#e040fb", "#40c4ff"),
            Self::Mono => ("#b0bec5", "#78909c"),
        }
    }

    /// Canvas colors for this theme.
    pub fn palette(self) -> CanvasPalette {
        let (accent, secondary) = self.hex_pair();
        // The table above is static; a parse failure here is a typo in it.
        match (parse_hex_color(accent), parse_hex_color(secondary)) {
            (Ok(accent), Ok(secondary)) => CanvasPalette::new(accent, secondary),
            _ => {
                tracing::error!(theme = self.id(), "malformed built-in theme color");
                CanvasPalette::default()
            }
        }
    }

    /// Look up a preset by id.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|p| p.id().eq_ignore_ascii_case(id.trim()))
            .ok_or_else(|| ThemeError::UnknownTheme(id.to_string()))
    }

    /// Look up a preset by id, falling back to [`ThemePreset::Ocean`].
    ///
    /// Profiles saved by older builds may carry ids that no longer exist.
    pub fn from_id_or_default(id: &str) -> Self {
        Self::from_id(id).unwrap_or_else(|err| {
            tracing::debug!(%err, "falling back to default theme");
            Self::default()
        })
    }
}

impl Display for ThemePreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<String> for ThemePreset {
    fn from(id: String) -> Self {
        Self::from_id_or_default(&id)
    }
}

impl FromStr for ThemePreset {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}
