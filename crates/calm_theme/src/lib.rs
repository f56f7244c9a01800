//! Calm Station Themes
//!
//! Each child profile picks one of five themes. A theme contributes two
//! colors to the interactive canvas: an accent (the dominant tone of every
//! effect) and a secondary (the minority tone mixed in for a two-tone look).
//!
//! # Quick Start
//!
//! ```rust
//! use calm_theme::{CanvasPalette, ThemePreset};
//!
//! // Profile records store the theme as a lowercase id
//! let preset = ThemePreset::from_id_or_default("sunset");
//! let palette: CanvasPalette = preset.palette();
//! assert_eq!(palette.accent.to_rgba8(), [0xe8, 0x84, 0x5a, 255]);
//! ```

pub mod error;
pub mod palette;
pub mod presets;

pub use error::{Result, ThemeError};
pub use palette::{parse_hex_color, CanvasPalette, CANVAS_BACKGROUND};
pub use presets::ThemePreset;
