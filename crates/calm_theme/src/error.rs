//! Theme error types

use thiserror::Error;

/// Theme-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A color string was not `#rrggbb` / `#rgb`
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    /// No preset carries this id
    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
