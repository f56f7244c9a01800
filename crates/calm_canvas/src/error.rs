//! Canvas error types
//!
//! Nothing on the frame path returns an error: a missing surface, stray
//! pointer ids, and full stores are handled by no-ops and eviction. These
//! errors come from loading configuration and resolving themes.

use std::path::PathBuf;
use thiserror::Error;

/// Canvas-related errors
#[derive(Error, Debug)]
pub enum CanvasError {
    /// Reading a configuration file failed
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration text was not valid TOML for [`crate::CanvasConfig`]
    #[error("Failed to parse canvas config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration failed to serialize
    #[error("Failed to serialize canvas config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Configuration parsed but holds values the engine cannot run with
    #[error("Invalid canvas config: {0}")]
    InvalidConfig(String),

    /// Theme lookup or color parsing failed
    #[error(transparent)]
    Theme(#[from] calm_theme::ThemeError),
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, CanvasError>;
