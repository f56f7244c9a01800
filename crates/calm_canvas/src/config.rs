//! Canvas engine configuration
//!
//! Every tunable has a default matching the shipped kiosk behavior, so an
//! empty TOML document is a complete configuration:
//!
//! ```toml
//! indicator_ms = 1500
//! seed = 7
//!
//! [gesture]
//! double_tap_ms = 350
//! double_tap_radius = 50.0
//! min_scale = 0.5
//! max_scale = 3.0
//!
//! [stores.trails]
//! cap = 2000
//! evict = 200
//! ```

use crate::error::{CanvasError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level engine configuration
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CanvasConfig {
    /// How long the mode label stays up after a mode change
    #[serde(default = "default_indicator_ms")]
    pub indicator_ms: u64,
    /// Fixed RNG seed; `None` seeds from OS entropy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub frame: FrameConfig,
    #[serde(default)]
    pub stores: StoreLimits,
    #[serde(default)]
    pub fade: FadeConfig,
}

fn default_indicator_ms() -> u64 {
    1500
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            indicator_ms: default_indicator_ms(),
            seed: None,
            gesture: GestureConfig::default(),
            frame: FrameConfig::default(),
            stores: StoreLimits::default(),
            fade: FadeConfig::default(),
        }
    }
}

/// Tap and pinch thresholds
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GestureConfig {
    /// Two downs closer together in time than this form a double-tap
    #[serde(default = "default_double_tap_ms")]
    pub double_tap_ms: u64,
    /// ...and closer together in space than this (CSS px)
    #[serde(default = "default_double_tap_radius")]
    pub double_tap_radius: f32,
    #[serde(default = "default_min_scale")]
    pub min_scale: f32,
    #[serde(default = "default_max_scale")]
    pub max_scale: f32,
}

fn default_double_tap_ms() -> u64 {
    350
}

fn default_double_tap_radius() -> f32 {
    50.0
}

fn default_min_scale() -> f32 {
    0.5
}

fn default_max_scale() -> f32 {
    3.0
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            double_tap_ms: default_double_tap_ms(),
            double_tap_radius: default_double_tap_radius(),
            min_scale: default_min_scale(),
            max_scale: default_max_scale(),
        }
    }
}

/// Frame timing and backing-store limits
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FrameConfig {
    /// Upper bound on the per-frame time step, in seconds
    #[serde(default = "default_max_dt")]
    pub max_dt: f32,
    /// Device pixel ratios above this are clamped when sizing the surface
    #[serde(default = "default_max_device_pixel_ratio")]
    pub max_device_pixel_ratio: f32,
}

fn default_max_dt() -> f32 {
    0.05
}

fn default_max_device_pixel_ratio() -> f32 {
    2.0
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_dt: default_max_dt(),
            max_device_pixel_ratio: default_max_device_pixel_ratio(),
        }
    }
}

/// Capacity of one effect store
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct StoreLimit {
    /// Most entries the store may hold
    pub cap: usize,
    /// Oldest entries dropped at once when `cap` is exceeded
    pub evict: usize,
}

impl StoreLimit {
    pub const fn new(cap: usize, evict: usize) -> Self {
        Self { cap, evict }
    }
}

/// Per-store capacities
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StoreLimits {
    #[serde(default = "default_trails_limit")]
    pub trails: StoreLimit,
    #[serde(default = "default_particles_limit")]
    pub particles: StoreLimit,
    #[serde(default = "default_ripples_limit")]
    pub ripples: StoreLimit,
    #[serde(default = "default_shapes_limit")]
    pub shapes: StoreLimit,
    #[serde(default = "default_strokes_limit")]
    pub strokes: StoreLimit,
}

fn default_trails_limit() -> StoreLimit {
    StoreLimit::new(2000, 200)
}

fn default_particles_limit() -> StoreLimit {
    StoreLimit::new(1500, 300)
}

fn default_ripples_limit() -> StoreLimit {
    StoreLimit::new(100, 20)
}

fn default_shapes_limit() -> StoreLimit {
    StoreLimit::new(200, 40)
}

fn default_strokes_limit() -> StoreLimit {
    StoreLimit::new(5000, 500)
}

impl Default for StoreLimits {
    fn default() -> Self {
        Self {
            trails: default_trails_limit(),
            particles: default_particles_limit(),
            ripples: default_ripples_limit(),
            shapes: default_shapes_limit(),
            strokes: default_strokes_limit(),
        }
    }
}

impl StoreLimits {
    fn named(&self) -> [(&'static str, StoreLimit); 5] {
        [
            ("trails", self.trails),
            ("particles", self.particles),
            ("ripples", self.ripples),
            ("shapes", self.shapes),
            ("strokes", self.strokes),
        ]
    }
}

/// Alpha of the background fill laid over the previous frame, per mode.
///
/// Lower values leave longer trails. `None` skips the fill entirely.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct FadeConfig {
    #[serde(default = "default_trails_fade")]
    pub trails: Option<f32>,
    #[serde(default = "default_discrete_fade")]
    pub particles: Option<f32>,
    #[serde(default = "default_discrete_fade")]
    pub ripples: Option<f32>,
    #[serde(default = "default_geometric_fade")]
    pub geometric: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drawing: Option<f32>,
}

fn default_trails_fade() -> Option<f32> {
    Some(0.03)
}

fn default_discrete_fade() -> Option<f32> {
    Some(0.15)
}

fn default_geometric_fade() -> Option<f32> {
    Some(0.04)
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            trails: default_trails_fade(),
            particles: default_discrete_fade(),
            ripples: default_discrete_fade(),
            geometric: default_geometric_fade(),
            drawing: None,
        }
    }
}

impl CanvasConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CanvasConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| CanvasError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded canvas config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the engine cannot run with
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(CanvasError::InvalidConfig(msg));

        for (name, limit) in self.stores.named() {
            if limit.cap == 0 || limit.evict == 0 || limit.evict > limit.cap {
                return invalid(format!(
                    "stores.{name}: need 0 < evict <= cap, got cap={} evict={}",
                    limit.cap, limit.evict
                ));
            }
        }

        let g = &self.gesture;
        if !(g.min_scale > 0.0 && g.min_scale <= g.max_scale) {
            return invalid(format!(
                "gesture: need 0 < min_scale <= max_scale, got {}..{}",
                g.min_scale, g.max_scale
            ));
        }
        if !(g.double_tap_radius >= 0.0) {
            return invalid("gesture.double_tap_radius must be >= 0".into());
        }

        if !(self.frame.max_dt > 0.0) {
            return invalid("frame.max_dt must be > 0".into());
        }
        if !(self.frame.max_device_pixel_ratio >= 1.0) {
            return invalid("frame.max_device_pixel_ratio must be >= 1".into());
        }

        let fades = [
            self.fade.trails,
            self.fade.particles,
            self.fade.ripples,
            self.fade.geometric,
            self.fade.drawing,
        ];
        if fades
            .into_iter()
            .flatten()
            .any(|alpha| !(0.0..=1.0).contains(&alpha))
        {
            return invalid("fade alphas must lie in 0..=1".into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config = CanvasConfig::from_toml_str("").unwrap();
        assert_eq!(config, CanvasConfig::default());
        assert_eq!(config.stores.trails, StoreLimit::new(2000, 200));
        assert_eq!(config.fade.drawing, None);
    }

    #[test]
    fn test_partial_override() {
        let config = CanvasConfig::from_toml_str(
            r#"
            seed = 42

            [gesture]
            double_tap_ms = 250

            [stores.ripples]
            cap = 10
            evict = 5
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.gesture.double_tap_ms, 250);
        assert_eq!(config.gesture.double_tap_radius, 50.0);
        assert_eq!(config.stores.ripples, StoreLimit::new(10, 5));
        assert_eq!(config.stores.shapes, StoreLimit::new(200, 40));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CanvasConfig {
            seed: Some(9),
            ..CanvasConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(CanvasConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_rejects_eviction_larger_than_cap() {
        let text = "[stores.shapes]\ncap = 10\nevict = 11\n";
        let err = CanvasConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidConfig(msg) if msg.contains("shapes")));
    }

    #[test]
    fn test_rejects_inverted_scale_bounds() {
        let text = "[gesture]\nmin_scale = 4.0\nmax_scale = 2.0\n";
        let err = CanvasConfig::from_toml_str(text).unwrap_err();
        assert!(matches!(err, CanvasError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = CanvasConfig::from_toml_str("indicator_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, CanvasError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CanvasConfig::load(Path::new("/nonexistent/calm-canvas.toml")).unwrap_err();
        assert!(matches!(err, CanvasError::Io { .. }));
    }
}
