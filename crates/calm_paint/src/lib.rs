//! Calm Station Paint API
//!
//! The 2D drawing vocabulary shared by the canvas engine and its hosts.
//!
//! # Features
//!
//! - RGBA colors with CSS-style output for web hosts
//! - Path building (polygons, lines)
//! - Shape primitives (rect, circle)
//! - The [`Surface`] trait: an immediate-mode target similar to an HTML
//!   canvas 2D context
//! - [`PaintContext`]: a surface that records commands for replay or
//!   inspection in tests

pub mod color;
pub mod context;
pub mod path;
pub mod primitives;
pub mod surface;

pub use color::Color;
pub use context::{PaintCommand, PaintContext};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::{Circle, Rect};
pub use surface::{LineCap, StrokeStyle, Surface, Transform2D};
