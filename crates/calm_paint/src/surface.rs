//! Drawing surface abstraction
//!
//! A [`Surface`] is the immediate-mode target the canvas engine draws into
//! every frame. Web hosts back it with a canvas 2D context, native hosts with
//! a GPU or software rasterizer, and tests with [`crate::PaintContext`].
//!
//! All coordinates are CSS pixels under the current transform, except
//! [`Surface::wipe`], which always covers the full backing store.

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::{Circle, Rect};

/// Stroke style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub line_cap: LineCap,
}

impl StrokeStyle {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            line_cap: LineCap::Butt,
        }
    }

    /// Round-capped stroke, used for finger-drawn segments
    pub fn round(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            line_cap: LineCap::Round,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// 2D affine transform
///
/// Laid out like a canvas `setTransform(a, b, c, d, e, f)` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2D {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub const fn identity() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            e: x,
            f: y,
            ..Self::identity()
        }
    }

    pub fn scale_uniform(s: f32) -> Self {
        Self {
            a: s,
            d: s,
            ..Self::identity()
        }
    }

    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Map a point through this transform
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }
}

/// An immediate-mode 2D drawing target.
pub trait Surface {
    /// Resize the backing store in device pixels. Hosts may discard contents.
    fn resize(&mut self, width: u32, height: u32);

    /// Replace the base transform (used for device-pixel-ratio scaling).
    fn set_transform(&mut self, transform: Transform2D);

    /// Push a transform on top of the current one.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the most recently pushed transform.
    fn pop_transform(&mut self);

    /// Fill the entire backing store, ignoring any transform.
    fn wipe(&mut self, color: Color);

    /// Fill a rectangle, blending with what is underneath.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke a single straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle);

    fn fill_circle(&mut self, circle: Circle, color: Color);

    fn stroke_circle(&mut self, circle: Circle, style: StrokeStyle);

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle);
}
