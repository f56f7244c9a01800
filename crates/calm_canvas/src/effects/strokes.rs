use super::{Effect, SpawnContext};
use calm_paint::{Color, Point, StrokeStyle, Surface};
use rand::Rng;

/// A freehand drawing segment. Strokes never fade; they leave only through
/// eviction or a clear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeSegment {
    pub from: Point,
    pub to: Point,
    pub color: Color,
    /// Final width; zoom is applied at spawn time
    pub width: f32,
}

impl StrokeSegment {
    pub fn spawn(from: Point, to: Point, color: Color, ctx: &mut SpawnContext<'_>) -> Self {
        Self {
            from,
            to,
            color,
            width: ctx.rng.gen_range(2.0..4.0) * ctx.scale,
        }
    }

    #[cfg(test)]
    pub(crate) fn fixture() -> Self {
        Self {
            from: Point::ZERO,
            to: Point::new(10.0, 10.0),
            color: Color::WHITE,
            width: 3.0,
        }
    }
}

impl Effect for StrokeSegment {
    fn age(&mut self, _dt: f32) -> bool {
        true
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, _scale: f32) {
        surface.stroke_line(
            self.from,
            self.to,
            StrokeStyle::round(self.color.with_alpha(0.2), self.width * 3.0),
        );
        surface.stroke_line(
            self.from,
            self.to,
            StrokeStyle::round(self.color.with_alpha(0.85), self.width),
        );
    }
}
