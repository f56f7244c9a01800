use super::{Effect, SpawnContext};
use calm_paint::{Color, Point, StrokeStyle, Surface};
use rand::Rng;

/// Life lost per second
const DECAY: f32 = 0.3;

/// A fading glowing segment left by a moving finger
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub from: Point,
    pub to: Point,
    pub life: f32,
    pub width: f32,
    pub color: Color,
}

impl TrailSegment {
    /// One segment per pointer move
    pub fn spawn(from: Point, to: Point, ctx: &mut SpawnContext<'_>) -> Self {
        Self {
            from,
            to,
            life: 1.0,
            width: ctx.rng.gen_range(3.0..7.0),
            color: ctx.pick_color(),
        }
    }
}

impl Effect for TrailSegment {
    fn age(&mut self, dt: f32) -> bool {
        self.life -= dt * DECAY;
        self.life > 0.0
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, scale: f32) {
        surface.stroke_line(
            self.from,
            self.to,
            StrokeStyle::round(
                self.color.with_alpha(self.life * 0.4),
                self.width * 3.0 * scale,
            ),
        );
        surface.stroke_line(
            self.from,
            self.to,
            StrokeStyle::round(self.color.with_alpha(self.life * 0.8), self.width * scale),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calm_paint::{LineCap, PaintCommand, PaintContext};
    use calm_theme::CanvasPalette;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges() {
        let palette = CanvasPalette::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut ctx = SpawnContext {
            palette: &palette,
            scale: 1.0,
            rng: &mut rng,
        };
        for _ in 0..200 {
            let seg = TrailSegment::spawn(Point::ZERO, Point::new(5.0, 5.0), &mut ctx);
            assert!((3.0..7.0).contains(&seg.width));
            assert_eq!(seg.life, 1.0);
            assert!(seg.color == palette.accent || seg.color == palette.secondary);
        }
    }

    #[test]
    fn test_life_strictly_decreases_until_expiry() {
        let mut seg = TrailSegment {
            from: Point::ZERO,
            to: Point::new(1.0, 0.0),
            life: 1.0,
            width: 4.0,
            color: Color::WHITE,
        };
        let mut frames = 0;
        let mut last = seg.life;
        while seg.age(0.05) {
            assert!(seg.life < last);
            last = seg.life;
            frames += 1;
        }
        // 1.0 / (0.05 * 0.3) is just under 67 frames
        assert_eq!(frames, 66);
    }

    #[test]
    fn test_draws_glow_then_core() {
        let seg = TrailSegment {
            from: Point::ZERO,
            to: Point::new(10.0, 0.0),
            life: 0.5,
            width: 4.0,
            color: Color::WHITE,
        };
        let mut ctx = PaintContext::new();
        seg.draw(&mut ctx, 2.0);

        let widths: Vec<f32> = ctx
            .commands()
            .iter()
            .map(|cmd| match cmd {
                PaintCommand::StrokeLine { style, .. } => {
                    assert_eq!(style.line_cap, LineCap::Round);
                    style.width
                }
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(widths, vec![24.0, 8.0]);
    }
}
