use super::{Effect, SpawnContext};
use calm_paint::{Circle, Color, Point, StrokeStyle, Surface};
use rand::Rng;

const DECAY: f32 = 0.5;
const START_RADIUS: f32 = 5.0;

/// An expanding ring
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub center: Point,
    pub radius: f32,
    /// Growth the ring reaches at the end of its life
    pub max_radius: f32,
    pub life: f32,
    pub width: f32,
    pub color: Color,
}

impl Ripple {
    pub fn spawn(center: Point, ctx: &mut SpawnContext<'_>) -> Self {
        Self {
            center,
            radius: START_RADIUS * ctx.scale,
            max_radius: ctx.rng.gen_range(80.0..200.0) * ctx.scale,
            life: 1.0,
            width: ctx.rng.gen_range(2.0..4.0),
            color: ctx.pick_color(),
        }
    }

    #[cfg(test)]
    pub(crate) fn fixture() -> Self {
        Self {
            center: Point::new(50.0, 50.0),
            radius: START_RADIUS,
            max_radius: 100.0,
            life: 1.0,
            width: 2.0,
            color: Color::WHITE,
        }
    }
}

impl Effect for Ripple {
    fn age(&mut self, dt: f32) -> bool {
        self.life -= dt * DECAY;
        if self.life <= 0.0 {
            return false;
        }
        self.radius = START_RADIUS + (1.0 - self.life) * self.max_radius;
        true
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, scale: f32) {
        let alpha = self.life * 0.6;
        surface.stroke_circle(
            Circle::new(self.center, self.radius),
            StrokeStyle::new(self.color.with_alpha(alpha), self.width * scale),
        );
        if self.life > 0.5 {
            surface.stroke_circle(
                Circle::new(self.center, self.radius * 0.6),
                StrokeStyle::new(
                    self.color.with_alpha(alpha * 0.3),
                    self.width * 2.0 * scale,
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calm_paint::PaintContext;
    use calm_theme::CanvasPalette;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_ranges_follow_zoom() {
        let palette = CanvasPalette::default();
        let mut rng = StdRng::seed_from_u64(11);
        let mut ctx = SpawnContext {
            palette: &palette,
            scale: 2.0,
            rng: &mut rng,
        };
        for _ in 0..200 {
            let ripple = Ripple::spawn(Point::ZERO, &mut ctx);
            assert_eq!(ripple.radius, 10.0);
            assert!((160.0..400.0).contains(&ripple.max_radius));
            assert!((2.0..4.0).contains(&ripple.width));
        }
    }

    #[test]
    fn test_radius_grows_as_life_falls() {
        let mut ripple = Ripple::fixture();
        assert!(ripple.age(0.5));
        assert!((ripple.life - 0.75).abs() < 1e-6);
        assert!((ripple.radius - 30.0).abs() < 1e-4);
        assert!(ripple.age(1.0));
        assert!((ripple.radius - 80.0).abs() < 1e-4);
        assert!(!ripple.age(1.0));
    }

    #[test]
    fn test_inner_ring_only_while_young() {
        let mut ripple = Ripple::fixture();
        let mut ctx = PaintContext::new();
        ripple.age(0.1);
        ripple.draw(&mut ctx, 1.0);
        assert_eq!(ctx.take_commands().len(), 2);

        ripple.age(1.0);
        ripple.draw(&mut ctx, 1.0);
        assert_eq!(ctx.take_commands().len(), 1);
    }
}
