use super::{Effect, SpawnContext};
use calm_paint::{Circle, Color, Point, Surface};
use rand::Rng;
use std::f32::consts::TAU;

/// Velocity kept per frame
const DRAG: f32 = 0.98;
/// Downward pull, px/s²
const GRAVITY: f32 = 8.0;

/// A drifting spark
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    pub life: f32,
    /// Seconds from spawn to expiry
    pub max_life: f32,
    pub radius: f32,
    pub color: Color,
}

impl Particle {
    /// A spark heading in a random direction from `at`
    pub fn spawn(at: Point, ctx: &mut SpawnContext<'_>) -> Self {
        let angle = ctx.rng.gen_range(0.0..TAU);
        let speed = ctx.rng.gen_range(40.0..160.0);
        let (sin, cos) = angle.sin_cos();
        Self {
            position: at,
            velocity: Point::new(cos * speed, sin * speed),
            life: 1.0,
            max_life: ctx.rng.gen_range(1.5..3.0),
            radius: ctx.rng.gen_range(1.5..4.5) * ctx.scale,
            color: ctx.pick_color(),
        }
    }
}

impl Effect for Particle {
    fn age(&mut self, dt: f32) -> bool {
        self.life -= dt / self.max_life;
        if self.life <= 0.0 {
            return false;
        }
        self.velocity.x *= DRAG;
        self.velocity.y *= DRAG;
        self.velocity.y += GRAVITY * dt;
        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        true
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, _scale: f32) {
        let alpha = self.life * 0.7;
        surface.fill_circle(
            Circle::new(self.position, self.radius * 2.5),
            self.color.with_alpha(alpha * 0.2),
        );
        surface.fill_circle(
            Circle::new(self.position, self.radius),
            self.color.with_alpha(alpha),
        );
    }
}
