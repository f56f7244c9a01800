use super::{Effect, SpawnContext};
use calm_paint::{Circle, Color, Path, Point, StrokeStyle, Surface, Transform2D};
use rand::Rng;
use std::f32::consts::TAU;

const DECAY: f32 = 0.25;
/// Extra stroke width of the glow pass, before zoom
const GLOW_SPREAD: f32 = 8.0;

/// Outline drawn by a [`Shape`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Triangle,
    Hexagon,
    Square,
    Diamond,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Hexagon,
        ShapeKind::Square,
        ShapeKind::Diamond,
    ];

    /// Polygon side count; `None` for the circle
    pub fn sides(self) -> Option<u32> {
        match self {
            Self::Circle => None,
            Self::Triangle => Some(3),
            Self::Square | Self::Diamond => Some(4),
            Self::Hexagon => Some(6),
        }
    }
}

/// A rotating outline that grows from a touch point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    pub center: Point,
    pub size: f32,
    pub max_size: f32,
    pub life: f32,
    /// Radians
    pub rotation: f32,
    /// Radians per second
    pub rotation_speed: f32,
    pub kind: ShapeKind,
    pub color: Color,
    pub line_width: f32,
}

impl Shape {
    pub fn spawn(center: Point, ctx: &mut SpawnContext<'_>) -> Self {
        let kind = ShapeKind::ALL[ctx.rng.gen_range(0..ShapeKind::ALL.len())];
        Self {
            center,
            size: 0.0,
            max_size: ctx.rng.gen_range(30.0..110.0) * ctx.scale,
            life: 1.0,
            rotation: ctx.rng.gen_range(0.0..TAU),
            rotation_speed: ctx.rng.gen_range(-0.25..0.25),
            kind,
            color: ctx.pick_color(),
            line_width: ctx.rng.gen_range(1.0..2.5),
        }
    }

    fn outline<S: Surface + ?Sized>(&self, surface: &mut S, style: StrokeStyle) {
        match self.kind.sides() {
            None => surface.stroke_circle(Circle::new(Point::ZERO, self.size), style),
            Some(sides) => surface.stroke_path(&Path::regular_polygon(sides, self.size), style),
        }
    }
}

impl Effect for Shape {
    fn age(&mut self, dt: f32) -> bool {
        self.life -= dt * DECAY;
        if self.life <= 0.0 {
            return false;
        }
        self.size = (1.0 - self.life) * self.max_size;
        self.rotation += self.rotation_speed * dt;
        true
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, scale: f32) {
        let alpha = self.life * 0.6;
        let width = self.line_width * scale;

        surface.push_transform(Transform2D::translate(self.center.x, self.center.y));
        surface.push_transform(Transform2D::rotate(self.rotation));
        self.outline(
            surface,
            StrokeStyle::new(
                self.color.with_alpha(alpha * 0.5),
                width + GLOW_SPREAD * scale,
            ),
        );
        self.outline(surface, StrokeStyle::new(self.color.with_alpha(alpha), width));
        surface.pop_transform();
        surface.pop_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calm_paint::{PaintCommand, PaintContext};
    use calm_theme::CanvasPalette;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn hexagon() -> Shape {
        Shape {
            center: Point::new(40.0, 40.0),
            size: 0.0,
            max_size: 100.0,
            life: 1.0,
            rotation: 0.0,
            rotation_speed: 0.2,
            kind: ShapeKind::Hexagon,
            color: Color::WHITE,
            line_width: 2.0,
        }
    }

    #[test]
    fn test_sides() {
        assert_eq!(ShapeKind::Circle.sides(), None);
        assert_eq!(ShapeKind::Triangle.sides(), Some(3));
        assert_eq!(ShapeKind::Square.sides(), ShapeKind::Diamond.sides());
        assert_eq!(ShapeKind::Hexagon.sides(), Some(6));
    }

    #[test]
    fn test_spawn_ranges() {
        let palette = CanvasPalette::default();
        let mut rng = StdRng::seed_from_u64(21);
        let mut ctx = SpawnContext {
            palette: &palette,
            scale: 1.0,
            rng: &mut rng,
        };
        for _ in 0..200 {
            let shape = Shape::spawn(Point::ZERO, &mut ctx);
            assert!((30.0..110.0).contains(&shape.max_size));
            assert!((0.0..TAU).contains(&shape.rotation));
            assert!((-0.25..0.25).contains(&shape.rotation_speed));
            assert!((1.0..2.5).contains(&shape.line_width));
            assert_eq!(shape.size, 0.0);
        }
    }

    #[test]
    fn test_grows_and_turns() {
        let mut shape = hexagon();
        assert!(shape.age(1.0));
        assert!((shape.life - 0.75).abs() < 1e-6);
        assert!((shape.size - 25.0).abs() < 1e-4);
        assert!((shape.rotation - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_draw_balances_transforms() {
        let mut shape = hexagon();
        shape.age(1.0);
        let mut ctx = PaintContext::new();
        shape.draw(&mut ctx, 1.5);
        assert_eq!(ctx.transform_depth(), 0);

        let widths: Vec<f32> = ctx
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PaintCommand::StrokePath { path, style } => {
                    assert_eq!(path.commands().len(), 8);
                    Some(style.width)
                }
                _ => None,
            })
            .collect();
        assert_eq!(widths, vec![15.0, 3.0]);
    }

    #[test]
    fn test_circle_kind_strokes_circle() {
        let mut shape = hexagon();
        shape.kind = ShapeKind::Circle;
        shape.age(2.0);
        let mut ctx = PaintContext::new();
        shape.draw(&mut ctx, 1.0);
        let circles = ctx
            .commands()
            .iter()
            .filter(|cmd| matches!(cmd, PaintCommand::StrokeCircle { .. }))
            .count();
        assert_eq!(circles, 2);
    }
}
