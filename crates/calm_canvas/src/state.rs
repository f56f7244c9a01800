//! Session state shared by the pointer handlers and the frame loop

use crate::config::CanvasConfig;
use crate::effects::{
    EffectStores, Particle, Ripple, Shape, SpawnContext, StrokeSegment, TrailSegment,
};
use crate::lifecycle::SurfaceSize;
use crate::mode::{CanvasMode, ModeController};
use calm_paint::{Color, Point};
use calm_theme::CanvasPalette;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sparks released by a single pointer-down in particles mode
pub const PARTICLE_BURST: usize = 8;
/// Sparks released per active contact on every particles frame
pub const PARTICLES_PER_TOUCH: usize = 2;
/// Chance that a move in ripples mode adds a ring
pub const RIPPLE_MOVE_CHANCE: f32 = 0.15;
/// Chance that a move in geometric mode adds a shape
pub const SHAPE_MOVE_CHANCE: f32 = 0.2;

/// Everything the engine mutates between frames
#[derive(Debug)]
pub struct CanvasState {
    pub modes: ModeController,
    /// Pinch zoom factor
    pub scale: f32,
    pub stores: EffectStores,
    pub palette: CanvasPalette,
    /// Color of freehand strokes
    pub draw_color: Color,
    pub size: SurfaceSize,
    rng: StdRng,
}

impl CanvasState {
    pub fn new(config: &CanvasConfig, palette: CanvasPalette) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            modes: ModeController::new(),
            scale: 1.0,
            stores: EffectStores::new(&config.stores),
            draw_color: palette.accent,
            palette,
            size: SurfaceSize::default(),
            rng,
        }
    }

    pub fn mode(&self) -> CanvasMode {
        self.modes.mode()
    }

    /// Swap in new theme colors; the draw color follows the accent
    pub fn set_palette(&mut self, palette: CanvasPalette) {
        self.palette = palette;
        self.draw_color = palette.accent;
    }

    /// Empty every store and restore zoom and draw color
    pub fn reset_session(&mut self) {
        self.stores.clear_all();
        self.scale = 1.0;
        self.draw_color = self.palette.accent;
    }

    /// Empty every store and restore the draw color, keeping the zoom
    pub fn reset_effects(&mut self) {
        self.stores.clear_all();
        self.draw_color = self.palette.accent;
    }

    /// Spawn what a pointer-down produces in the active mode
    pub fn spawn_on_down(&mut self, at: Point) {
        let mode = self.mode();
        let Self {
            stores,
            palette,
            scale,
            rng,
            ..
        } = self;
        let mut ctx = SpawnContext {
            palette,
            scale: *scale,
            rng,
        };
        match mode {
            CanvasMode::Particles => {
                for _ in 0..PARTICLE_BURST {
                    stores.particles.push(Particle::spawn(at, &mut ctx));
                }
            }
            CanvasMode::Ripples => {
                stores.ripples.push(Ripple::spawn(at, &mut ctx));
            }
            CanvasMode::Geometric => {
                stores.shapes.push(Shape::spawn(at, &mut ctx));
            }
            CanvasMode::Trails | CanvasMode::Drawing => {}
        }
    }

    /// Spawn what a pointer-move from `from` to `to` produces in the active mode
    pub fn spawn_on_move(&mut self, from: Point, to: Point) {
        let mode = self.mode();
        let Self {
            stores,
            palette,
            scale,
            draw_color,
            rng,
            ..
        } = self;
        let mut ctx = SpawnContext {
            palette,
            scale: *scale,
            rng,
        };
        match mode {
            CanvasMode::Trails => {
                stores.trails.push(TrailSegment::spawn(from, to, &mut ctx));
            }
            CanvasMode::Ripples => {
                if ctx.rng.gen::<f32>() < RIPPLE_MOVE_CHANCE {
                    stores.ripples.push(Ripple::spawn(to, &mut ctx));
                }
            }
            CanvasMode::Geometric => {
                if ctx.rng.gen::<f32>() < SHAPE_MOVE_CHANCE {
                    stores.shapes.push(Shape::spawn(to, &mut ctx));
                }
            }
            CanvasMode::Drawing => {
                stores
                    .strokes
                    .push(StrokeSegment::spawn(from, to, *draw_color, &mut ctx));
            }
            CanvasMode::Particles => {}
        }
    }

    /// Continuous particles-mode emission at each held contact
    pub fn spawn_at_contacts(&mut self, contacts: &[Point]) {
        let Self {
            stores,
            palette,
            scale,
            rng,
            ..
        } = self;
        let mut ctx = SpawnContext {
            palette,
            scale: *scale,
            rng,
        };
        for &at in contacts {
            for _ in 0..PARTICLES_PER_TOUCH {
                stores.particles.push(Particle::spawn(at, &mut ctx));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> CanvasState {
        let config = CanvasConfig {
            seed: Some(99),
            ..CanvasConfig::default()
        };
        CanvasState::new(&config, CanvasPalette::default())
    }

    fn enter(state: &mut CanvasState, mode: CanvasMode) {
        while state.mode() != mode {
            state.modes.advance();
        }
    }

    #[test]
    fn test_down_spawns_per_mode() {
        let mut state = seeded();
        state.spawn_on_down(Point::new(5.0, 5.0));
        assert!(state.stores.is_empty());

        enter(&mut state, CanvasMode::Particles);
        state.spawn_on_down(Point::new(5.0, 5.0));
        assert_eq!(state.stores.particles.len(), PARTICLE_BURST);

        enter(&mut state, CanvasMode::Ripples);
        state.spawn_on_down(Point::new(5.0, 5.0));
        assert_eq!(state.stores.ripples.len(), 1);

        enter(&mut state, CanvasMode::Geometric);
        state.spawn_on_down(Point::new(5.0, 5.0));
        assert_eq!(state.stores.shapes.len(), 1);
    }

    #[test]
    fn test_move_spawns_trail_and_stroke() {
        let mut state = seeded();
        state.spawn_on_move(Point::ZERO, Point::new(3.0, 4.0));
        assert_eq!(state.stores.trails.len(), 1);

        enter(&mut state, CanvasMode::Drawing);
        state.spawn_on_move(Point::ZERO, Point::new(3.0, 4.0));
        assert_eq!(state.stores.strokes.len(), 1);
        assert_eq!(state.stores.strokes.as_slice()[0].color, state.palette.accent);
    }

    #[test]
    fn test_probabilistic_move_spawns() {
        let mut state = seeded();
        enter(&mut state, CanvasMode::Ripples);
        for _ in 0..1000 {
            state.spawn_on_move(Point::ZERO, Point::new(1.0, 1.0));
        }
        // About 150 rings spawned, so the store has cycled through eviction
        let ripples = state.stores.ripples.len();
        assert!(ripples > 0 && ripples <= 100);

        enter(&mut state, CanvasMode::Geometric);
        for _ in 0..100 {
            state.spawn_on_move(Point::ZERO, Point::new(1.0, 1.0));
        }
        let shapes = state.stores.shapes.len();
        assert!((5..=40).contains(&shapes), "spawned {shapes} shapes");
    }

    #[test]
    fn test_contact_emission() {
        let mut state = seeded();
        state.spawn_at_contacts(&[Point::ZERO, Point::new(9.0, 9.0)]);
        assert_eq!(state.stores.particles.len(), 2 * PARTICLES_PER_TOUCH);
    }

    #[test]
    fn test_reset_session_restores_defaults() {
        let mut state = seeded();
        state.scale = 2.5;
        state.draw_color = Color::WHITE;
        state.spawn_on_move(Point::ZERO, Point::new(1.0, 0.0));

        state.reset_session();
        assert!(state.stores.is_empty());
        assert_eq!(state.scale, 1.0);
        assert_eq!(state.draw_color, state.palette.accent);
    }
}
