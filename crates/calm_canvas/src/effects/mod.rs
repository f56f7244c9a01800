//! Effect primitives and their bounded stores
//!
//! Each visual mode draws one kind of primitive. Primitives live in an
//! [`EffectStore`], an insertion-ordered list with a hard cap: the push that
//! takes it past the cap drops a batch of the oldest entries at once.
//!
//! Every frame the active store is walked once by
//! [`EffectStore::update_and_draw`], which ages each entry, drops the ones
//! whose life ran out, and draws the survivors.

mod particles;
mod ripples;
mod shapes;
mod strokes;
mod trails;

pub use particles::Particle;
pub use ripples::Ripple;
pub use shapes::{Shape, ShapeKind};
pub use strokes::StrokeSegment;
pub use trails::TrailSegment;

use crate::config::{StoreLimit, StoreLimits};
use calm_paint::{Color, Surface};
use calm_theme::CanvasPalette;
use rand::rngs::StdRng;
use rand::Rng;

/// A drawable primitive with a lifetime
pub trait Effect {
    /// Advance by `dt` seconds. Returns `false` once the entry has expired
    /// and must not be drawn again.
    fn age(&mut self, dt: f32) -> bool;

    /// Paint this entry. `scale` is the current pinch zoom.
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, scale: f32);
}

/// Bounded, insertion-ordered store of effect entries
#[derive(Clone, Debug)]
pub struct EffectStore<T> {
    items: Vec<T>,
    limit: StoreLimit,
}

impl<T> EffectStore<T> {
    pub fn new(limit: StoreLimit) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    /// Append an entry, evicting the oldest batch if the cap is exceeded.
    ///
    /// Returns the number of entries evicted.
    pub fn push(&mut self, item: T) -> usize {
        self.items.push(item);
        if self.items.len() <= self.limit.cap {
            return 0;
        }
        let evicted = self.limit.evict.min(self.items.len());
        self.items.drain(..evicted);
        tracing::trace!(
            evicted,
            remaining = self.items.len(),
            cap = self.limit.cap,
            "effect store over capacity"
        );
        evicted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Entries, oldest first
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Effect> EffectStore<T> {
    /// Age every entry, drop the expired ones, and draw the rest in order
    pub fn update_and_draw<S: Surface + ?Sized>(&mut self, surface: &mut S, dt: f32, scale: f32) {
        self.items.retain_mut(|item| {
            if !item.age(dt) {
                return false;
            }
            item.draw(surface, scale);
            true
        });
    }
}

impl<'a, T> IntoIterator for &'a EffectStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Inputs every spawner draws from
pub struct SpawnContext<'a> {
    pub palette: &'a CanvasPalette,
    pub scale: f32,
    pub rng: &'a mut StdRng,
}

impl SpawnContext<'_> {
    /// Accent most of the time, secondary otherwise
    pub fn pick_color(&mut self) -> Color {
        if self.rng.gen::<f32>() > 0.3 {
            self.palette.accent
        } else {
            self.palette.secondary
        }
    }
}

/// The five stores, one per mode
#[derive(Clone, Debug)]
pub struct EffectStores {
    pub trails: EffectStore<TrailSegment>,
    pub particles: EffectStore<Particle>,
    pub ripples: EffectStore<Ripple>,
    pub shapes: EffectStore<Shape>,
    pub strokes: EffectStore<StrokeSegment>,
}

impl EffectStores {
    pub fn new(limits: &StoreLimits) -> Self {
        Self {
            trails: EffectStore::new(limits.trails),
            particles: EffectStore::new(limits.particles),
            ripples: EffectStore::new(limits.ripples),
            shapes: EffectStore::new(limits.shapes),
            strokes: EffectStore::new(limits.strokes),
        }
    }

    pub fn clear_all(&mut self) {
        self.trails.clear();
        self.particles.clear();
        self.ripples.clear();
        self.shapes.clear();
        self.strokes.clear();
    }

    /// Entries across all stores
    pub fn total_len(&self) -> usize {
        self.trails.len()
            + self.particles.len()
            + self.ripples.len()
            + self.shapes.len()
            + self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_len() == 0
    }
}

impl Default for EffectStores {
    fn default() -> Self {
        Self::new(&StoreLimits::default())
    }
}
