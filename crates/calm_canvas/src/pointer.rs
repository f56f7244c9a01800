//! Pointer tracking and gesture recognition
//!
//! Keeps one [`PointerContact`] per active pointer id and turns the raw
//! down/move/up stream into two gestures:
//!
//! - **double-tap**: two downs within the configured window and radius.
//!   A recognized double-tap consumes both taps, so a third quick tap starts
//!   a new pair instead of chaining.
//! - **pinch**: while exactly two contacts are down, the ratio of their
//!   current distance to the distance when the second finger landed scales
//!   the zoom factor captured at that moment.

use crate::clock::Timestamp;
use crate::config::GestureConfig;
use calm_paint::Point;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Host-assigned pointer identifier
pub type PointerId = i32;

/// An active touch or pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerContact {
    pub id: PointerId,
    pub position: Point,
    /// Position before the latest move
    pub previous: Point,
}

#[derive(Clone, Copy, Debug)]
struct TapRecord {
    at: Timestamp,
    position: Point,
}

#[derive(Clone, Copy, Debug)]
struct PinchBaseline {
    distance: f32,
    scale: f32,
}

/// What a pointer-down resolved to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDown {
    pub position: Point,
    /// This down completed a double-tap
    pub double_tap: bool,
    /// This down brought the contact count to two and armed a pinch
    pub pinch_started: bool,
}

/// What a pointer-move resolved to
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerMove {
    pub from: Point,
    pub to: Point,
    /// New zoom factor when the move is part of a pinch
    pub scale: Option<f32>,
}

/// Active contacts plus tap and pinch memory
#[derive(Debug)]
pub struct PointerTracker {
    contacts: FxHashMap<PointerId, PointerContact>,
    last_tap: Option<TapRecord>,
    pinch: Option<PinchBaseline>,
    config: GestureConfig,
}

impl PointerTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            contacts: FxHashMap::default(),
            last_tap: None,
            pinch: None,
            config,
        }
    }

    /// Forget every contact, the last tap, and any pinch in progress
    pub fn reset(&mut self) {
        self.contacts.clear();
        self.last_tap = None;
        self.pinch = None;
    }

    /// Number of active contacts
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contact(&self, id: PointerId) -> Option<&PointerContact> {
        self.contacts.get(&id)
    }

    /// Current positions of every active contact
    pub fn positions(&self) -> SmallVec<[Point; 4]> {
        self.contacts.values().map(|c| c.position).collect()
    }

    pub fn is_pinching(&self) -> bool {
        self.pinch.is_some()
    }

    /// Register a contact and classify the down.
    ///
    /// `scale` is the zoom factor in effect now; it becomes the pinch base if
    /// this down makes two contacts.
    pub fn pointer_down(
        &mut self,
        id: PointerId,
        position: Point,
        now: Timestamp,
        scale: f32,
    ) -> PointerDown {
        if self
            .contacts
            .insert(
                id,
                PointerContact {
                    id,
                    position,
                    previous: position,
                },
            )
            .is_some()
        {
            tracing::trace!(id, "pointer down replaced an existing contact");
        }

        let double_tap = match self.last_tap {
            Some(tap)
                if now - tap.at < self.config.double_tap_ms as f64
                    && position.distance(tap.position) < self.config.double_tap_radius =>
            {
                self.last_tap = None;
                true
            }
            _ => {
                self.last_tap = Some(TapRecord { at: now, position });
                false
            }
        };

        let pinch_started = self.contacts.len() == 2;
        if pinch_started {
            let distance = self.pair_distance().unwrap_or(0.0);
            self.pinch = Some(PinchBaseline { distance, scale });
            tracing::trace!(distance, scale, "pinch baseline recorded");
        }

        PointerDown {
            position,
            double_tap,
            pinch_started,
        }
    }

    /// Move a known contact. Unknown ids return `None`.
    pub fn pointer_move(&mut self, id: PointerId, position: Point) -> Option<PointerMove> {
        let Some(contact) = self.contacts.get_mut(&id) else {
            tracing::trace!(id, "move for unknown pointer ignored");
            return None;
        };
        contact.previous = contact.position;
        contact.position = position;
        let from = contact.previous;

        let scale = match self.pinch {
            Some(base) if self.contacts.len() == 2 && base.distance > 0.0 => {
                self.pair_distance().map(|d| {
                    (base.scale * d / base.distance)
                        .clamp(self.config.min_scale, self.config.max_scale)
                })
            }
            _ => None,
        };

        Some(PointerMove {
            from,
            to: position,
            scale,
        })
    }

    /// Lift a contact. Returns `false` for unknown ids.
    pub fn pointer_up(&mut self, id: PointerId) -> bool {
        let removed = self.contacts.remove(&id).is_some();
        if !removed {
            tracing::trace!(id, "up for unknown pointer ignored");
        }
        if self.contacts.len() < 2 {
            self.pinch = None;
        }
        removed
    }

    /// Cancelled pointers are treated exactly like lifted ones
    pub fn pointer_cancel(&mut self, id: PointerId) -> bool {
        self.pointer_up(id)
    }

    fn pair_distance(&self) -> Option<f32> {
        let mut it = self.contacts.values();
        let a = it.next()?;
        let b = it.next()?;
        Some(a.position.distance(b.position))
    }
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
