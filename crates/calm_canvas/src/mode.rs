//! Visual modes and the mode controller
//!
//! The five modes form a ring. A double-tap moves one step forward; after
//! [`CanvasMode::Drawing`] comes [`CanvasMode::Trails`] again. Every step
//! shows the new mode's label for a short while.

use crate::config::FadeConfig;
use crate::host::CanvasHost;
use crate::scheduler::TimerHandle;

/// One of the five generative modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CanvasMode {
    /// Glowing segments that follow each finger and slowly fade
    #[default]
    Trails,
    /// Bursts of drifting sparks under each finger
    Particles,
    /// Expanding rings from taps and drags
    Ripples,
    /// Rotating outlines that grow from touch points
    Geometric,
    /// Strokes that stay until cleared
    Drawing,
}

impl CanvasMode {
    /// Ring order
    pub const ALL: [CanvasMode; 5] = [
        CanvasMode::Trails,
        CanvasMode::Particles,
        CanvasMode::Ripples,
        CanvasMode::Geometric,
        CanvasMode::Drawing,
    ];

    /// Position in the ring
    pub fn index(self) -> usize {
        match self {
            Self::Trails => 0,
            Self::Particles => 1,
            Self::Ripples => 2,
            Self::Geometric => 3,
            Self::Drawing => 4,
        }
    }

    /// Mode at a ring position, wrapping past the end
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Next mode in the ring
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Trails => "trails",
            Self::Particles => "particles",
            Self::Ripples => "ripples",
            Self::Geometric => "geometric",
            Self::Drawing => "drawing",
        }
    }

    /// Text shown on the mode indicator
    pub fn label(self) -> &'static str {
        match self {
            Self::Trails => "Finger Trails",
            Self::Particles => "Particles",
            Self::Ripples => "Ripples",
            Self::Geometric => "Geometric",
            Self::Drawing => "Freeform",
        }
    }

    /// Alpha of the background fill applied before this mode draws a frame
    pub fn fade_alpha(self, fade: &FadeConfig) -> Option<f32> {
        match self {
            Self::Trails => fade.trails,
            Self::Particles => fade.particles,
            Self::Ripples => fade.ripples,
            Self::Geometric => fade.geometric,
            Self::Drawing => fade.drawing,
        }
    }
}

/// Active mode plus the pending indicator hide
#[derive(Debug, Default)]
pub struct ModeController {
    mode: CanvasMode,
    hide_timer: Option<TimerHandle>,
}

impl ModeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    /// Back to the first mode
    pub fn reset(&mut self) {
        self.mode = CanvasMode::default();
    }

    /// Step forward one mode and return it
    pub fn advance(&mut self) -> CanvasMode {
        let from = self.mode;
        self.mode = from.next();
        tracing::debug!(from = from.id(), to = self.mode.id(), "canvas mode advanced");
        self.mode
    }

    /// Push the current label to the host and (re)arm the hide timer.
    ///
    /// A hide scheduled by an earlier call is cancelled first.
    pub fn show_indicator<H: CanvasHost + ?Sized>(&mut self, host: &mut H, duration_ms: u64) {
        if let Some(pending) = self.hide_timer.take() {
            host.clear_timeout(pending);
        }
        host.show_mode_label(self.mode.label());
        self.hide_timer = Some(host.set_timeout(duration_ms as f64));
    }

    /// Handle a fired timer. Returns `true` if it was this indicator's hide.
    pub fn on_timer<H: CanvasHost + ?Sized>(&mut self, host: &mut H, handle: TimerHandle) -> bool {
        if self.hide_timer != Some(handle) {
            return false;
        }
        self.hide_timer = None;
        host.hide_mode_label();
        true
    }

    /// Whether a hide is still pending
    pub fn indicator_pending(&self) -> bool {
        self.hide_timer.is_some()
    }
}
