//! Frame loop state and per-frame rendering
//!
//! [`RenderLoop`] owns the one outstanding frame request. A loop that is
//! running always holds exactly one pending [`FrameHandle`]; stopping cancels
//! it. Frames re-request themselves only after drawing, so a loop halted by a
//! frame (screen left, host hidden, surface gone) simply never re-arms.

use crate::clock::Timestamp;
use crate::config::FadeConfig;
use crate::mode::CanvasMode;
use crate::scheduler::{FrameHandle, Scheduler};
use crate::state::CanvasState;
use calm_paint::{Point, Rect, Surface};

/// Whether frames are being requested
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Stopped,
    Running,
}

/// Frame scheduling bookkeeping
#[derive(Debug, Default)]
pub struct RenderLoop {
    state: LoopState,
    pending: Option<FrameHandle>,
    last_frame: Timestamp,
    frames: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Time of the last rendered frame, or of the last start
    pub fn last_frame(&self) -> Timestamp {
        self.last_frame
    }

    /// Frames rendered since creation
    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    /// Begin requesting frames. Returns `false` if already running.
    pub fn start<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S, now: Timestamp) -> bool {
        if self.is_running() {
            return false;
        }
        self.state = LoopState::Running;
        self.last_frame = now;
        self.pending = Some(scheduler.request_frame());
        tracing::debug!(at_ms = now.as_millis(), "render loop started");
        true
    }

    /// Cancel the pending frame. Returns `false` if already stopped.
    pub fn stop<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) -> bool {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
        if !self.is_running() {
            return false;
        }
        self.state = LoopState::Stopped;
        tracing::debug!(frames = self.frames, "render loop stopped");
        true
    }

    /// Claim a delivered frame. Returns `false` for handles this loop is not
    /// waiting on.
    pub fn accept(&mut self, handle: FrameHandle) -> bool {
        if self.pending != Some(handle) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Stop from inside a frame, after [`accept`](Self::accept) consumed the
    /// pending request
    pub fn halt(&mut self) {
        self.pending = None;
        if self.is_running() {
            self.state = LoopState::Stopped;
            tracing::debug!(frames = self.frames, "render loop halted");
        }
    }

    /// Account for a frame at `now` and return its time step in seconds
    pub fn tick(&mut self, now: Timestamp, max_dt: f32) -> f32 {
        let dt = frame_dt(now, self.last_frame, max_dt);
        self.last_frame = now;
        self.frames += 1;
        dt
    }

    /// Request the frame after this one
    pub fn schedule_next<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.is_running() {
            self.pending = Some(scheduler.request_frame());
        }
    }
}

/// Seconds between two frames, clamped to `[0, max_dt]`
pub fn frame_dt(now: Timestamp, last: Timestamp, max_dt: f32) -> f32 {
    let dt = ((now - last) / 1000.0) as f32;
    if dt.is_nan() {
        return 0.0;
    }
    dt.clamp(0.0, max_dt)
}

/// Draw one frame of the active mode.
///
/// `contacts` are the positions of the fingers currently down; particles
/// mode emits from them after drawing.
pub fn render_frame<S: Surface + ?Sized>(
    state: &mut CanvasState,
    surface: &mut S,
    dt: f32,
    fade: &FadeConfig,
    contacts: &[Point],
) {
    let mode = state.mode();
    if let Some(alpha) = mode.fade_alpha(fade) {
        surface.fill_rect(
            Rect::from_size(state.size.css_width, state.size.css_height),
            state.palette.background.with_alpha(alpha),
        );
    }

    let scale = state.scale;
    let stores = &mut state.stores;
    match mode {
        CanvasMode::Trails => stores.trails.update_and_draw(surface, dt, scale),
        CanvasMode::Particles => {
            stores.particles.update_and_draw(surface, dt, scale);
            state.spawn_at_contacts(contacts);
        }
        CanvasMode::Ripples => stores.ripples.update_and_draw(surface, dt, scale),
        CanvasMode::Geometric => stores.shapes.update_and_draw(surface, dt, scale),
        CanvasMode::Drawing => stores.strokes.update_and_draw(surface, dt, scale),
    }
}
