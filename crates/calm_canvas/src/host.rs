//! The boundary between the engine and whatever embeds it
//!
//! A host supplies a drawing surface, the viewport, time, visibility, frame
//! and timer scheduling, and somewhere to show the mode label. Browsers,
//! native windows, and tests each implement [`CanvasHost`] once.

use crate::clock::{Clock, ManualClock, Timestamp};
use crate::engine::CalmCanvas;
use crate::lifecycle::Viewport;
use crate::scheduler::{FrameHandle, Scheduler, TaskQueue, TimerHandle};
use calm_paint::{PaintCommand, PaintContext, Surface};

/// Services the canvas engine needs from its embedder
pub trait CanvasHost: Scheduler {
    type Surface: Surface;

    /// Hand over the drawing surface, if one exists yet
    fn acquire_surface(&mut self) -> Option<Self::Surface>;

    fn viewport(&self) -> Viewport;

    fn now(&self) -> Timestamp;

    /// Whether the page or window is currently hidden
    fn is_hidden(&self) -> bool;

    fn show_mode_label(&mut self, label: &str);

    fn hide_mode_label(&mut self);
}

/// In-memory host driven by hand.
///
/// Draws into a [`PaintContext`], keeps time with a [`ManualClock`], and
/// queues frames and timers until [`CalmCanvas::advance`] delivers them.
/// After each delivered frame the surface is drained into
/// [`last_frame`](Self::last_frame), so the recording never outgrows one frame.
#[derive(Debug)]
pub struct HeadlessHost {
    clock: ManualClock,
    queue: TaskQueue,
    viewport: Viewport,
    hidden: bool,
    surface_available: bool,
    label: Option<String>,
    label_visible: bool,
    last_frame: Vec<PaintCommand>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::with_viewport(Viewport::default())
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            clock: ManualClock::new(Timestamp::from_millis(1000.0)),
            queue: TaskQueue::new(),
            viewport,
            hidden: false,
            surface_available: true,
            label: None,
            label_visible: false,
            last_frame: Vec::new(),
        }
    }

    /// A host that can never provide a surface
    pub fn without_surface(mut self) -> Self {
        self.surface_available = false;
        self
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn clock_mut(&mut self) -> &mut ManualClock {
        &mut self.clock
    }

    pub fn queue(&self) -> &TaskQueue {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut TaskQueue {
        &mut self.queue
    }

    /// Label currently on screen
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref().filter(|_| self.label_visible)
    }

    pub fn label_visible(&self) -> bool {
        self.label_visible
    }

    /// Commands recorded up to and including the most recent frame, in
    /// replay order. Wipes issued between frames lead the list.
    pub fn last_frame(&self) -> &[PaintCommand] {
        &self.last_frame
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for HeadlessHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.queue.request_frame()
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle {
        let due = self.clock.now().add_millis(delay_ms.max(0.0));
        self.queue.schedule_timer(due)
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.queue.cancel_timer(handle);
    }
}

impl CanvasHost for HeadlessHost {
    type Surface = PaintContext;

    fn acquire_surface(&mut self) -> Option<PaintContext> {
        self.surface_available.then(PaintContext::new)
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn now(&self) -> Timestamp {
        self.clock.now()
    }

    fn is_hidden(&self) -> bool {
        self.hidden
    }

    fn show_mode_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
        self.label_visible = true;
    }

    fn hide_mode_label(&mut self) {
        self.label_visible = false;
    }
}

impl CalmCanvas<HeadlessHost> {
    /// Move the clock forward by `ms`, fire due timers, then deliver the
    /// frames requested so far, handing each one's commands to
    /// [`HeadlessHost::last_frame`]. Returns the number of frames delivered.
    pub fn advance(&mut self, ms: f64) -> usize {
        self.host.clock.advance(ms);
        let now = self.host.clock.now();

        for timer in self.host.queue.take_due_timers(now) {
            self.on_timer(timer);
        }

        let frames = self.host.queue.take_frames();
        let delivered = frames.len();
        for frame in frames {
            self.on_frame(frame);
            if let Some(surface) = self.surface.as_mut() {
                self.host.last_frame = surface.take_commands();
            }
        }
        delivered
    }

    /// Run `count` display refreshes spaced `frame_ms` apart
    pub fn run_frames(&mut self, count: usize, frame_ms: f64) -> usize {
        (0..count).map(|_| self.advance(frame_ms)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_is_relative_to_clock() {
        let mut host = HeadlessHost::new();
        host.clock_mut().advance(500.0);
        let timer = host.set_timeout(100.0);

        assert!(host
            .queue_mut()
            .take_due_timers(Timestamp::from_millis(1599.0))
            .is_empty());
        assert_eq!(
            host.queue_mut()
                .take_due_timers(Timestamp::from_millis(1600.0)),
            vec![timer]
        );
    }

    #[test]
    fn test_hidden_label_reports_none() {
        let mut host = HeadlessHost::new();
        host.show_mode_label("Ripples");
        assert_eq!(host.label(), Some("Ripples"));
        host.hide_mode_label();
        assert_eq!(host.label(), None);
        assert!(!host.label_visible());
    }

    #[test]
    fn test_without_surface() {
        let mut host = HeadlessHost::new().without_surface();
        assert!(host.acquire_surface().is_none());
    }
}
