//! Frame and timer scheduling contract
//!
//! The engine never loops on its own. It asks the host for the next display
//! refresh with [`Scheduler::request_frame`] and keeps the returned handle;
//! the host later calls back with that handle. Cancelling is removing the
//! handle. Callbacks that arrive with a handle the engine no longer holds
//! are stale and ignored, which makes start/stop idempotent.
//!
//! [`TaskQueue`] is a ready-made handle store for hosts that pump their own
//! event loop.

use crate::clock::Timestamp;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// A requested display-refresh callback
    pub struct FrameHandle;
    /// A one-shot delayed callback
    pub struct TimerHandle;
}

/// Host-side scheduling of frame and timer callbacks.
pub trait Scheduler {
    /// Request one callback at the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a frame request. Unknown or already-fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Request one callback after `delay_ms` milliseconds.
    fn set_timeout(&mut self, delay_ms: f64) -> TimerHandle;

    /// Cancel a timer. Unknown or already-fired handles are ignored.
    fn clear_timeout(&mut self, handle: TimerHandle);
}

/// Pending frame requests and timers
#[derive(Debug, Default)]
pub struct TaskQueue {
    frames: SlotMap<FrameHandle, ()>,
    timers: SlotMap<TimerHandle, Timestamp>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_frame(&mut self) -> FrameHandle {
        self.frames.insert(())
    }

    pub fn cancel_frame(&mut self, handle: FrameHandle) -> bool {
        self.frames.remove(handle).is_some()
    }

    /// Schedule a timer due at an absolute time
    pub fn schedule_timer(&mut self, due: Timestamp) -> TimerHandle {
        self.timers.insert(due)
    }

    pub fn cancel_timer(&mut self, handle: TimerHandle) -> bool {
        self.timers.remove(handle).is_some()
    }

    /// Drain every outstanding frame request. Requests made while the
    /// drained callbacks run belong to the next refresh.
    pub fn take_frames(&mut self) -> Vec<FrameHandle> {
        self.frames.drain().map(|(handle, ())| handle).collect()
    }

    /// Remove and return the timers due at `now`, earliest first
    pub fn take_due_timers(&mut self, now: Timestamp) -> Vec<TimerHandle> {
        let mut due: Vec<(TimerHandle, Timestamp)> = self
            .timers
            .iter()
            .filter(|(_, at)| **at <= now)
            .map(|(handle, at)| (handle, *at))
            .collect();
        due.sort_by(|a, b| a.1.as_millis().total_cmp(&b.1.as_millis()));

        for (handle, _) in &due {
            self.timers.remove(*handle);
        }
        due.into_iter().map(|(handle, _)| handle).collect()
    }

    pub fn pending_frames(&self) -> usize {
        self.frames.len()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
