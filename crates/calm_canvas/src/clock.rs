//! Time sources for the frame loop and gesture timing.
//!
//! The engine never reads wall-clock time directly; it asks its host, which
//! reads a [`Clock`]. [`ManualClock`] is the one to use when time must be
//! stepped deterministically.

use std::ops::Sub;

/// A point in time, in milliseconds since an arbitrary host origin.
///
/// Mirrors the `DOMHighResTimeStamp` a browser passes to frame callbacks.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Timestamp(f64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0.0);

    pub const fn from_millis(ms: f64) -> Self {
        Self(ms)
    }

    pub const fn as_millis(self) -> f64 {
        self.0
    }

    /// Later timestamp, `ms` after this one
    pub fn add_millis(self, ms: f64) -> Self {
        Self(self.0 + ms)
    }
}

impl Sub for Timestamp {
    type Output = f64;

    /// Milliseconds between two timestamps (may be negative)
    fn sub(self, earlier: Timestamp) -> f64 {
        self.0 - earlier.0
    }
}

/// A source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    position: Timestamp,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self { position: start }
    }

    /// Move forward by `ms` milliseconds. Negative steps are ignored.
    pub fn advance(&mut self, ms: f64) {
        if ms > 0.0 {
            self.position = self.position.add_millis(ms);
        }
    }

    /// Jump to an absolute time. The clock may not run backwards.
    pub fn set(&mut self, at: Timestamp) {
        if at > self.position {
            self.position = at;
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.position
    }
}
