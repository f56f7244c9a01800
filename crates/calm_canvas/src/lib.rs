//! Calm Station Canvas
//!
//! A touch-driven generative canvas: five visual modes (glowing trails,
//! drifting particles, expanding ripples, rotating geometry, and freehand
//! drawing), double-tap to change mode, pinch to zoom.
//!
//! # Architecture
//!
//! - [`pointer`]: contact tracking, double-tap and pinch recognition
//! - [`effects`]: the five primitive kinds and their bounded stores
//! - [`render_loop`]: frame scheduling, time step, fade policy, dispatch
//! - [`mode`]: the mode ring and its on-screen label
//! - [`lifecycle`]: surface sizing, start/stop, visibility
//! - [`host`]: what the embedder provides, plus an in-memory host
//!
//! The engine never owns a thread or an event loop. Everything flows through
//! [`CalmCanvas`], which the host calls into for input, frames, and timers.

pub mod clock;
pub mod config;
pub mod effects;
pub mod engine;
pub mod error;
pub mod host;
pub mod lifecycle;
pub mod mode;
pub mod pointer;
pub mod render_loop;
pub mod scheduler;
pub mod state;

pub use clock::{Clock, ManualClock, Timestamp};
pub use config::{CanvasConfig, FadeConfig, FrameConfig, GestureConfig, StoreLimit, StoreLimits};
pub use effects::{
    Effect, EffectStore, EffectStores, Particle, Ripple, Shape, ShapeKind, SpawnContext,
    StrokeSegment, TrailSegment,
};
pub use engine::CalmCanvas;
pub use error::{CanvasError, Result};
pub use host::{CanvasHost, HeadlessHost};
pub use lifecycle::{SurfaceSize, Viewport};
pub use mode::{CanvasMode, ModeController};
pub use pointer::{PointerContact, PointerDown, PointerId, PointerMove, PointerTracker};
pub use render_loop::{LoopState, RenderLoop};
pub use scheduler::{FrameHandle, Scheduler, TaskQueue, TimerHandle};
pub use state::CanvasState;
