//! The canvas engine
//!
//! [`CalmCanvas`] owns every piece of canvas state and is driven entirely by
//! its host: pointer events, frame callbacks, timer callbacks, resizes, and
//! visibility changes all arrive as `&mut self` calls, so none of them can
//! interleave.
//!
//! ```
//! use calm_canvas::{CalmCanvas, CanvasMode, HeadlessHost};
//! use calm_theme::ThemePreset;
//!
//! let mut canvas = CalmCanvas::new(HeadlessHost::new());
//! canvas.enter_with_theme(ThemePreset::Forest);
//!
//! canvas.pointer_down(1, 100.0, 100.0);
//! canvas.pointer_move(1, 140.0, 120.0);
//! canvas.advance(16.0);
//! assert_eq!(canvas.state().stores.trails.len(), 1);
//!
//! // Double-tap steps to the next mode
//! canvas.pointer_up(1);
//! canvas.pointer_down(1, 100.0, 100.0);
//! assert_eq!(canvas.mode(), CanvasMode::Particles);
//! ```

use crate::config::CanvasConfig;
use crate::error::Result;
use crate::host::CanvasHost;
use crate::mode::CanvasMode;
use crate::pointer::{PointerId, PointerTracker};
use crate::render_loop::{render_frame, RenderLoop};
use crate::scheduler::{FrameHandle, TimerHandle};
use crate::state::CanvasState;
use calm_paint::Point;
use calm_theme::{CanvasPalette, ThemePreset};

/// Interactive canvas engine bound to a host
pub struct CalmCanvas<H: CanvasHost> {
    pub(crate) host: H,
    pub(crate) config: CanvasConfig,
    pub(crate) state: CanvasState,
    pub(crate) surface: Option<H::Surface>,
    pub(crate) pointers: PointerTracker,
    pub(crate) render_loop: RenderLoop,
    /// The canvas screen is the one showing
    pub(crate) screen_active: bool,
    /// Host resizes are followed
    pub(crate) resize_attached: bool,
}

impl<H: CanvasHost> CalmCanvas<H> {
    /// Engine with the default configuration
    pub fn new(host: H) -> Self {
        Self::build(host, CanvasConfig::default())
    }

    /// Engine with a custom configuration, rejected if invalid
    pub fn with_config(host: H, config: CanvasConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(host, config))
    }

    fn build(host: H, config: CanvasConfig) -> Self {
        Self {
            state: CanvasState::new(&config, CanvasPalette::default()),
            pointers: PointerTracker::new(config.gesture.clone()),
            render_loop: RenderLoop::new(),
            surface: None,
            screen_active: false,
            resize_attached: false,
            config,
            host,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn state(&self) -> &CanvasState {
        &self.state
    }

    pub fn pointers(&self) -> &PointerTracker {
        &self.pointers
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn surface(&self) -> Option<&H::Surface> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut H::Surface> {
        self.surface.as_mut()
    }

    pub fn mode(&self) -> CanvasMode {
        self.state.mode()
    }

    pub fn scale(&self) -> f32 {
        self.state.scale
    }

    pub fn is_active(&self) -> bool {
        self.screen_active
    }

    /// Show the canvas screen with the given colors, starting from the
    /// first mode with empty stores.
    pub fn enter_canvas(&mut self, palette: CanvasPalette) {
        tracing::debug!("entering canvas");
        self.screen_active = true;
        self.state.set_palette(palette);
        self.state.modes.reset();
        self.init();
        self.state
            .modes
            .show_indicator(&mut self.host, self.config.indicator_ms);
    }

    /// [`enter_canvas`](Self::enter_canvas) with a preset's palette
    pub fn enter_with_theme(&mut self, theme: ThemePreset) {
        self.enter_canvas(theme.palette());
    }

    /// [`enter_with_theme`](Self::enter_with_theme) by preset id.
    ///
    /// An unknown id is an error and leaves the canvas as it was; use
    /// [`ThemePreset::from_id_or_default`] to fall back instead.
    pub fn enter_with_theme_id(&mut self, id: &str) -> Result<()> {
        let theme = ThemePreset::from_id(id)?;
        self.enter_with_theme(theme);
        Ok(())
    }

    /// Leave the canvas screen. Effects stay in their stores.
    pub fn exit_canvas(&mut self) {
        tracing::debug!("leaving canvas");
        self.screen_active = false;
        self.stop();
    }

    pub fn pointer_down(&mut self, id: PointerId, x: f32, y: f32) {
        if !self.screen_active {
            tracing::trace!(id, "pointer down while canvas inactive");
            return;
        }
        let at = Point::new(x, y);
        let now = self.host.now();
        let down = self.pointers.pointer_down(id, at, now, self.state.scale);
        self.state.spawn_on_down(at);
        if down.double_tap {
            self.cycle_mode();
        }
    }

    pub fn pointer_move(&mut self, id: PointerId, x: f32, y: f32) {
        if !self.screen_active {
            return;
        }
        let Some(moved) = self.pointers.pointer_move(id, Point::new(x, y)) else {
            return;
        };
        self.state.spawn_on_move(moved.from, moved.to);
        if let Some(scale) = moved.scale {
            self.state.scale = scale;
        }
    }

    pub fn pointer_up(&mut self, id: PointerId) {
        self.pointers.pointer_up(id);
    }

    pub fn pointer_cancel(&mut self, id: PointerId) {
        self.pointers.pointer_cancel(id);
    }

    /// Frame callback from the host scheduler
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if !self.render_loop.accept(handle) {
            tracing::trace!("stale frame ignored");
            return;
        }
        if !self.screen_active || self.host.is_hidden() {
            self.render_loop.halt();
            return;
        }
        let Some(surface) = self.surface.as_mut() else {
            tracing::warn!("frame without a surface; stopping render loop");
            self.render_loop.halt();
            return;
        };

        let now = self.host.now();
        let dt = self.render_loop.tick(now, self.config.frame.max_dt);
        let contacts = self.pointers.positions();
        render_frame(&mut self.state, surface, dt, &self.config.fade, &contacts);
        self.render_loop.schedule_next(&mut self.host);
    }

    /// Timer callback from the host scheduler
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if !self.state.modes.on_timer(&mut self.host, handle) {
            tracing::trace!("stale timer ignored");
        }
    }

    /// Empty every store and wipe the surface, staying in the current mode
    pub fn clear(&mut self) {
        self.state.stores.clear_all();
        self.wipe_surface();
        tracing::debug!(mode = self.mode().id(), "canvas cleared");
    }

    fn cycle_mode(&mut self) {
        self.state.modes.advance();
        self.state.reset_effects();
        self.wipe_surface();
        self.state
            .modes
            .show_indicator(&mut self.host, self.config.indicator_ms);
    }
}

impl<H: CanvasHost + std::fmt::Debug> std::fmt::Debug for CalmCanvas<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalmCanvas")
            .field("host", &self.host)
            .field("mode", &self.mode())
            .field("scale", &self.state.scale)
            .field("effects", &self.state.stores.total_len())
            .field("contacts", &self.pointers.len())
            .field("loop", &self.render_loop.state())
            .field("active", &self.screen_active)
            .field("has_surface", &self.surface.is_some())
            .finish()
    }
}
