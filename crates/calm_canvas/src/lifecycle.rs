//! Surface acquisition, sizing, start/stop, and visibility
//!
//! The backing store is sized in device pixels while every effect draws in
//! CSS pixels; a uniform device-pixel-ratio transform bridges the two. High
//! ratios are capped so very dense screens do not pay for pixels nobody sees.

use crate::engine::CalmCanvas;
use crate::host::CanvasHost;
use calm_paint::{Surface, Transform2D};

/// Drawable area as reported by the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// CSS pixels
    pub width: f32,
    /// CSS pixels
    pub height: f32,
    /// Device pixels per CSS pixel
    pub device_pixel_ratio: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32, device_pixel_ratio: f32) -> Self {
        Self {
            width,
            height,
            device_pixel_ratio,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1024.0, 768.0, 1.0)
    }
}

/// Resolved surface dimensions
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub css_width: f32,
    pub css_height: f32,
    /// Ratio actually applied, after capping
    pub device_pixel_ratio: f32,
    pub backing_width: u32,
    pub backing_height: u32,
}

impl SurfaceSize {
    /// Apply the ratio cap and floor the backing size to whole pixels.
    /// A missing or non-positive ratio counts as 1.
    pub fn from_viewport(viewport: Viewport, max_device_pixel_ratio: f32) -> Self {
        let reported = viewport.device_pixel_ratio;
        let dpr = if reported.is_finite() && reported > 0.0 {
            reported.min(max_device_pixel_ratio)
        } else {
            1.0
        };
        let css_width = viewport.width.max(0.0);
        let css_height = viewport.height.max(0.0);
        Self {
            css_width,
            css_height,
            device_pixel_ratio: dpr,
            backing_width: (css_width * dpr).floor() as u32,
            backing_height: (css_height * dpr).floor() as u32,
        }
    }
}

impl<H: CanvasHost> CalmCanvas<H> {
    /// Acquire the surface, size it, reset the session, and start drawing.
    ///
    /// Without a surface the session is still reset but nothing is drawn and
    /// the loop stays stopped.
    pub(crate) fn init(&mut self) {
        self.render_loop.stop(&mut self.host);

        if self.surface.is_none() {
            self.surface = self.host.acquire_surface();
        }
        self.state.reset_session();
        self.pointers.reset();

        if self.surface.is_none() {
            tracing::warn!("no drawing surface available; canvas stays idle");
            return;
        }

        self.resize_surface();
        self.resize_attached = true;
        let now = self.host.now();
        self.render_loop.start(&mut self.host, now);
    }

    /// Host resize notification. Ignored while the canvas is stopped.
    pub fn on_resize(&mut self) {
        if !self.resize_attached {
            return;
        }
        self.resize_surface();
    }

    /// Stop the loop and stop following resizes. Effects are kept.
    pub fn stop(&mut self) {
        self.render_loop.stop(&mut self.host);
        self.resize_attached = false;
    }

    /// Host visibility notification.
    ///
    /// Hiding stops the loop at once. Becoming visible again restarts it if
    /// the canvas screen is still showing, with the frame clock reset so the
    /// first frame after the pause does not see the whole gap as elapsed time.
    pub fn on_visibility_change(&mut self) {
        if self.host.is_hidden() {
            if self.render_loop.stop(&mut self.host) {
                tracing::debug!("host hidden; render loop paused");
            }
            return;
        }
        if self.screen_active && self.surface.is_some() && !self.render_loop.is_running() {
            let now = self.host.now();
            self.render_loop.start(&mut self.host, now);
        }
    }

    /// Paint the whole backing store with the opaque background
    pub(crate) fn wipe_surface(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.wipe(self.state.palette.background);
        }
    }

    fn resize_surface(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let size = SurfaceSize::from_viewport(
            self.host.viewport(),
            self.config.frame.max_device_pixel_ratio,
        );
        surface.resize(size.backing_width, size.backing_height);
        surface.set_transform(Transform2D::scale_uniform(size.device_pixel_ratio));
        self.state.size = size;
        tracing::debug!(
            css_width = size.css_width,
            css_height = size.css_height,
            dpr = size.device_pixel_ratio,
            backing_width = size.backing_width,
            backing_height = size.backing_height,
            "canvas resized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_capped() {
        let size = SurfaceSize::from_viewport(Viewport::new(400.0, 300.0, 3.0), 2.0);
        assert_eq!(size.device_pixel_ratio, 2.0);
        assert_eq!((size.backing_width, size.backing_height), (800, 600));
    }

    #[test]
    fn test_backing_size_is_floored() {
        let size = SurfaceSize::from_viewport(Viewport::new(333.0, 101.0, 1.5), 2.0);
        assert_eq!((size.backing_width, size.backing_height), (499, 151));
        assert_eq!(size.css_width, 333.0);
    }

    #[test]
    fn test_missing_ratio_counts_as_one() {
        for dpr in [0.0, -2.0, f32::NAN] {
            let size = SurfaceSize::from_viewport(Viewport::new(100.0, 50.0, dpr), 2.0);
            assert_eq!(size.device_pixel_ratio, 1.0);
            assert_eq!((size.backing_width, size.backing_height), (100, 50));
        }
    }
}
