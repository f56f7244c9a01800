//! Paint context - a surface that records what it is asked to draw
//!
//! `PaintContext` keeps every call as a [`PaintCommand`]. Hosts that render
//! elsewhere (a GPU thread, a browser via FFI) drain it with
//! [`PaintContext::take_commands`] once per frame and replay the result;
//! tests inspect it directly.

use crate::color::Color;
use crate::path::{Path, Point};
use crate::primitives::{Circle, Rect};
use crate::surface::{StrokeStyle, Surface, Transform2D};

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    Resize { width: u32, height: u32 },
    SetTransform { transform: Transform2D },
    PushTransform { transform: Transform2D },
    PopTransform,
    Wipe { color: Color },
    FillRect { rect: Rect, color: Color },
    StrokeLine { from: Point, to: Point, style: StrokeStyle },
    FillCircle { circle: Circle, color: Color },
    StrokeCircle { circle: Circle, style: StrokeStyle },
    StrokePath { path: Path, style: StrokeStyle },
}

/// Recording surface
#[derive(Debug, Default)]
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    backing_size: (u32, u32),
    transform_depth: usize,
}

impl PaintContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Last size passed to [`Surface::resize`]
    pub fn backing_size(&self) -> (u32, u32) {
        self.backing_size
    }

    /// Number of pushed transforms not yet popped
    pub fn transform_depth(&self) -> usize {
        self.transform_depth
    }
}

impl Surface for PaintContext {
    fn resize(&mut self, width: u32, height: u32) {
        self.backing_size = (width, height);
        self.commands.push(PaintCommand::Resize { width, height });
    }

    fn set_transform(&mut self, transform: Transform2D) {
        self.commands.push(PaintCommand::SetTransform { transform });
    }

    fn push_transform(&mut self, transform: Transform2D) {
        self.transform_depth += 1;
        self.commands.push(PaintCommand::PushTransform { transform });
    }

    fn pop_transform(&mut self) {
        if self.transform_depth == 0 {
            tracing::warn!("pop_transform without matching push");
            return;
        }
        self.transform_depth -= 1;
        self.commands.push(PaintCommand::PopTransform);
    }

    fn wipe(&mut self, color: Color) {
        self.commands.push(PaintCommand::Wipe { color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(PaintCommand::FillRect { rect, color });
    }

    fn stroke_line(&mut self, from: Point, to: Point, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeLine { from, to, style });
    }

    fn fill_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(PaintCommand::FillCircle { circle, color });
    }

    fn stroke_circle(&mut self, circle: Circle, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokeCircle { circle, style });
    }

    fn stroke_path(&mut self, path: &Path, style: StrokeStyle) {
        self.commands.push(PaintCommand::StrokePath {
            path: path.clone(),
            style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut ctx = PaintContext::new();
        ctx.resize(200, 100);
        ctx.wipe(Color::BLACK);
        ctx.fill_rect(Rect::from_size(100.0, 50.0), Color::WHITE.with_alpha(0.1));

        assert_eq!(ctx.backing_size(), (200, 100));
        let cmds = ctx.take_commands();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[1], PaintCommand::Wipe { .. }));
        assert!(ctx.commands().is_empty());
    }

    #[test]
    fn test_unbalanced_pop_is_ignored() {
        let mut ctx = PaintContext::new();
        ctx.pop_transform();
        assert!(ctx.commands().is_empty());

        ctx.push_transform(Transform2D::translate(1.0, 2.0));
        assert_eq!(ctx.transform_depth(), 1);
        ctx.pop_transform();
        assert_eq!(ctx.transform_depth(), 0);
        assert_eq!(ctx.commands().len(), 2);
    }
}
