//! Minimal renderer surface consumed by the effect engine.
//!
//! The engine only ever needs two primitives: flooding its bounds with a
//! tint and filling a circle. Keeping those behind a trait makes the
//! animation math testable without a graphics context; a real backend maps
//! them onto whatever quad/SDF pipeline it uses.

use crate::widgets::Color;

/// Drawing primitives the effect paints with.
pub trait Renderer {
    /// Fill the entire bounds of the effect with `color`.
    fn fill_bounds(&mut self, color: Color);

    /// Fill a circle centered at `(cx, cy)` with the given radius.
    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color);
}

/// A recorded drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    FillBounds {
        color: Color,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Color,
    },
}

/// Renderer that records commands instead of drawing them.
///
/// Used by tests and headless demos to assert on the exact frame the engine
/// produced.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Renderer for RecordingRenderer {
    fn fill_bounds(&mut self, color: Color) {
        self.commands.push(DrawCommand::FillBounds { color });
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
    }
}
