//! Renderer - drawing primitives consumed by screens and controls.
//!
//! The control graph never draws pixels itself. Screens and controls call a
//! [`Renderer`] with rectangles and text in layout units, and the renderer
//! decides what that means for its output.
//!
//! - [`TerminalRenderer`] - box-drawing output through crossterm commands

mod terminal;

pub use terminal::{TerminalRenderer, terminal_rect};

use std::io;

use crate::types::{Point, Rect, Rgba};

/// Drawing primitives used by screens and controls.
pub trait Renderer {
    /// Outline a rectangle.
    fn draw_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()>;

    /// Fill a rectangle.
    fn fill_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()>;

    /// Draw a single line of text starting at `position`.
    fn draw_text(&mut self, text: &str, position: Point, color: Rgba) -> io::Result<()>;
}

// =============================================================================
// Test support
// =============================================================================

/// One recorded renderer call.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawCommand {
    Rectangle(Rect, Rgba),
    Fill(Rect, Rgba),
    Text(String, Point, Rgba),
}

/// Renderer that records calls instead of drawing.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn draw_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()> {
        self.commands.push(DrawCommand::Rectangle(rect, color));
        Ok(())
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()> {
        self.commands.push(DrawCommand::Fill(rect, color));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Rgba) -> io::Result<()> {
        self.commands.push(DrawCommand::Text(text.to_string(), position, color));
        Ok(())
    }
}
