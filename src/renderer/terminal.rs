//! Terminal renderer.
//!
//! Draws with box-drawing glyphs and queued crossterm commands. Nothing
//! reaches the sink until [`TerminalRenderer::flush`] is called.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};

use super::Renderer;
use crate::types::{Point, Rect, Rgba};

/// Convert a layout coordinate to a cell index.
///
/// Negative and non-finite values have no cell.
fn to_cell(value: f32) -> Option<u16> {
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some(value.round().min(u16::MAX as f32) as u16)
}

/// Origin and extent of `rect` in cells, clipped so the far edge stays
/// inside the addressable cell space.
fn to_cells(rect: Rect) -> Option<(u16, u16, u16, u16)> {
    let (x, y) = (to_cell(rect.x)?, to_cell(rect.y)?);
    let (right, bottom) = (to_cell(rect.right())?, to_cell(rect.bottom())?);
    Some((x, y, right.saturating_sub(x), bottom.saturating_sub(y)))
}

fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r,
            g: color.g,
            b: color.b,
        }
    }
}

/// Terminal size as a rectangle at the origin.
pub fn terminal_rect() -> io::Result<Rect> {
    let (width, height) = crossterm::terminal::size()?;
    Ok(Rect::new(0.0, 0.0, width as f32, height as f32))
}

/// Renderer writing crossterm commands to any `Write` sink.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write all queued commands to the sink.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn draw_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()> {
        let Some((x, y, width, height)) = to_cells(rect) else {
            return Ok(());
        };
        if width < 2 || height < 2 {
            return Ok(());
        }

        let horizontal = "─".repeat(width as usize - 2);
        let right = x + width - 1;
        let bottom = y + height - 1;

        queue!(
            self.out,
            SetForegroundColor(to_color(color)),
            MoveTo(x, y),
            Print(format!("┌{horizontal}┐")),
            MoveTo(x, bottom),
            Print(format!("└{horizontal}┘"))
        )?;
        for row in y + 1..bottom {
            queue!(self.out, MoveTo(x, row), Print('│'), MoveTo(right, row), Print('│'))?;
        }
        queue!(self.out, ResetColor)
    }

    fn fill_rectangle(&mut self, rect: Rect, color: Rgba) -> io::Result<()> {
        let Some((x, y, width, height)) = to_cells(rect) else {
            return Ok(());
        };
        if width == 0 || height == 0 {
            return Ok(());
        }

        let blank = " ".repeat(width as usize);
        queue!(self.out, SetBackgroundColor(to_color(color)))?;
        for row in y..y.saturating_add(height) {
            queue!(self.out, MoveTo(x, row), Print(&blank))?;
        }
        queue!(self.out, ResetColor)
    }

    fn draw_text(&mut self, text: &str, position: Point, color: Rgba) -> io::Result<()> {
        let (Some(x), Some(y)) = (to_cell(position.x), to_cell(position.y)) else {
            return Ok(());
        };
        queue!(
            self.out,
            MoveTo(x, y),
            SetForegroundColor(to_color(color)),
            Print(text),
            ResetColor
        )
    }
}
