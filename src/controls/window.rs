//! Floating windows.
//!
//! Windows live in the screen's window layer, above the control graph.
//! They never appear in documents; host code creates them at runtime.

use std::any::Any;
use std::io;

use super::{Control, ControlBase};
use crate::layout::{GuiContext, truncate_text};
use crate::renderer::Renderer;
use crate::types::{Capabilities, Point, Rgba};

/// A floating, titled container.
#[derive(Debug)]
pub struct Window {
    base: ControlBase,
    pub title: String,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            base: ControlBase::default(),
            title: title.into(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.base.name = Some(name.into());
        self
    }

    /// Explicit size; windows without one cover the whole container.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.base.width = Some(width);
        self.base.height = Some(height);
        self
    }
}

impl Control for Window {
    fn base(&self) -> &ControlBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ControlBase {
        &mut self.base
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        "Window"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::CONTAINER
    }

    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        let bounds = self.base.bounds();
        if let Some(background) = self.base.background_color {
            renderer.fill_rectangle(bounds, background)?;
        }
        renderer.draw_rectangle(bounds, self.base.border_color.unwrap_or(Rgba::WHITE))?;
        // title sits on the top border between the corners
        let title = truncate_text(&self.title, (bounds.width - 4.0).max(0.0) as u16);
        if !title.is_empty() {
            renderer.draw_text(
                &title,
                Point::new(bounds.x + 2.0, bounds.y),
                self.base.text_color.unwrap_or(Rgba::TERMINAL_DEFAULT),
            )?;
        }
        Ok(())
    }
}
