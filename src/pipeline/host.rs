//! Screen Host - per-frame lifecycle for one screen.
//!
//! # Example
//!
//! ```ignore
//! use gui_screen::{DefaultContext, Screen, ScreenHost, TerminalRenderer};
//!
//! let screen = Screen::from_path("ui/main.json", &[])?;
//! let mut host = ScreenHost::new(screen, DefaultContext);
//! let mut renderer = TerminalRenderer::new(std::io::stdout());
//!
//! host.frame(gui_screen::terminal_rect()?, &mut renderer, 0.016)?;
//! renderer.flush()?;
//! ```

use std::io;

use super::draw::{draw_controls, draw_windows};
use crate::layout::GuiContext;
use crate::renderer::Renderer;
use crate::screen::GuiScreen;
use crate::types::Rect;

// =============================================================================
// ScreenHost
// =============================================================================

/// Owns a screen and its context and runs them frame by frame.
///
/// The screen is disposed exactly once: by [`dispose`](Self::dispose) or, if
/// that was never called, when the host is dropped.
pub struct ScreenHost<S: GuiScreen, C: GuiContext> {
    screen: S,
    context: C,
    last_rect: Option<Rect>,
    disposed: bool,
}

impl<S: GuiScreen, C: GuiContext> ScreenHost<S, C> {
    pub fn new(screen: S, context: C) -> Self {
        Self {
            screen,
            context,
            last_rect: None,
            disposed: false,
        }
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut S {
        &mut self.screen
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Run one frame inside `rect`.
    ///
    /// Returns whether a layout pass ran. A disposed host does nothing.
    pub fn frame(
        &mut self,
        rect: Rect,
        renderer: &mut dyn Renderer,
        delta_seconds: f32,
    ) -> io::Result<bool> {
        if self.disposed {
            log::warn!("frame requested on a disposed screen host");
            return Ok(false);
        }

        self.screen.update(delta_seconds);

        let resized = self.last_rect != Some(rect);
        let laid_out = resized || self.screen.screen().is_layout_required();
        if laid_out {
            self.screen.screen_mut().layout(&self.context, rect);
            self.last_rect = Some(rect);
        }

        if self.screen.screen().is_visible() {
            self.draw(renderer, delta_seconds)?;
        }

        Ok(laid_out)
    }

    fn draw(&self, renderer: &mut dyn Renderer, delta_seconds: f32) -> io::Result<()> {
        let context: &dyn GuiContext = &self.context;
        let screen = self.screen.screen();

        self.screen.draw(context, renderer, delta_seconds)?;
        draw_controls(screen.controls(), context, renderer, delta_seconds)?;
        draw_windows(screen.windows(), context, renderer, delta_seconds)
    }

    /// Dispose the screen. Later calls are no-ops.
    pub fn dispose(&mut self) {
        if !self.disposed {
            self.disposed = true;
            self.screen.dispose();
            log::debug!("screen disposed");
        }
    }
}

impl<S: GuiScreen, C: GuiContext> Drop for ScreenHost<S, C> {
    fn drop(&mut self) {
        self.dispose();
    }
}

// =============================================================================
// Tests
// =============================================================================
