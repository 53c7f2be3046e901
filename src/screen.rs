//! Screen - the root of one UI surface.
//!
//! A screen owns an ordered list of top-level controls and a window layer
//! drawn above them. It tracks whether geometry is stale and runs the layout
//! pass that makes it current again.
//!
//! # Layout states
//!
//! ```text
//!           add_control / add_window
//!   clean ───────────────────────────► dirty
//!     ▲                                  │
//!     └──────────── layout() ────────────┘
//! ```
//!
//! `layout` clears the screen's own flag and the flag of each top-level
//! control. Nested controls keep theirs, so a screen whose nested containers
//! gained children reports layout required again after the pass.

use std::io;
use std::io::Read;
use std::path::Path;

use crate::controls::{Control, Window};
use crate::error::LoadError;
use crate::layout::GuiContext;
use crate::loader::DocumentLoader;
use crate::lookup;
use crate::registry::CustomControlType;
use crate::renderer::Renderer;
use crate::types::{Rect, Rgba, Size};

#[derive(Debug)]
pub struct Screen {
    controls: Vec<Box<dyn Control>>,
    windows: Vec<Window>,
    width: f32,
    height: f32,
    is_visible: bool,
    layout_required: bool,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// An empty, visible screen that has never been laid out.
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            windows: Vec::new(),
            width: 0.0,
            height: 0.0,
            is_visible: true,
            layout_required: true,
        }
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Load with [`DocumentLoader::default`].
    ///
    /// The default loader has no skins, so a document naming any `Skin`
    /// fails with `UnknownSkin`. Build a loader with
    /// [`with_skins`](DocumentLoader::with_skins) to resolve them.
    pub fn from_reader<R: Read>(reader: R, custom: &[CustomControlType]) -> Result<Self, LoadError> {
        DocumentLoader::default().load(reader, custom)
    }

    pub fn from_reader_as<S: From<Screen>, R: Read>(
        reader: R,
        custom: &[CustomControlType],
    ) -> Result<S, LoadError> {
        DocumentLoader::default().load_as(reader, custom)
    }

    /// Load a file with [`DocumentLoader::default`]: relative paths resolve
    /// against the working directory and skins are not available.
    pub fn from_path<P: AsRef<Path>>(path: P, custom: &[CustomControlType]) -> Result<Self, LoadError> {
        DocumentLoader::default().load_path(path, custom)
    }

    pub fn from_path_as<S: From<Screen>, P: AsRef<Path>>(
        path: P,
        custom: &[CustomControlType],
    ) -> Result<S, LoadError> {
        DocumentLoader::default().load_path_as(path, custom)
    }

    // =========================================================================
    // Geometry & visibility
    // =========================================================================

    /// Width of the last layout rectangle; 0 before the first layout.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the last layout rectangle; 0 before the first layout.
    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn bounding_rectangle(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    pub fn show(&mut self) {
        self.is_visible = true;
    }

    pub fn hide(&mut self) {
        self.is_visible = false;
    }

    // =========================================================================
    // Control graph & window layer
    // =========================================================================

    pub fn controls(&self) -> &[Box<dyn Control>] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [Box<dyn Control>] {
        &mut self.controls
    }

    /// Append a top-level control and mark the screen dirty.
    pub fn add_control(&mut self, control: Box<dyn Control>) {
        self.controls.push(control);
        self.layout_required = true;
    }

    /// Remove a top-level control. Removal does not mark the screen dirty.
    pub fn remove_control(&mut self, index: usize) -> Option<Box<dyn Control>> {
        (index < self.controls.len()).then(|| self.controls.remove(index))
    }

    pub fn windows(&self) -> &[Window] {
        &self.windows
    }

    pub fn windows_mut(&mut self) -> &mut [Window] {
        &mut self.windows
    }

    /// Put a window on top of the layer and mark the screen dirty.
    pub fn add_window(&mut self, window: Window) {
        self.windows.push(window);
        self.layout_required = true;
    }

    /// Remove a window. Removal does not mark the screen dirty.
    pub fn remove_window(&mut self, index: usize) -> Option<Window> {
        (index < self.windows.len()).then(|| self.windows.remove(index))
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Own flag OR any top-level control reporting layout required.
    pub fn is_layout_required(&self) -> bool {
        self.layout_required || self.controls.iter().any(|c| c.is_layout_required())
    }

    /// Place every top-level control, then every window, inside `rectangle`.
    ///
    /// The rectangle is not validated.
    pub fn layout<C: GuiContext + ?Sized>(&mut self, context: &C, rectangle: Rect) {
        log::trace!(
            "layout {:?}: {} controls, {} windows",
            rectangle,
            self.controls.len(),
            self.windows.len()
        );

        self.width = rectangle.width;
        self.height = rectangle.height;

        for control in &mut self.controls {
            context.place_control(
                control.as_mut(),
                rectangle.x,
                rectangle.y,
                rectangle.width,
                rectangle.height,
            );
        }

        for window in &mut self.windows {
            context.place_window(window, rectangle.x, rectangle.y, rectangle.width, rectangle.height);
        }

        self.layout_required = false;
        for control in &mut self.controls {
            control.set_layout_required(false);
        }
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// First control named `name` in pre-order, if it is a `T`. Windows are
    /// not searched.
    pub fn find_control<T: Control>(&self, name: &str) -> Option<&T> {
        lookup::find_control(&self.controls, name)
    }

    pub fn find_control_mut<T: Control>(&mut self, name: &str) -> Option<&mut T> {
        lookup::find_control_mut(&mut self.controls, name)
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Outline the screen bounds. Controls are drawn by the host.
    pub fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        renderer.draw_rectangle(self.bounding_rectangle(), Rgba::GREEN)
    }
}

// =============================================================================
// GuiScreen - per-frame hooks
// =============================================================================

/// A screen as driven by a host, with overridable frame hooks.
///
/// Application screens wrap a [`Screen`] and override what they need.
pub trait GuiScreen {
    fn screen(&self) -> &Screen;

    fn screen_mut(&mut self) -> &mut Screen;

    /// Called once per frame before layout and drawing.
    fn update(&mut self, delta_seconds: f32) {
        let _ = delta_seconds;
    }

    fn draw(
        &self,
        context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        delta_seconds: f32,
    ) -> io::Result<()> {
        self.screen().draw(context, renderer, delta_seconds)
    }

    /// Release held resources. Called once by the host.
    fn dispose(&mut self) {}
}

impl GuiScreen for Screen {
    fn screen(&self) -> &Screen {
        self
    }

    fn screen_mut(&mut self) -> &mut Screen {
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
