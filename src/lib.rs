//! # gui-screen
//!
//! Declarative screens for retained-mode UIs.
//!
//! A screen document (JSON) names a tree of controls by type discriminator.
//! Loading materializes that tree into owned control objects, a layout pass
//! assigns each control its bounds, and a host draws the result every frame.
//!
//! ## Architecture
//!
//! ```text
//! document ─► DocumentLoader ─► Screen (controls + windows)
//!                  ▲                 │
//!            TypeRegistry        layout(GuiContext, rect)
//!            SkinResolver            │
//!                                    ▼
//!                       ScreenHost::frame ─► Renderer
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Geometry, colors, alignment and capability flags
//! - [`controls`] - The `Control` trait, built-in controls and windows
//! - [`registry`] - Type discriminator to constructor mapping
//! - [`skin`] - Named styles applied while loading
//! - [`loader`] - Document format and the loader
//! - [`layout`] - Placement via Taffy and the `GuiContext` seam
//! - [`lookup`] - Name-based control lookup
//! - [`screen`] - The screen and its frame hooks
//! - [`renderer`] - Drawing primitives and the terminal backend
//! - [`pipeline`] - Per-frame host and draw traversal

pub mod controls;
pub mod error;
pub mod layout;
pub mod loader;
pub mod lookup;
pub mod pipeline;
pub mod registry;
pub mod renderer;
pub mod screen;
pub mod skin;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use controls::{
    Button, CheckBox, Control, ControlBase, ControlType, Label, Panel, ProgressBar, TextBox,
    Window,
};

pub use error::{ControlError, DeserializationError, LoadError};

pub use layout::{DefaultContext, GuiContext, place_control, place_window, string_width};

pub use loader::{ControlDescriptor, DocumentLoader, ScreenDocument};

pub use registry::{ControlFactory, CustomControlType, TypeRegistry};

pub use renderer::{Renderer, TerminalRenderer, terminal_rect};

pub use screen::{GuiScreen, Screen};

pub use skin::{SkinResolver, SkinService, Style};

pub use pipeline::{ScreenHost, draw_controls, draw_windows};
