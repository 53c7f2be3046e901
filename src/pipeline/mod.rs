//! Frame Pipeline
//!
//! Drives a screen through its per-frame cycle and walks the control graph
//! for drawing.
//!
//! # Frame
//!
//! ```text
//! update(delta) → layout (if required or resized) → draw screen → draw controls → draw windows
//! ```
//!
//! ## Draw order
//!
//! - The screen draws first (its outline)
//! - Top-level controls in list order, each before its children
//! - Windows last, bottom of the layer first, each followed by its children
//!
//! Hidden controls are skipped together with their subtree.

mod draw;
mod host;

pub use draw::{draw_controls, draw_windows};
pub use host::ScreenHost;
