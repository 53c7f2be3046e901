//! Layout - the placement collaborator.
//!
//! A screen's layout pass hands every top-level control and window to a
//! [`GuiContext`] together with the target rectangle. The context decides
//! the final bounds. The provided methods align controls with
//! [Taffy](https://github.com/DioxusLabs/taffy) and recurse into children:
//!
//! 1. Align the control's margin box in the container (alignment + size)
//! 2. Assign the resulting bounding rectangle
//! 3. Place each child in the control's padded content rectangle
//!
//! Placement never touches dirty flags.

mod taffy_bridge;
mod text_measure;

pub use text_measure::{string_width, truncate_text};

use crate::controls::{Control, Window};
use crate::types::{HorizontalAlignment, Rect, VerticalAlignment};

use taffy_bridge::{ItemSpec, align_within};

// =============================================================================
// GuiContext
// =============================================================================

/// Host-supplied context for layout and drawing.
///
/// Both methods have working defaults; override them to plug in a different
/// placement strategy.
pub trait GuiContext {
    /// Compute and assign the bounds of a control inside the given area.
    fn place_control(&self, control: &mut dyn Control, x: f32, y: f32, width: f32, height: f32) {
        place_control(control, Rect::new(x, y, width, height));
    }

    /// Compute and assign the bounds of a window inside the given area.
    fn place_window(&self, window: &mut Window, x: f32, y: f32, width: f32, height: f32) {
        place_window(window, Rect::new(x, y, width, height));
    }
}

/// Context using the built-in placement unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultContext;

impl GuiContext for DefaultContext {}

// =============================================================================
// Placement
// =============================================================================

fn item_spec(
    control: &dyn Control,
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
) -> ItemSpec {
    let base = control.base();
    ItemSpec {
        width: base.width,
        height: base.height,
        desired: control.desired_size(),
        margin: base.margin,
        horizontal,
        vertical,
    }
}

fn aligned_bounds(control: &dyn Control, container: Rect, item: &ItemSpec) -> Rect {
    match align_within(container, item) {
        Ok(bounds) => bounds,
        Err(err) => {
            log::warn!(
                "placement of {} failed ({err}); using container bounds",
                control.type_name()
            );
            container
        }
    }
}

fn place_children(control: &mut dyn Control) {
    let content = control.bounding_rectangle().deflate(control.base().padding);
    for child in control.children_mut() {
        place_control(child.as_mut(), content);
    }
}

/// Align a control in `container` by its own alignments, then its subtree.
pub fn place_control(control: &mut dyn Control, container: Rect) {
    let base = control.base();
    let item = item_spec(control, base.horizontal_alignment, base.vertical_alignment);
    let bounds = aligned_bounds(control, container, &item);

    control.set_bounding_rectangle(bounds);
    place_children(control);
}

/// Centre a sized window in `container`; unsized windows cover it.
pub fn place_window(window: &mut Window, container: Rect) {
    let base = window.base();
    let horizontal = if base.width.is_some() {
        HorizontalAlignment::Centre
    } else {
        HorizontalAlignment::Stretch
    };
    let vertical = if base.height.is_some() {
        VerticalAlignment::Centre
    } else {
        VerticalAlignment::Stretch
    };
    let item = item_spec(window, horizontal, vertical);
    let bounds = aligned_bounds(window, container, &item);

    window.set_bounding_rectangle(bounds);
    place_children(window);
}

// =============================================================================
// Tests
// =============================================================================
