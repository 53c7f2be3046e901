//! Control Graph - the polymorphic node type and its shared state.
//!
//! Controls are trait objects owned by exactly one collection: the screen's
//! top-level list or a parent's child list. Each concrete type composes a
//! [`ControlBase`] and implements [`Control`], usually via [`impl_control!`].
//!
//! # Invalidation
//!
//! ```text
//! add_control ──► parent.layout_required = true
//! is_layout_required = own flag || any child.is_layout_required()
//! ```
//!
//! The query recurses on every read and is never cached. Only a layout pass
//! clears flags, and only on the controls it is told to clear.

mod builtin;
mod window;

use std::any::Any;
use std::fmt;
use std::io;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ControlError;
use crate::layout::GuiContext;
use crate::renderer::Renderer;
use crate::types::{Capabilities, HorizontalAlignment, Rect, Rgba, Size, Thickness, VerticalAlignment};

pub use builtin::*;
pub use window::Window;

// =============================================================================
// impl_control! macro
// =============================================================================

/// Implements [`Control`] and [`ControlType`] for a struct holding its
/// [`ControlBase`] in a field named `base`.
///
/// ```ignore
/// impl_control!(Slider, "Slider", Capabilities::LEAF, {
///     fn desired_size(&self) -> Size { Size::new(10.0, 1.0) }
/// });
/// ```
#[macro_export]
macro_rules! impl_control {
    ($ty:ty, $name:literal, $caps:expr $(, { $($extra:tt)* })?) => {
        impl $crate::controls::Control for $ty {
            fn base(&self) -> &$crate::controls::ControlBase {
                &self.base
            }

            fn base_mut(&mut self) -> &mut $crate::controls::ControlBase {
                &mut self.base
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn type_name(&self) -> &'static str {
                $name
            }

            fn capabilities(&self) -> $crate::types::Capabilities {
                $caps
            }

            $($($extra)*)?
        }

        impl $crate::controls::ControlType for $ty {
            const TYPE_NAME: &'static str = $name;
        }
    };
}

// =============================================================================
// ControlBase
// =============================================================================

/// State shared by every control: document properties, layout output and
/// the owned child list.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ControlBase {
    /// Lookup name. Uniqueness is not enforced.
    pub name: Option<String>,
    /// Explicit width; `None` sizes from alignment or content.
    pub width: Option<f32>,
    /// Explicit height; `None` sizes from alignment or content.
    pub height: Option<f32>,
    pub margin: Thickness,
    pub padding: Thickness,
    pub horizontal_alignment: HorizontalAlignment,
    pub vertical_alignment: VerticalAlignment,
    pub background_color: Option<Rgba>,
    pub border_color: Option<Rgba>,
    pub text_color: Option<Rgba>,
    /// Name of the skin this control was styled with, if any.
    pub skin: Option<String>,
    pub is_visible: bool,

    #[serde(skip)]
    bounds: Rect,
    #[serde(skip)]
    layout_required: bool,
    #[serde(skip)]
    controls: Vec<Box<dyn Control>>,
}

impl Default for ControlBase {
    fn default() -> Self {
        Self {
            name: None,
            width: None,
            height: None,
            margin: Thickness::ZERO,
            padding: Thickness::ZERO,
            horizontal_alignment: HorizontalAlignment::default(),
            vertical_alignment: VerticalAlignment::default(),
            background_color: None,
            border_color: None,
            text_color: None,
            skin: None,
            is_visible: true,
            bounds: Rect::ZERO,
            layout_required: false,
            controls: Vec::new(),
        }
    }
}

impl ControlBase {
    /// Base state with a lookup name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn controls(&self) -> &[Box<dyn Control>] {
        &self.controls
    }

    pub fn controls_mut(&mut self) -> &mut [Box<dyn Control>] {
        &mut self.controls
    }

    /// Append a child and mark this node dirty.
    pub(crate) fn push_control(&mut self, control: Box<dyn Control>) {
        self.controls.push(control);
        self.layout_required = true;
    }

    /// Remove a child. Removal does not mark this node dirty.
    pub fn remove_control(&mut self, index: usize) -> Option<Box<dyn Control>> {
        (index < self.controls.len()).then(|| self.controls.remove(index))
    }
}

// =============================================================================
// Control trait
// =============================================================================

/// A node in the control graph.
///
/// Implementors supply access to their [`ControlBase`] plus type identity;
/// everything else has a provided implementation.
pub trait Control: Any + fmt::Debug {
    fn base(&self) -> &ControlBase;

    fn base_mut(&mut self) -> &mut ControlBase;

    /// For downcasting.
    fn as_any(&self) -> &dyn Any;

    /// For downcasting.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// The discriminator this type is registered under.
    fn type_name(&self) -> &'static str;

    fn capabilities(&self) -> Capabilities {
        Capabilities::LEAF
    }

    /// Intrinsic size, used on axes with no explicit size that are not stretched.
    fn desired_size(&self) -> Size {
        Size::ZERO
    }

    /// Draw this control only; children are drawn by the caller.
    fn draw(
        &self,
        context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        delta_seconds: f32,
    ) -> io::Result<()> {
        let _ = (context, renderer, delta_seconds);
        Ok(())
    }

    fn name(&self) -> Option<&str> {
        self.base().name.as_deref()
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible
    }

    fn bounding_rectangle(&self) -> Rect {
        self.base().bounds
    }

    /// Assigned by placement only.
    fn set_bounding_rectangle(&mut self, bounds: Rect) {
        self.base_mut().bounds = bounds;
    }

    fn children(&self) -> &[Box<dyn Control>] {
        self.base().controls()
    }

    fn children_mut(&mut self) -> &mut [Box<dyn Control>] {
        self.base_mut().controls_mut()
    }

    /// Append a child, marking this control dirty.
    fn add_control(&mut self, control: Box<dyn Control>) -> Result<(), ControlError> {
        if !self.capabilities().contains(Capabilities::CONTAIN_CHILDREN) {
            return Err(ControlError::ChildrenNotSupported(self.type_name()));
        }
        self.base_mut().push_control(control);
        Ok(())
    }

    /// Own flag OR any child reporting layout required.
    fn is_layout_required(&self) -> bool {
        self.base().layout_required || self.children().iter().any(|c| c.is_layout_required())
    }

    /// Sets or clears this control's own flag. Children are untouched.
    fn set_layout_required(&mut self, required: bool) {
        self.base_mut().layout_required = required;
    }
}

impl dyn Control {
    pub fn is<T: Control>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Control>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Control>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }
}

/// A control type that can be built from a document descriptor.
pub trait ControlType: Control + DeserializeOwned {
    /// Discriminator used in the `Type` field of a descriptor.
    const TYPE_NAME: &'static str;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_defaults() {
        let base = ControlBase::default();
        assert!(base.is_visible);
        assert_eq!(base.bounds(), Rect::ZERO);
        assert_eq!(base.horizontal_alignment, HorizontalAlignment::Stretch);
        assert!(base.controls().is_empty());
    }

    #[test]
    fn test_new_control_is_clean() {
        let label = Label::new("hi");
        assert!(!label.is_layout_required());
    }

    #[test]
    fn test_add_control_marks_parent_dirty() {
        let mut panel = Panel::default();
        assert!(!panel.is_layout_required());

        panel.add_control(Box::new(Label::new("a"))).unwrap();
        assert!(panel.is_layout_required());
        assert_eq!(panel.children().len(), 1);
    }

    #[test]
    fn test_leaf_rejects_children() {
        let mut label = Label::new("leaf");
        let result = label.add_control(Box::new(Label::new("child")));
        assert_eq!(result, Err(ControlError::ChildrenNotSupported("Label")));
        assert!(!label.is_layout_required());
    }

    #[test]
    fn test_dirty_query_recurses_through_children() {
        let mut inner = Panel::default();
        inner.add_control(Box::new(Label::new("deep"))).unwrap();

        let mut outer = Panel::default();
        outer.add_control(Box::new(inner)).unwrap();
        outer.set_layout_required(false);

        // own flag cleared, but the nested panel is still dirty
        assert!(outer.is_layout_required());

        outer.children_mut()[0].set_layout_required(false);
        assert!(!outer.is_layout_required());
    }

    #[test]
    fn test_remove_control_keeps_flag() {
        let mut panel = Panel::default();
        panel.add_control(Box::new(Label::new("a"))).unwrap();
        panel.set_layout_required(false);

        let removed = panel.base_mut().remove_control(0);
        assert!(removed.is_some());
        assert!(!panel.is_layout_required());
        assert!(panel.base_mut().remove_control(0).is_none());
    }

    #[test]
    fn test_downcast() {
        let control: Box<dyn Control> = Box::new(Button::new("OK"));
        assert!(control.is::<Button>());
        assert!(control.downcast_ref::<Label>().is_none());
        assert_eq!(control.downcast_ref::<Button>().map(|b| b.text.as_str()), Some("OK"));
    }
}
