//! Built-in control types.
//!
//! These are always present in the type registry. They carry just enough
//! properties to be useful in documents; widget behavior beyond layout and a
//! plain drawing is left to applications.

use std::io;

use serde::Deserialize;

use super::ControlBase;
use crate::impl_control;
use crate::layout::{GuiContext, string_width};
use crate::renderer::Renderer;
use crate::types::{Capabilities, Point, Rect, Rgba, Size};

fn text_origin(bounds: Rect, text: &str) -> Point {
    let width = string_width(text) as f32;
    Point::new(
        bounds.x + ((bounds.width - width) / 2.0).max(0.0).floor(),
        bounds.y + (bounds.height / 2.0).floor(),
    )
}

fn text_color(base: &ControlBase) -> Rgba {
    base.text_color.unwrap_or(Rgba::TERMINAL_DEFAULT)
}

// =============================================================================
// Panel
// =============================================================================

/// Plain container; fills its background and outlines its border when set.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Panel {
    #[serde(flatten)]
    pub base: ControlBase,
}

impl Panel {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            base: ControlBase::named(name),
        }
    }
}

impl_control!(Panel, "Panel", Capabilities::CONTAINER, {
    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        if let Some(background) = self.base.background_color {
            renderer.fill_rectangle(self.base.bounds(), background)?;
        }
        if let Some(border) = self.base.border_color {
            renderer.draw_rectangle(self.base.bounds(), border)?;
        }
        Ok(())
    }
});

// =============================================================================
// Label
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Label {
    #[serde(flatten)]
    pub base: ControlBase,
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ControlBase::default(),
            text: text.into(),
        }
    }
}

impl_control!(Label, "Label", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new(string_width(&self.text) as f32, 1.0)
    }

    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        renderer.draw_text(&self.text, self.base.bounds().origin(), text_color(&self.base))
    }
});

// =============================================================================
// Button
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Button {
    #[serde(flatten)]
    pub base: ControlBase,
    pub text: String,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            base: ControlBase::default(),
            text: text.into(),
        }
    }
}

impl_control!(Button, "Button", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new(string_width(&self.text) as f32 + 4.0, 3.0)
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
        renderer.draw_text(&self.text, text_origin(bounds, &self.text), text_color(&self.base))
    }
});

// =============================================================================
// CheckBox
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckBox {
    #[serde(flatten)]
    pub base: ControlBase,
    pub text: String,
    pub is_checked: bool,
}

impl CheckBox {
    fn caption(&self) -> String {
        let mark = if self.is_checked { 'x' } else { ' ' };
        format!("[{mark}] {}", self.text)
    }
}

impl_control!(CheckBox, "CheckBox", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new(string_width(&self.caption()) as f32, 1.0)
    }

    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        renderer.draw_text(&self.caption(), self.base.bounds().origin(), text_color(&self.base))
    }
});

// =============================================================================
// TextBox
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TextBox {
    #[serde(flatten)]
    pub base: ControlBase,
    pub text: String,
}

impl_control!(TextBox, "TextBox", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new((string_width(&self.text) as f32).max(10.0) + 2.0, 3.0)
    }

    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        let bounds = self.base.bounds();
        renderer.draw_rectangle(bounds, self.base.border_color.unwrap_or(Rgba::GRAY))?;
        renderer.draw_text(
            &self.text,
            Point::new(bounds.x + 1.0, bounds.y + 1.0),
            text_color(&self.base),
        )
    }
});

// =============================================================================
// ProgressBar
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProgressBar {
    #[serde(flatten)]
    pub base: ControlBase,
    /// Completion in 0.0..=1.0; values outside are clamped when drawn.
    pub progress: f32,
}

impl_control!(ProgressBar, "ProgressBar", Capabilities::LEAF, {
    fn desired_size(&self) -> Size {
        Size::new(10.0, 1.0)
    }

    fn draw(
        &self,
        _context: &dyn GuiContext,
        renderer: &mut dyn Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        let bounds = self.base.bounds();
        let filled = Rect {
            width: (bounds.width * self.progress.clamp(0.0, 1.0)).floor(),
            ..bounds
        };
        renderer.fill_rectangle(filled, self.base.background_color.unwrap_or(Rgba::GREEN))
    }
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Control, ControlType};

    #[test]
    fn test_label_properties() {
        let label: Label = serde_json::from_str(
            r#"{"Name": "title", "Text": "Hello", "Margin": 1, "TextColor": "yellow"}"#,
        )
        .unwrap();

        assert_eq!(label.name(), Some("title"));
        assert_eq!(label.text, "Hello");
        assert_eq!(label.base.margin.left, 1.0);
        assert_eq!(label.base.text_color, Some(Rgba::YELLOW));
        assert_eq!(label.desired_size(), Size::new(5.0, 1.0));
    }

    #[test]
    fn test_unknown_properties_ignored() {
        let button: Button = serde_json::from_str(r#"{"Text": "Go", "Tooltip": "x"}"#).unwrap();
        assert_eq!(button.text, "Go");
    }

    #[test]
    fn test_wrong_property_shape_fails() {
        assert!(serde_json::from_str::<CheckBox>(r#"{"IsChecked": "yes"}"#).is_err());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Panel::TYPE_NAME, "Panel");
        assert_eq!(ProgressBar::default().type_name(), "ProgressBar");
        assert!(Panel::default().capabilities().contains(Capabilities::CONTAIN_CHILDREN));
        assert!(!TextBox::default().capabilities().contains(Capabilities::CONTAIN_CHILDREN));
    }

    #[test]
    fn test_checkbox_caption() {
        let checkbox = CheckBox {
            text: "Sound".into(),
            is_checked: true,
            ..CheckBox::default()
        };
        assert_eq!(checkbox.caption(), "[x] Sound");
        assert_eq!(checkbox.desired_size().width, 9.0);
    }
}
