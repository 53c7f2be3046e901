//! Control graph traversal for drawing.

use std::io;

use crate::controls::{Control, Window};
use crate::layout::GuiContext;
use crate::renderer::Renderer;

/// Draw `controls` in pre-order, skipping hidden subtrees.
pub fn draw_controls(
    controls: &[Box<dyn Control>],
    context: &dyn GuiContext,
    renderer: &mut dyn Renderer,
    delta_seconds: f32,
) -> io::Result<()> {
    for control in controls.iter().filter(|c| c.is_visible()) {
        control.draw(context, renderer, delta_seconds)?;
        draw_controls(control.children(), context, renderer, delta_seconds)?;
    }
    Ok(())
}

/// Draw the window layer bottom to top, each window above the previous one's
/// children.
pub fn draw_windows(
    windows: &[Window],
    context: &dyn GuiContext,
    renderer: &mut dyn Renderer,
    delta_seconds: f32,
) -> io::Result<()> {
    for window in windows.iter().filter(|w| w.is_visible()) {
        window.draw(context, renderer, delta_seconds)?;
        draw_controls(window.children(), context, renderer, delta_seconds)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::{Label, Panel};
    use crate::layout::DefaultContext;
    use crate::renderer::{DrawCommand, RecordingRenderer};
    use crate::types::{Point, Rect, Rgba};

    fn filled(name: &str, color: Rgba) -> Panel {
        let mut panel = Panel::named(name);
        panel.base.background_color = Some(color);
        panel
    }

    #[test]
    fn test_pre_order() {
        let mut outer = filled("outer", Rgba::RED);
        outer.add_control(Box::new(filled("inner", Rgba::BLUE))).unwrap();
        let controls: Vec<Box<dyn Control>> =
            vec![Box::new(outer), Box::new(filled("last", Rgba::CYAN))];

        let mut renderer = RecordingRenderer::default();
        draw_controls(&controls, &DefaultContext, &mut renderer, 0.0).unwrap();

        let colors: Vec<Rgba> = renderer
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Fill(_, color) => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Rgba::RED, Rgba::BLUE, Rgba::CYAN]);
    }

    #[test]
    fn test_hidden_subtree_skipped() {
        let mut outer = filled("outer", Rgba::RED);
        outer.base.is_visible = false;
        outer.add_control(Box::new(filled("inner", Rgba::BLUE))).unwrap();
        let controls: Vec<Box<dyn Control>> = vec![Box::new(outer)];

        let mut renderer = RecordingRenderer::default();
        draw_controls(&controls, &DefaultContext, &mut renderer, 0.0).unwrap();
        assert!(renderer.commands.is_empty());
    }

    #[test]
    fn test_window_children_follow_window() {
        let mut window = Window::new("");
        window.add_control(Box::new(Label::new("hi"))).unwrap();

        let mut renderer = RecordingRenderer::default();
        draw_windows(&[window], &DefaultContext, &mut renderer, 0.0).unwrap();

        assert_eq!(
            renderer.commands,
            vec![
                DrawCommand::Rectangle(Rect::ZERO, Rgba::WHITE),
                DrawCommand::Text("hi".into(), Point::ZERO, Rgba::TERMINAL_DEFAULT),
            ]
        );
    }
}
