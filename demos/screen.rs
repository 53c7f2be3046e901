//! Load a screen document, lay it out for the current terminal and draw one
//! frame.
//!
//! Run with `RUST_LOG=debug cargo run --example screen` to see loader output.

use std::io;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use serde::Deserialize;

use gui_screen::{
    Capabilities, ControlBase, CustomControlType, DefaultContext, DocumentLoader,
    ProgressBar, Rect, ScreenHost, SkinService, TerminalRenderer, Window, impl_control,
    terminal_rect,
};

const DOCUMENT: &str = r##"{
    "Controls": [
        {
            "Type": "Panel",
            "Name": "root",
            "Skin": "dark",
            "Padding": 1,
            "Controls": [
                { "Type": "Label", "Text": "gui-screen demo", "VerticalAlignment": "Top" },
                { "Type": "ProgressBar", "Name": "loading", "Progress": 0.6, "Width": 30,
                  "HorizontalAlignment": "Centre", "VerticalAlignment": "Centre" },
                { "Type": "Badge", "Text": "NEW", "HorizontalAlignment": "Right",
                  "VerticalAlignment": "Top", "TextColor": "#f38ba8" }
            ]
        }
    ]
}"##;

/// A small custom control: bracketed text.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct Badge {
    #[serde(flatten)]
    base: ControlBase,
    text: String,
}

impl_control!(Badge, "Badge", Capabilities::LEAF, {
    fn desired_size(&self) -> gui_screen::Size {
        gui_screen::Size::new(gui_screen::string_width(&self.text) as f32 + 2.0, 1.0)
    }

    fn draw(
        &self,
        _context: &dyn gui_screen::GuiContext,
        renderer: &mut dyn gui_screen::Renderer,
        _delta_seconds: f32,
    ) -> io::Result<()> {
        renderer.draw_text(
            &format!("[{}]", self.text),
            self.base.bounds().origin(),
            self.base.text_color.unwrap_or(gui_screen::Rgba::WHITE),
        )
    }
});

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut screen = DocumentLoader::new()
        .with_skins(SkinService::with_presets())
        .load(DOCUMENT.as_bytes(), &[CustomControlType::of::<Badge>()])?;

    if let Some(bar) = screen.find_control_mut::<ProgressBar>("loading") {
        bar.progress = 0.75;
    }
    screen.add_window(Window::new("About").with_size(24.0, 5.0));

    let rect = terminal_rect().unwrap_or(Rect::new(0.0, 0.0, 80.0, 24.0));
    let mut stdout = io::stdout();
    execute!(stdout, Clear(ClearType::All))?;

    let mut host = ScreenHost::new(screen, DefaultContext);
    let mut renderer = TerminalRenderer::new(stdout);
    host.frame(rect, &mut renderer, 0.0)?;
    host.dispose();

    let mut stdout = renderer.into_inner();
    execute!(stdout, MoveTo(0, rect.height as u16))?;
    Ok(())
}
