//! Skins - named styles applied to control descriptors.
//!
//! A skin is a named set of property values. When a descriptor carries
//! `"Skin": "<name>"`, the loader asks a [`SkinResolver`] for that name and
//! lays the descriptor's own properties over the skin's, so explicit
//! properties always win.
//!
//! # Example
//!
//! ```ignore
//! use gui_screen::skin::SkinService;
//! use serde_json::json;
//!
//! let mut skins = SkinService::with_presets();
//! skins.insert("danger", json!({ "TextColor": "red" }));
//! ```

use std::collections::HashMap;
use std::io::Read;

use serde_json::{Map, Value};

/// Property values keyed by PascalCase property name.
pub type Style = Map<String, Value>;

/// Resolves a skin name into property values.
pub trait SkinResolver {
    fn resolve(&self, name: &str) -> Option<&Style>;
}

/// In-memory skin table.
#[derive(Debug, Clone, Default)]
pub struct SkinService {
    skins: HashMap<String, Style>,
}

impl SkinService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A table holding the built-in `dark` and `light` skins.
    pub fn with_presets() -> Self {
        let mut service = Self::new();
        service.insert(
            "dark",
            serde_json::json!({
                "BackgroundColor": "#1e1e2e",
                "BorderColor": "#6c7086",
                "TextColor": "#cdd6f4",
            }),
        );
        service.insert(
            "light",
            serde_json::json!({
                "BackgroundColor": "#eff1f5",
                "BorderColor": "#9ca0b0",
                "TextColor": "#4c4f69",
            }),
        );
        service
    }

    /// Read a table of skins: a JSON object mapping names to property objects.
    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        let skins: HashMap<String, Style> = serde_json::from_reader(reader)?;
        Ok(Self { skins })
    }

    /// Add or replace a skin. Non-object values are stored as an empty style.
    pub fn insert(&mut self, name: impl Into<String>, style: Value) {
        let style = match style {
            Value::Object(map) => map,
            _ => Style::new(),
        };
        self.skins.insert(name.into(), style);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.skins.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.skins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skins.is_empty()
    }
}

impl SkinResolver for SkinService {
    fn resolve(&self, name: &str) -> Option<&Style> {
        self.skins.get(name)
    }
}

/// Overlay `properties` on top of `style`.
pub(crate) fn apply_style(style: &Style, properties: Style) -> Style {
    let mut merged = style.clone();
    merged.extend(properties);
    merged
}
