//! Document Loader - builds a [`Screen`] from a JSON document.
//!
//! # Pipeline
//!
//! ```text
//! custom types ─► TypeRegistry (built-ins + custom, per call)
//! byte stream  ─► ScreenDocument ─► descriptor ─► skin overlay ─► factory ─► control
//!                                        └── child descriptors, recursively
//! ```
//!
//! Top-level descriptor order becomes the screen's control order. Any failure
//! aborts the whole load; no partially built screen is returned. The returned
//! screen still needs a layout pass before it is drawn.

mod document;

pub use document::{ControlDescriptor, ScreenDocument};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::controls::Control;
use crate::error::{DeserializationError, LoadError};
use crate::registry::{CustomControlType, TypeRegistry};
use crate::screen::Screen;
use crate::skin::{SkinResolver, SkinService, apply_style};

/// Loader configuration: skin resolution and path handling.
pub struct DocumentLoader {
    skins: Box<dyn SkinResolver>,
    content_root: Option<PathBuf>,
}

/// No skins and no content root.
impl Default for DocumentLoader {
    fn default() -> Self {
        Self {
            skins: Box::new(SkinService::new()),
            content_root: None,
        }
    }
}

impl DocumentLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `skins` to resolve `Skin` references.
    pub fn with_skins(mut self, skins: impl SkinResolver + 'static) -> Self {
        self.skins = Box::new(skins);
        self
    }

    /// Resolve relative paths given to [`load_path`](Self::load_path) against `root`.
    pub fn with_content_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.content_root = Some(root.into());
        self
    }

    /// Where `path` is read from.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.content_root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Load a screen from a byte stream.
    pub fn load<R: Read>(&self, reader: R, custom: &[CustomControlType]) -> Result<Screen, LoadError> {
        self.load_as(reader, custom)
    }

    /// Load into a caller-defined screen type built from the base screen.
    pub fn load_as<S, R>(&self, reader: R, custom: &[CustomControlType]) -> Result<S, LoadError>
    where
        S: From<Screen>,
        R: Read,
    {
        let registry = TypeRegistry::with_custom(custom)?;

        let document: ScreenDocument =
            serde_json::from_reader(BufReader::new(reader)).map_err(|err| {
                if err.is_io() {
                    LoadError::Io(err.into())
                } else {
                    LoadError::Deserialization(err.into())
                }
            })?;

        let mut screen = Screen::new();
        for descriptor in document.controls {
            let control = self.build(&registry, descriptor)?;
            screen.add_control(control);
        }

        log::debug!("loaded screen with {} top-level controls", screen.controls().len());
        Ok(S::from(screen))
    }

    /// Load a screen from a file.
    pub fn load_path<P: AsRef<Path>>(
        &self,
        path: P,
        custom: &[CustomControlType],
    ) -> Result<Screen, LoadError> {
        self.load_path_as(path, custom)
    }

    /// Load a caller-defined screen type from a file.
    pub fn load_path_as<S, P>(&self, path: P, custom: &[CustomControlType]) -> Result<S, LoadError>
    where
        S: From<Screen>,
        P: AsRef<Path>,
    {
        let path = self.resolve_path(path.as_ref());
        let file = File::open(&path)?;
        log::debug!("loading screen from {}", path.display());
        self.load_as(file, custom)
    }

    // =========================================================================
    // Descriptor → control
    // =========================================================================

    fn build(
        &self,
        registry: &TypeRegistry,
        descriptor: ControlDescriptor,
    ) -> Result<Box<dyn Control>, DeserializationError> {
        let ControlDescriptor {
            discriminator,
            skin,
            controls,
            mut properties,
        } = descriptor;

        let factory = registry
            .resolve(&discriminator)
            .ok_or_else(|| DeserializationError::UnknownType(discriminator.clone()))?;

        if let Some(skin) = skin {
            let style = self
                .skins
                .resolve(&skin)
                .ok_or_else(|| DeserializationError::UnknownSkin(skin.clone()))?;
            properties = apply_style(style, properties);
            log::debug!("applied skin '{skin}' to {discriminator}");
            properties.insert("Skin".to_string(), Value::String(skin));
        }

        let mut control = factory(Value::Object(properties))?;
        for child in controls {
            let child = self.build(registry, child)?;
            control.add_control(child)?;
        }

        Ok(control)
    }
}

// =============================================================================
// Tests
// =============================================================================
