//! Type Registry - discriminator to constructor mapping.
//!
//! Every load builds its own registry: the built-in types plus the custom
//! types passed to that load. Nothing is shared between loads, so two loads
//! with different custom types never see each other's entries.
//!
//! - A custom type may replace a built-in of the same name.
//! - Two custom types with the same name are rejected.

use std::collections::{HashMap, HashSet};

use serde_json::Value;

use crate::controls::{Button, CheckBox, Control, ControlType, Label, Panel, ProgressBar, TextBox};
use crate::error::LoadError;

/// Builds a control from its merged descriptor properties.
pub type ControlFactory = fn(Value) -> Result<Box<dyn Control>, serde_json::Error>;

fn construct<T: ControlType>(properties: Value) -> Result<Box<dyn Control>, serde_json::Error> {
    let control: T = serde_json::from_value(properties)?;
    Ok(Box::new(control))
}

// =============================================================================
// CustomControlType
// =============================================================================

/// A caller-declared control type for one load call.
#[derive(Debug, Clone)]
pub struct CustomControlType {
    discriminator: String,
    factory: ControlFactory,
}

impl CustomControlType {
    /// Register `T` under its own type name.
    pub fn of<T: ControlType>() -> Self {
        Self::named::<T>(T::TYPE_NAME)
    }

    /// Register `T` under a different discriminator.
    pub fn named<T: ControlType>(discriminator: impl Into<String>) -> Self {
        Self::with_factory(discriminator, construct::<T>)
    }

    /// Register a hand-written factory.
    pub fn with_factory(discriminator: impl Into<String>, factory: ControlFactory) -> Self {
        Self {
            discriminator: discriminator.into(),
            factory,
        }
    }

    pub fn discriminator(&self) -> &str {
        &self.discriminator
    }
}

// =============================================================================
// TypeRegistry
// =============================================================================

#[derive(Debug, Clone)]
pub struct TypeRegistry {
    factories: HashMap<String, ControlFactory>,
}

impl TypeRegistry {
    /// Registry holding only the built-in control types.
    pub fn builtin() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register::<Panel>();
        registry.register::<Label>();
        registry.register::<Button>();
        registry.register::<CheckBox>();
        registry.register::<TextBox>();
        registry.register::<ProgressBar>();
        registry
    }

    /// Built-ins extended with `custom`.
    pub fn with_custom(custom: &[CustomControlType]) -> Result<Self, LoadError> {
        let mut registry = Self::builtin();
        let mut seen = HashSet::new();

        for entry in custom {
            if !seen.insert(entry.discriminator.as_str()) {
                return Err(LoadError::DuplicateCustomType(entry.discriminator.clone()));
            }
            if registry.contains(&entry.discriminator) {
                log::debug!("custom control type '{}' overrides built-in", entry.discriminator);
            }
            registry
                .factories
                .insert(entry.discriminator.clone(), entry.factory);
        }

        Ok(registry)
    }

    fn register<T: ControlType>(&mut self) {
        self.factories.insert(T::TYPE_NAME.to_string(), construct::<T>);
    }

    pub fn resolve(&self, discriminator: &str) -> Option<ControlFactory> {
        self.factories.get(discriminator).copied()
    }

    pub fn contains(&self, discriminator: &str) -> bool {
        self.factories.contains_key(discriminator)
    }

    /// Registered discriminators, sorted.
    pub fn discriminators(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::ControlBase;
    use crate::impl_control;
    use crate::types::Capabilities;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, Deserialize)]
    #[serde(rename_all = "PascalCase", default)]
    struct Gauge {
        #[serde(flatten)]
        base: ControlBase,
        value: f32,
    }

    impl_control!(Gauge, "Gauge", Capabilities::LEAF);

    #[test]
    fn test_builtin_types() {
        let registry = TypeRegistry::builtin();
        assert_eq!(
            registry.discriminators(),
            vec!["Button", "CheckBox", "Label", "Panel", "ProgressBar", "TextBox"]
        );
        assert!(registry.resolve("Gauge").is_none());
    }

    #[test]
    fn test_custom_type_resolves() {
        let registry = TypeRegistry::with_custom(&[CustomControlType::of::<Gauge>()]).unwrap();
        let factory = registry.resolve("Gauge").unwrap();

        let control = factory(json!({"Name": "fuel", "Value": 0.5})).unwrap();
        assert_eq!(control.name(), Some("fuel"));
        assert_eq!(control.downcast_ref::<Gauge>().unwrap().value, 0.5);
    }

    #[test]
    fn test_custom_type_overrides_builtin() {
        let registry =
            TypeRegistry::with_custom(&[CustomControlType::named::<Gauge>("Label")]).unwrap();
        let control = registry.resolve("Label").unwrap()(json!({})).unwrap();
        assert!(control.is::<Gauge>());
    }

    #[test]
    fn test_duplicate_custom_types_rejected() {
        let result = TypeRegistry::with_custom(&[
            CustomControlType::of::<Gauge>(),
            CustomControlType::of::<Gauge>(),
        ]);
        assert!(matches!(result, Err(LoadError::DuplicateCustomType(name)) if name == "Gauge"));
    }

    #[test]
    fn test_registries_are_independent() {
        let extended = TypeRegistry::with_custom(&[CustomControlType::of::<Gauge>()]).unwrap();
        let plain = TypeRegistry::builtin();
        assert!(extended.contains("Gauge"));
        assert!(!plain.contains("Gauge"));
    }
}
