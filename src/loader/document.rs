//! Document schema.
//!
//! ```text
//! { "Controls": [ { "Type": "Panel", "Skin": "dark", "Name": "root",
//!                   "Controls": [ { "Type": "Label", "Text": "Hi" } ] } ] }
//! ```
//!
//! Windows have no representation here.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Top-level document: an ordered list of control descriptors.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScreenDocument {
    #[serde(default)]
    pub controls: Vec<ControlDescriptor>,
}

/// One control in the document.
#[derive(Debug, Clone, Deserialize)]
pub struct ControlDescriptor {
    /// Type discriminator resolved against the type registry.
    #[serde(rename = "Type")]
    pub discriminator: String,

    /// Optional skin name resolved by the skin collaborator.
    #[serde(rename = "Skin", default)]
    pub skin: Option<String>,

    /// Nested child descriptors, in order.
    #[serde(rename = "Controls", default)]
    pub controls: Vec<ControlDescriptor>,

    /// Everything else: type-specific properties.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}
