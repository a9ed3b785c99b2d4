//! Catalog Schema Types
//!
//! Serde types for catalog extension files (TOML).

use serde::Deserialize;

/// Root of a catalog extension file
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CatalogFile {
    #[serde(default)]
    pub components: Vec<ComponentDef>,
    #[serde(default)]
    pub attributes: Vec<AttributeDef>,
}

/// A component type entry
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ComponentDef {
    pub name: String,
    pub description: Option<String>,
}

/// An attribute name entry
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AttributeDef {
    pub name: String,
    pub description: Option<String>,
}
