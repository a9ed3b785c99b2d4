//! Catalog Registry
//!
//! Ordered, read-only lookup tables. A catalog is assembled once at startup
//! and then shared by reference; nothing mutates it afterwards.

use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};

use super::builtin::{
    COMMON_ATTRIBUTES, COMPONENT_DESCRIPTIONS, KNOWN_COMPONENTS, LOCAL_COMPONENT_PREFIX,
};
use super::schema::{AttributeDef, CatalogFile, ComponentDef};

/// Hover text for catalog components without a specific description
pub const FALLBACK_COMPONENT_DESCRIPTION: &str = "Component for Grafana Alloy configuration.";

static BUILTIN: LazyLock<Catalog> = LazyLock::new(Catalog::new);

/// Known component types and common attributes, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    components: Vec<ComponentDef>,
    attributes: Vec<AttributeDef>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Catalog holding only the built-in entries
    pub fn new() -> Self {
        let components = KNOWN_COMPONENTS
            .iter()
            .map(|name| ComponentDef {
                name: name.to_string(),
                description: COMPONENT_DESCRIPTIONS
                    .iter()
                    .find(|(component, _)| component == name)
                    .map(|(_, description)| description.to_string()),
            })
            .collect();

        let attributes = COMMON_ATTRIBUTES
            .iter()
            .map(|name| AttributeDef {
                name: name.to_string(),
                description: None,
            })
            .collect();

        Self {
            components,
            attributes,
        }
    }

    /// Shared built-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build the built-in catalog extended by every existing file in `paths`
    ///
    /// Missing files are skipped. Files that cannot be read or parsed are
    /// logged and skipped, so startup never fails because of a catalog file.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Self {
        let mut catalog = Self::new();

        for path in paths {
            let path = path.as_ref();
            if !path.exists() {
                continue;
            }

            match read_catalog_file(path) {
                Ok(file) => {
                    log::info!(
                        "Loaded catalog extension {} ({} components, {} attributes)",
                        path.display(),
                        file.components.len(),
                        file.attributes.len()
                    );
                    catalog.extend(file);
                }
                Err(e) => log::warn!("Skipping catalog extension: {:#}", e),
            }
        }

        catalog
    }

    /// Append the entries of an extension file
    ///
    /// An entry whose name is already present only replaces the existing
    /// description, keeping the original position.
    pub fn extend(&mut self, file: CatalogFile) {
        for def in file.components {
            match self.components.iter_mut().find(|c| c.name == def.name) {
                Some(existing) => {
                    if def.description.is_some() {
                        existing.description = def.description;
                    }
                }
                None => self.components.push(def),
            }
        }

        for def in file.attributes {
            match self.attributes.iter_mut().find(|a| a.name == def.name) {
                Some(existing) => {
                    if def.description.is_some() {
                        existing.description = def.description;
                    }
                }
                None => self.attributes.push(def),
            }
        }
    }

    pub fn components(&self) -> &[ComponentDef] {
        &self.components
    }

    pub fn attributes(&self) -> &[AttributeDef] {
        &self.attributes
    }

    pub fn component(&self, name: &str) -> Option<&ComponentDef> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Whether `component_type` is in the catalog
    pub fn is_known_component(&self, component_type: &str) -> bool {
        self.component(component_type).is_some()
    }

    /// Whether a declaration of `component_type` passes without a warning
    pub fn accepts_component(&self, component_type: &str) -> bool {
        self.is_known_component(component_type)
            || component_type.starts_with(LOCAL_COMPONENT_PREFIX)
    }

    /// Description for a known component, falling back to generic text
    pub fn describe_component(&self, name: &str) -> Option<&str> {
        self.component(name).map(|c| {
            c.description
                .as_deref()
                .unwrap_or(FALLBACK_COMPONENT_DESCRIPTION)
        })
    }
}

fn read_catalog_file(path: &Path) -> Result<CatalogFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog TOML: {}", path.display()))
}
