//! Component Catalog
//!
//! Known component types and common attribute names. The built-in entries
//! are compiled in; extension files can add more at startup.

pub mod builtin;
pub mod registry;
pub mod schema;

pub use registry::{Catalog, FALLBACK_COMPONENT_DESCRIPTION};
pub use schema::{AttributeDef, CatalogFile, ComponentDef};
