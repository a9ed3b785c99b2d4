//! Alloy Language Server
//!
//! Editor support for Grafana Alloy configuration files.
//!
//! This library provides:
//! - Line-oriented validation (brace balance, duplicate labels, unknown
//!   component types, missing values, unclosed strings)
//! - Indentation-based formatting
//! - Catalog-driven completion and hover
//! - LSP protocol implementation

pub mod catalog;
pub mod config;
pub mod features;
pub mod format;
pub mod lsp;
pub mod parser;
pub mod validation;

// Re-exports for clean public API
pub use catalog::Catalog;
pub use config::Config;
pub use format::format_document;
pub use validation::{validate_document, validate_with_catalog, Severity, ValidationIssue};
