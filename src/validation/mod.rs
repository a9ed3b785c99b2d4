//! Validation Engine
//!
//! Line-granular checks over a whole document, independent of the LSP layer.

pub mod engine;

pub use engine::{
    validate_document, validate_with_catalog, Severity, ValidationIssue, ValidationResult,
};
