//! Validation Engine
//!
//! Single pass over the document lines. Brace balance and the set of seen
//! component labels are the only state, and both live for one call.

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::parser::{self, brace_delta, match_attribute, match_component, quote_count, LineKind};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A problem found on one line (0-based)
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub line: usize,
    pub message: String,
    pub severity: Severity,
}

/// Issues of a document, in detection order
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    pub issues: Vec<ValidationIssue>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { issues: Vec::new() }
    }

    pub fn add_error(&mut self, line: usize, message: String) {
        self.issues.push(ValidationIssue {
            line,
            message,
            severity: Severity::Error,
        });
    }

    pub fn add_warning(&mut self, line: usize, message: String) {
        self.issues.push(ValidationIssue {
            line,
            message,
            severity: Severity::Warning,
        });
    }

    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate a document against the built-in catalog
pub fn validate_document(content: &str) -> ValidationResult {
    validate_with_catalog(content, Catalog::builtin())
}

/// Validate a document against `catalog`
pub fn validate_with_catalog(content: &str, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();
    let lines = parser::split_lines(content).lines;

    let mut brace_balance: i64 = 0;
    let mut seen_labels: HashSet<String> = HashSet::new();

    for (line_idx, line) in lines.iter().enumerate() {
        if LineKind::classify(line).is_skipped() {
            continue;
        }

        brace_balance += brace_delta(line);

        validate_component(line_idx, line, catalog, &mut seen_labels, &mut result);
        validate_attribute(line_idx, line, &mut result);
        validate_strings(line_idx, line, &mut result);
    }

    if brace_balance != 0 {
        let message = if brace_balance > 0 {
            "Unclosed block (missing closing brace)"
        } else {
            "Unexpected closing brace"
        };
        result.add_error(lines.len().saturating_sub(1), message.to_string());
    }

    result
}

fn validate_component(
    line_idx: usize,
    line: &str,
    catalog: &Catalog,
    seen_labels: &mut HashSet<String>,
    result: &mut ValidationResult,
) {
    let Some(decl) = match_component(line) else {
        return;
    };

    let full_label = decl.full_label();
    if !seen_labels.insert(full_label.clone()) {
        result.add_error(
            line_idx,
            format!("Duplicate component label: {}", full_label),
        );
    }

    if !catalog.accepts_component(decl.component_type) {
        result.add_warning(
            line_idx,
            format!(
                "Unknown component type: {}. This may be valid but is not in the common components list.",
                decl.component_type
            ),
        );
    }

    if decl.label.trim().is_empty() {
        result.add_error(line_idx, "Component label cannot be empty".to_string());
    }
}

fn validate_attribute(line_idx: usize, line: &str, result: &mut ValidationResult) {
    if let Some(name) = match_attribute(line) {
        // Nothing after the `=` on this line
        if line.trim().ends_with('=') {
            result.add_error(line_idx, format!("Attribute '{}' is missing a value", name));
        }
    }
}

fn validate_strings(line_idx: usize, line: &str, result: &mut ValidationResult) {
    if quote_count(line) % 2 != 0 && LineKind::classify(line) != LineKind::LineComment {
        result.add_error(line_idx, "Unclosed string literal".to_string());
    }
}
