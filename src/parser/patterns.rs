//! Declaration Patterns
//!
//! Anchored regular expressions recognizing component declarations and
//! attribute assignments at the start of a line.

use regex::Regex;
use std::sync::LazyLock;

// `type "label" {` with no escape handling inside the label. `""` still
// matches, so an empty label is reported instead of the line being ignored.
static COMPONENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([A-Za-z_][A-Za-z0-9_.]*)\s+"([^"]*)"\s*\{"#)
        .expect("component pattern is a valid regex")
});

static ATTRIBUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*=").expect("attribute pattern is a valid regex")
});

/// A component declaration like `prometheus.scrape "default" {`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentDecl<'a> {
    /// Component type, e.g. `prometheus.scrape`
    pub component_type: &'a str,
    /// Content between the quotes, possibly empty
    pub label: &'a str,
}

impl ComponentDecl<'_> {
    /// Key used to detect duplicate declarations: `type.label`
    pub fn full_label(&self) -> String {
        format!("{}.{}", self.component_type, self.label)
    }
}

/// Match a component declaration at the start of `line`
pub fn match_component(line: &str) -> Option<ComponentDecl<'_>> {
    let caps = COMPONENT_RE.captures(line)?;
    Some(ComponentDecl {
        component_type: caps.get(1)?.as_str(),
        label: caps.get(2)?.as_str(),
    })
}

/// Match an attribute assignment at the start of `line`, returning its name
pub fn match_attribute(line: &str) -> Option<&str> {
    ATTRIBUTE_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
