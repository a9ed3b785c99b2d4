use tower_lsp::lsp_types::{CompletionItem, CompletionItemKind, Documentation, InsertTextFormat};

use crate::catalog::Catalog;

/// Characters that make the client ask for completions
pub const COMPLETION_TRIGGER_CHARACTERS: &[&str] = &[".", "\""];

/// Every component, then every attribute, in catalog order
///
/// Components insert a full block snippet with the label and body as tab
/// stops; attributes insert `name = ` with the value as a tab stop.
pub fn completion_items(catalog: &Catalog) -> Vec<CompletionItem> {
    let components = catalog.components().iter().map(|component| CompletionItem {
        label: component.name.clone(),
        kind: Some(CompletionItemKind::CLASS),
        detail: Some("Grafana Alloy Component".to_string()),
        documentation: component
            .description
            .clone()
            .map(Documentation::String),
        insert_text: Some(format!("{} \"${{1:label}}\" {{\n  ${{2}}\n}}", component.name)),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    });

    let attributes = catalog.attributes().iter().map(|attribute| CompletionItem {
        label: attribute.name.clone(),
        kind: Some(CompletionItemKind::PROPERTY),
        detail: Some("Component Attribute".to_string()),
        documentation: attribute
            .description
            .clone()
            .map(Documentation::String),
        insert_text: Some(format!("{} = ${{1}}", attribute.name)),
        insert_text_format: Some(InsertTextFormat::SNIPPET),
        ..Default::default()
    });

    components.chain(attributes).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::{COMMON_ATTRIBUTES, KNOWN_COMPONENTS};

    #[test]
    fn test_components_then_attributes() {
        let items = completion_items(Catalog::builtin());
        assert_eq!(items.len(), KNOWN_COMPONENTS.len() + COMMON_ATTRIBUTES.len());

        assert_eq!(items[0].label, "prometheus.scrape");
        assert_eq!(items[0].kind, Some(CompletionItemKind::CLASS));

        let first_attr = &items[KNOWN_COMPONENTS.len()];
        assert_eq!(first_attr.label, "forward_to");
        assert_eq!(first_attr.kind, Some(CompletionItemKind::PROPERTY));
    }

    #[test]
    fn test_snippets() {
        let items = completion_items(Catalog::builtin());

        let write = items.iter().find(|i| i.label == "loki.write").unwrap();
        assert_eq!(
            write.insert_text.as_deref(),
            Some("loki.write \"${1:label}\" {\n  ${2}\n}")
        );

        let endpoint = items.iter().find(|i| i.label == "endpoint").unwrap();
        assert_eq!(endpoint.insert_text.as_deref(), Some("endpoint = ${1}"));
        assert_eq!(endpoint.detail.as_deref(), Some("Component Attribute"));
    }
}
