use tower_lsp::jsonrpc::Result as LspResult;
use tower_lsp::lsp_types::*;

use crate::features::{component_symbols, completion_items, hover_markdown, word_at};
use crate::format::format_document;
use crate::lsp::backend::Backend;
use crate::validation::{validate_with_catalog, Severity, ValidationIssue};

/// Source label attached to every diagnostic
pub const DIAGNOSTIC_SOURCE: &str = "Grafana Alloy";

/// Trait for handling hover requests
#[tower_lsp::async_trait]
pub trait HandleHover {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>>;
}

/// Trait for handling completion requests
#[tower_lsp::async_trait]
pub trait HandleCompletion {
    async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> LspResult<Option<CompletionResponse>>;
}

/// Trait for handling whole-document formatting
#[tower_lsp::async_trait]
pub trait HandleFormatting {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>>;
}

/// Trait for handling document symbols
#[tower_lsp::async_trait]
pub trait HandleDocumentSymbol {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>>;
}

/// Trait for handling diagnostics
#[tower_lsp::async_trait]
pub trait HandleDiagnostics {
    async fn publish_diagnostics(&self, uri: Url);
}

#[tower_lsp::async_trait]
impl HandleHover for Backend {
    async fn handle_hover(&self, params: HoverParams) -> LspResult<Option<Hover>> {
        let tdpp = params.text_document_position_params;
        let uri = tdpp.text_document.uri;
        let pos = tdpp.position;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let line = doc_state.line(pos.line as usize);
        let Some(word) = word_at(line, pos.character as usize) else {
            return Ok(None);
        };

        Ok(hover_markdown(&self.catalog, word).map(|value| Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value,
            }),
            range: None,
        }))
    }
}

#[tower_lsp::async_trait]
impl HandleCompletion for Backend {
    async fn handle_completion(
        &self,
        params: CompletionParams,
    ) -> LspResult<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;

        if !self.documents.lock().await.contains_key(&uri) {
            return Ok(None);
        }

        let completions = completion_items(&self.catalog);
        if completions.is_empty() {
            Ok(None)
        } else {
            Ok(Some(CompletionResponse::Array(completions)))
        }
    }
}

#[tower_lsp::async_trait]
impl HandleFormatting for Backend {
    async fn handle_formatting(
        &self,
        params: DocumentFormattingParams,
    ) -> LspResult<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) if state.is_alloy(&uri) => state,
            _ => return Ok(None),
        };

        Ok(Some(formatting_edits(&doc_state.content)))
    }
}

#[tower_lsp::async_trait]
impl HandleDocumentSymbol for Backend {
    async fn handle_document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> LspResult<Option<DocumentSymbolResponse>> {
        let uri = params.text_document.uri;

        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return Ok(None),
        };

        let symbols = component_symbols(&doc_state.content)
            .into_iter()
            .map(|symbol| {
                let end_line = doc_state.line(symbol.end_line);
                let range = Range::new(
                    Position::new(symbol.start_line as u32, 0),
                    Position::new(symbol.end_line as u32, utf16_len(end_line)),
                );
                let selection_range = Range::new(
                    Position::new(symbol.start_line as u32, 0),
                    Position::new(
                        symbol.start_line as u32,
                        utf16_len(doc_state.line(symbol.start_line)),
                    ),
                );

                DocumentSymbol {
                    name: symbol.name(),
                    detail: self
                        .catalog
                        .component(&symbol.component_type)
                        .and_then(|c| c.description.clone()),
                    kind: SymbolKind::CLASS,
                    tags: None,
                    #[allow(deprecated)]
                    deprecated: Some(false), // Required by tower-lsp 0.20
                    range,
                    selection_range,
                    children: None,
                }
            })
            .collect();

        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

#[tower_lsp::async_trait]
impl HandleDiagnostics for Backend {
    /// Publish diagnostics for a document
    async fn publish_diagnostics(&self, uri: Url) {
        let docs = self.documents.lock().await;
        let doc_state = match docs.get(&uri) {
            Some(state) => state,
            None => return,
        };

        let diagnostics: Vec<Diagnostic> = if doc_state.is_alloy(&uri) {
            let result = validate_with_catalog(&doc_state.content, &self.catalog);
            log::debug!("{}: {} issue(s)", uri, result.issues.len());

            let lines = doc_state.lines();
            result
                .issues
                .into_iter()
                .map(|issue| create_lsp_diagnostic(issue, &lines))
                .collect()
        } else {
            Vec::new()
        };
        drop(docs);

        self.client
            .publish_diagnostics(uri, diagnostics, None)
            .await;
    }
}

fn utf16_len(line: &str) -> u32 {
    line.encode_utf16().count() as u32
}

/// Map a validation issue onto an LSP diagnostic spanning its whole line
pub fn create_lsp_diagnostic(issue: ValidationIssue, lines: &[&str]) -> Diagnostic {
    let line_idx = issue.line.min(lines.len().saturating_sub(1));
    let line_len = lines.get(line_idx).map_or(0, |line| utf16_len(line));

    let severity = match issue.severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
    };

    Diagnostic::new(
        Range::new(
            Position::new(line_idx as u32, 0),
            Position::new(line_idx as u32, line_len),
        ),
        Some(severity),
        None,
        Some(DIAGNOSTIC_SOURCE.to_string()),
        issue.message,
        None,
        None,
    )
}

/// Edits replacing the whole document with its formatted form
///
/// Empty when the document is already formatted.
pub fn formatting_edits(content: &str) -> Vec<TextEdit> {
    let formatted = format_document(content);
    if formatted == content {
        return Vec::new();
    }

    let last_line = content.matches('\n').count() as u32;
    let last_len = content.rsplit('\n').next().map_or(0, utf16_len);

    vec![TextEdit::new(
        Range::new(Position::new(0, 0), Position::new(last_line, last_len)),
        formatted,
    )]
}
