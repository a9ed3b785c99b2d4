use tower_lsp::lsp_types::Url;

/// Language id clients use for Alloy files
pub const ALLOY_LANGUAGE_ID: &str = "alloy";

/// File extension of Alloy files
pub const ALLOY_FILE_EXTENSION: &str = ".alloy";

/// State for each open document
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub content: String,
    pub language_id: String,
}

impl DocumentState {
    pub fn new(content: String, language_id: String) -> Self {
        Self {
            content,
            language_id,
        }
    }

    /// Whether the document should be validated and formatted
    pub fn is_alloy(&self, uri: &Url) -> bool {
        self.language_id == ALLOY_LANGUAGE_ID || uri.path().ends_with(ALLOY_FILE_EXTENSION)
    }

    /// Lines without their terminators, as the client addresses them
    pub fn lines(&self) -> Vec<&str> {
        self.content
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect()
    }

    /// Text of line `idx` without its terminator
    pub fn line(&self, idx: usize) -> &str {
        self.content
            .split('\n')
            .nth(idx)
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .unwrap_or("")
    }
}
