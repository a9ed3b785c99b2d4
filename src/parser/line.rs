//! Line Classification
//!
//! Cheap textual tests on a single line: comment detection and
//! delimiter counting.

/// Marker opening a comment that runs to the end of the line
pub const LINE_COMMENT: &str = "//";

/// Marker opening a block comment
pub const BLOCK_COMMENT_OPEN: &str = "/*";

/// Coarse classification of a line, based on its trimmed form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty or whitespace-only
    Blank,
    /// Starts with `//`
    LineComment,
    /// Starts with `/*`. Only the opening line of a block comment is
    /// recognized; the lines that follow are classified on their own.
    BlockCommentStart,
    /// Anything else
    Code,
}

impl LineKind {
    pub fn classify(line: &str) -> Self {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with(LINE_COMMENT) {
            LineKind::LineComment
        } else if trimmed.starts_with(BLOCK_COMMENT_OPEN) {
            LineKind::BlockCommentStart
        } else {
            LineKind::Code
        }
    }

    /// Whether validation skips the line entirely
    pub fn is_skipped(self) -> bool {
        !matches!(self, LineKind::Code)
    }
}

/// Opening braces minus closing braces on the raw line
pub fn brace_delta(line: &str) -> i64 {
    line.chars().fold(0, |delta, c| match c {
        '{' => delta + 1,
        '}' => delta - 1,
        _ => delta,
    })
}

/// Number of literal double quotes on the raw line
pub fn quote_count(line: &str) -> usize {
    line.matches('"').count()
}
