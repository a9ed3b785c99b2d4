//! Alloy Line Parser
//!
//! Line-oriented helpers shared by validation, formatting and symbols.
//! There is no tokenizer and no tree: every helper looks at one line of
//! text at a time.

pub mod line;
pub mod patterns;

pub use line::{brace_delta, quote_count, LineKind};
pub use patterns::{match_attribute, match_component, ComponentDecl};

/// Byte order mark some editors write at the start of a file
pub const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Terminator ending a single line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// A document split into lines, terminators removed
#[derive(Debug, Clone, PartialEq)]
pub struct SplitText<'a> {
    pub lines: Vec<&'a str>,
    /// Terminator of each line, `None` for the last one
    pub endings: Vec<Option<LineEnding>>,
    /// Whether a leading byte order mark was removed from the first line
    pub has_bom: bool,
}

/// Split a document into lines
///
/// Splits on every `\n`, so a trailing terminator produces a final empty
/// line and an empty document produces a single empty line. Each line keeps
/// track of its own terminator, so mixed LF/CRLF documents can be rebuilt
/// byte for byte. A leading byte order mark is not part of the first line.
pub fn split_lines(text: &str) -> SplitText<'_> {
    let (text, has_bom) = match text.strip_prefix(BYTE_ORDER_MARK) {
        Some(rest) => (rest, true),
        None => (text, false),
    };

    let mut lines = Vec::new();
    let mut endings = Vec::new();
    let mut rest = text;

    while let Some(idx) = rest.find('\n') {
        let line = &rest[..idx];
        match line.strip_suffix('\r') {
            Some(stripped) => {
                lines.push(stripped);
                endings.push(Some(LineEnding::CrLf));
            }
            None => {
                lines.push(line);
                endings.push(Some(LineEnding::Lf));
            }
        }
        rest = &rest[idx + 1..];
    }

    lines.push(rest);
    endings.push(None);

    SplitText {
        lines,
        endings,
        has_bom,
    }
}
