//! Alloy Formatter
//!
//! Re-indents a document by brace depth. Only the first and last character
//! of each trimmed line move the indent level; everything between is left
//! as written.

use crate::parser::{self, LineKind};

/// One level of indentation
pub const INDENT_UNIT: &str = "  ";

/// Re-indent `content` with [`INDENT_UNIT`] per nesting level
///
/// Blank lines and `//` comment lines are kept verbatim. Every line keeps
/// its own terminator, and a leading byte order mark stays in place.
pub fn format_document(content: &str) -> String {
    let split = parser::split_lines(content);
    let mut indent_level: usize = 0;
    let mut formatted = String::with_capacity(content.len());

    if split.has_bom {
        formatted.push(parser::BYTE_ORDER_MARK);
    }

    for (line, ending) in split.lines.iter().zip(&split.endings) {
        if matches!(
            LineKind::classify(line),
            LineKind::Blank | LineKind::LineComment
        ) {
            formatted.push_str(line);
        } else {
            let trimmed = line.trim();

            if trimmed.starts_with('}') {
                indent_level = indent_level.saturating_sub(1);
            }

            formatted.push_str(&INDENT_UNIT.repeat(indent_level));
            formatted.push_str(trimmed);

            if trimmed.ends_with('{') {
                indent_level += 1;
            }
        }

        if let Some(ending) = ending {
            formatted.push_str(ending.as_str());
        }
    }

    formatted
}
