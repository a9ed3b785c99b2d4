use crate::catalog::Catalog;

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

/// Char index on `line` of an LSP column counted in UTF-16 code units
///
/// A column inside a surrogate pair maps to the char it belongs to. Columns
/// past the end clamp to the line length.
pub fn char_index_of_utf16(line: &str, column: usize) -> usize {
    let mut units = 0;
    for (idx, c) in line.chars().enumerate() {
        units += c.len_utf16();
        if units > column {
            return idx;
        }
    }
    line.chars().count()
}

/// Word under `character` (a UTF-16 column) on `line`
///
/// A word is a run of ASCII letters, digits, `_` and `.`, so dotted
/// component names such as `prometheus.scrape` are returned whole. A cursor
/// just past the end of a word still selects it.
pub fn word_at(line: &str, character: usize) -> Option<&str> {
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let cursor = char_index_of_utf16(line, character);

    let mut start = cursor;
    while start > 0 && is_word_char(chars[start - 1].1) {
        start -= 1;
    }

    let mut end = cursor;
    while end < chars.len() && is_word_char(chars[end].1) {
        end += 1;
    }

    if start >= end {
        return None;
    }

    let byte_start = chars[start].0;
    let byte_end = chars.get(end).map_or(line.len(), |(idx, _)| *idx);
    Some(&line[byte_start..byte_end])
}

/// Markdown hover for a known component
pub fn hover_markdown(catalog: &Catalog, word: &str) -> Option<String> {
    let description = catalog.describe_component(word)?;
    Some(format!(
        "**{}**\n\nGrafana Alloy component\n\n{}",
        word, description
    ))
}
