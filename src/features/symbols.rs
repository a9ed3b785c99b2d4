use crate::parser::{self, brace_delta, match_component, LineKind};

/// A component declaration and the lines its block spans
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentSymbol {
    pub component_type: String,
    pub label: String,
    /// Line of the declaration
    pub start_line: usize,
    /// Line where the block's braces balance, or the last line
    pub end_line: usize,
}

impl ComponentSymbol {
    /// Outline name, e.g. `loki.write "default"`
    pub fn name(&self) -> String {
        format!("{} \"{}\"", self.component_type, self.label)
    }
}

/// Component declarations of a document, in line order
pub fn component_symbols(content: &str) -> Vec<ComponentSymbol> {
    let lines = parser::split_lines(content).lines;
    let mut symbols = Vec::new();

    for (line_idx, line) in lines.iter().enumerate() {
        if LineKind::classify(line).is_skipped() {
            continue;
        }

        if let Some(decl) = match_component(line) {
            symbols.push(ComponentSymbol {
                component_type: decl.component_type.to_string(),
                label: decl.label.to_string(),
                start_line: line_idx,
                end_line: block_end(&lines, line_idx),
            });
        }
    }

    symbols
}

fn block_end(lines: &[&str], start: usize) -> usize {
    let mut depth: i64 = 0;

    for (offset, line) in lines[start..].iter().enumerate() {
        if offset > 0 && LineKind::classify(line).is_skipped() {
            continue;
        }

        depth += brace_delta(line);
        if depth <= 0 {
            return start + offset;
        }
    }

    lines.len().saturating_sub(1)
}
