//! Editor Features
//!
//! Catalog-driven completion and hover, plus component outline symbols.
//! Plain functions over text; the LSP handlers only fetch the document.

pub mod completion;
pub mod hover;
pub mod symbols;

pub use completion::{completion_items, COMPLETION_TRIGGER_CHARACTERS};
pub use hover::{hover_markdown, word_at};
pub use symbols::{component_symbols, ComponentSymbol};
