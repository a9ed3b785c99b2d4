//! LSP Protocol Implementation
//!
//! Backend wiring the pure validation, formatting and lookup functions to
//! editor events.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
pub use document::DocumentState;
