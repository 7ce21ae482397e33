//! Export functions, one per output format.
//!
//! - **JSON**: the corpus re-serialized with stable 4-space indentation
//! - **Console**: line-oriented text, one element block per record
//! - **Graph**: node/relationship upsert against a [`GraphStore`](crate::GraphStore)
//!
//! The render functions are pure (corpus in, text out); sink handling lives
//! in [`Exporter`](crate::Exporter).

pub mod console;
pub mod graph;
pub mod json;

pub use console::export_console;
pub use graph::export_graph;
pub use json::export_json;
