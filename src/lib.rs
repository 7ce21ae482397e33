//! # corpus-export
//!
//! Exports a software analysis corpus to JSON, console text, or a Neo4j
//! property graph.
//!
//! A corpus is a mapping of category names to sequences of records. The only
//! category this crate interprets is `"Projects"`: each project carries a
//! namespace and per-language line-count metrics. Everything else passes
//! through JSON and console export untouched.
//!
//! ## Core Principles
//!
//! - **Explicit Configuration**: no ambient globals, the exporter takes its
//!   configuration and output format at construction
//! - **Closed Format Set**: the output format is a closed enum, unknown
//!   format strings are rejected eagerly
//! - **Injected Graph Store**: the upsert procedure runs against a
//!   [`GraphStore`] capability, so it is testable without a live database
//!
//! ## Architecture
//!
//! ```text
//! Exporter (format dispatch, sink handling)
//!     ↓
//! Export functions (JSON render, console render, graph upsert)
//!     ↓
//! Model adapters (Project, Namespace, Language nodes)
//!     ↓
//! GraphStore (memory, HTTP/Cypher)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use corpus_export::{Corpus, Exporter, ExporterConfig, Format};
//!
//! let corpus: Corpus = serde_json::from_str(
//!     r#"{"Projects": [{"namespace": {"name": "ns1"},
//!                       "languages": {"Rust": {"lines": 5}}}]}"#,
//! ).unwrap();
//!
//! let exporter = Exporter::new(ExporterConfig::default(), Format::Json, corpus);
//! assert_eq!(exporter.format(), Format::Json);
//! // exporter.export(Path::new("corpus.json"))?;
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod export;
pub mod exporter;
pub mod graph;
pub mod models;

// Re-export main types
pub use config::{ExporterConfig, Format, GraphEndpoint};
pub use corpus::{language_records, Corpus, LanguageMetrics, LanguageRecord, Namespace, Project};
pub use error::{ExportError, Result};
pub use exporter::Exporter;
pub use graph::{
    GraphStore, HttpGraphStore, MemoryGraphStore, NodeId, NodeLabel, Properties, RelationType,
};
