//! Exporter configuration and output format selection.
//!
//! Configuration is an explicit value passed into
//! [`Exporter::new`](crate::Exporter::new). There is no ambient global
//! configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ExportError;

/// Configuration for an export session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExporterConfig {
    /// Emit informational messages during export
    #[serde(default)]
    pub verbose: bool,
    /// Graph-store endpoint used by the [`Format::GraphStore`] branch
    #[serde(default)]
    pub graph: GraphEndpoint,
}

/// Connection parameters for the graph-store endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphEndpoint {
    /// URL scheme (e.g. "http")
    pub protocol: String,
    /// Host name or address
    pub hostname: String,
    /// TCP port
    pub port: u16,
    /// User name for basic authentication
    pub user: String,
    /// Password for basic authentication
    pub password: String,
}

impl GraphEndpoint {
    /// Base URL of the endpoint, `protocol://hostname:port`.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.hostname, self.port)
    }
}

impl Default for GraphEndpoint {
    fn default() -> Self {
        Self {
            protocol: "http".to_string(),
            hostname: "localhost".to_string(),
            port: 7474,
            user: "neo4j".to_string(),
            password: String::new(),
        }
    }
}

/// Output format for an export session.
///
/// Decided once at construction. Unknown format strings are rejected eagerly
/// by [`Format::from_str`] instead of silently producing an empty sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    /// Serialize the full corpus as indented JSON to the sink
    Json,
    /// Write one text block per corpus element to the sink
    Console,
    /// Upsert the corpus into a property graph store (Neo4j)
    GraphStore,
}

impl FromStr for Format {
    type Err = ExportError;

    /// Parse a format name, case-insensitively.
    ///
    /// Accepts `"json"`, `"console"` and `"neo4j"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "console" => Ok(Format::Console),
            "neo4j" => Ok(Format::GraphStore),
            _ => Err(ExportError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Console => write!(f, "console"),
            Format::GraphStore => write!(f, "neo4j"),
        }
    }
}
