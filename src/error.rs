//! Error types for corpus export operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for corpus export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Comprehensive error type for all export operations.
///
/// The only failure recovered internally is a malformed input corpus file
/// (see [`Exporter::from_file`](crate::Exporter::from_file)); every other
/// error propagates to the caller unchanged.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Format string did not match any supported output format
    #[error("Unknown export format: '{value}' (expected json, console or neo4j)")]
    UnknownFormat {
        /// The rejected format string
        value: String,
    },

    /// I/O error on the output sink or input corpus file
    #[error("I/O error on {}", path.display())]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Graph-store endpoint unreachable or credentials rejected
    #[error("Connection error for {endpoint}")]
    Connection {
        /// Endpoint URL that could not be reached
        endpoint: String,
        /// Underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Graph-store operation failed (e.g. a Cypher statement was rejected)
    #[error("Graph store error: {message}")]
    GraphStore {
        /// Detailed error message
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Node not found in the graph store
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// ID of the missing node
        node_id: String,
    },
}

impl ExportError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a connection error for the given endpoint.
    pub fn connection<E>(endpoint: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Connection {
            endpoint: endpoint.into(),
            source: Box::new(source),
        }
    }

    /// Create a graph-store error from a message and optional source.
    pub fn graph_store<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::GraphStore {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_error() {
        let err = ExportError::UnknownFormat {
            value: "xml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unknown export format: 'xml' (expected json, console or neo4j)"
        );
    }

    #[test]
    fn test_graph_store_error() {
        let err = ExportError::graph_store("statement rejected", None::<std::io::Error>);
        assert_eq!(err.to_string(), "Graph store error: statement rejected");
    }

    #[test]
    fn test_node_not_found_error() {
        let err = ExportError::NodeNotFound {
            node_id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Node not found: 42");
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = ExportError::io(
            "out.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on out.json");
    }
}
