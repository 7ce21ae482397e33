//! Graph store abstraction and implementations.
//!
//! This module defines the [`GraphStore`] trait and provides implementations:
//! - [`HttpGraphStore`]: Neo4j transactional Cypher endpoint over HTTP
//! - [`MemoryGraphStore`]: In-memory store for testing and embedding
//!
//! ## Design Philosophy
//!
//! - **Injected Capability**: the upsert procedure takes `&mut dyn GraphStore`,
//!   so it runs unchanged against a fake store in tests
//! - **Local Until Pushed**: relationships are staged on their source node and
//!   only persisted by an explicit [`GraphStore::push`]
//! - **Fail Fast**: operations return errors immediately, no silent failures

mod http;
mod memory;

pub use http::HttpGraphStore;
pub use memory::MemoryGraphStore;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Unique identifier for a node, assigned by the store.
pub type NodeId = u64;

/// Flat property bag attached to a node (JSON scalars only).
pub type Properties = Map<String, Value>;

/// Label of a node in the corpus graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeLabel {
    /// A software project
    Project,
    /// The organizational unit owning a project
    Namespace,
    /// A programming language used by one or more projects
    Language,
}

impl std::fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeLabel::Project => write!(f, "Project"),
            NodeLabel::Namespace => write!(f, "Namespace"),
            NodeLabel::Language => write!(f, "Language"),
        }
    }
}

/// Type of a directed relationship between nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationType {
    /// Namespace belongs to Project
    BelongsTo,
    /// Language is contained in Project
    IsContainedIn,
}

impl std::fmt::Display for RelationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationType::BelongsTo => write!(f, "BELONGS_TO"),
            RelationType::IsContainedIn => write!(f, "IS_CONTAINED_IN"),
        }
    }
}

/// Trait defining the graph store interface used by the upsert procedure.
///
/// Relationship updates follow a local-until-pushed model: [`relate`]
/// stages a relationship on its source node, and [`push`] persists that
/// node's staged relationships. Staged relationships that are never pushed
/// are not persisted.
///
/// [`relate`]: GraphStore::relate
/// [`push`]: GraphStore::push
pub trait GraphStore {
    /// Create a node with the given label and properties.
    ///
    /// Always inserts a new node, even if an identical one exists.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::GraphStore`](crate::ExportError::GraphStore)
    /// if the store rejects the operation.
    fn create(&mut self, label: NodeLabel, properties: Properties) -> Result<NodeId>;

    /// Look up a node by its `name` property under `label`, inserting it with
    /// `properties` only if absent.
    ///
    /// An existing node is returned unchanged; its properties are not merged.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::GraphStore`](crate::ExportError::GraphStore)
    /// if the store rejects the operation.
    fn get_or_create(&mut self, label: NodeLabel, key: &str, properties: Properties)
        -> Result<NodeId>;

    /// Stage a directed relationship from `source` to `target` on the source
    /// node.
    ///
    /// Update semantics: establishing the same relationship twice is
    /// idempotent once pushed.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NodeNotFound`](crate::ExportError::NodeNotFound)
    /// if either endpoint is unknown to the store.
    fn relate(&mut self, source: NodeId, relation: RelationType, target: NodeId) -> Result<()>;

    /// Persist the staged relationships of `node` to the backing store.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::NodeNotFound`](crate::ExportError::NodeNotFound)
    /// if the node is unknown, or
    /// [`ExportError::GraphStore`](crate::ExportError::GraphStore) if
    /// persistence fails.
    fn push(&mut self, node: NodeId) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The store trait must stay object-safe: the upsert procedure takes it
    /// as `&mut dyn GraphStore`.
    #[test]
    fn test_trait_object_safe() {
        fn _accept_trait_object(_store: &mut dyn GraphStore) {}
    }

    #[test]
    fn test_relation_type_display() {
        assert_eq!(RelationType::BelongsTo.to_string(), "BELONGS_TO");
        assert_eq!(RelationType::IsContainedIn.to_string(), "IS_CONTAINED_IN");
    }

    #[test]
    fn test_node_label_display() {
        assert_eq!(NodeLabel::Project.to_string(), "Project");
        assert_eq!(NodeLabel::Namespace.to_string(), "Namespace");
        assert_eq!(NodeLabel::Language.to_string(), "Language");
    }
}
