//! In-memory graph store for testing and embedding.

use std::collections::{HashMap, HashSet};

use log::trace;

use super::{GraphStore, NodeId, NodeLabel, Properties, RelationType};
use crate::error::{ExportError, Result};

/// A node held by the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredNode {
    /// Unique identifier (assigned by the store)
    pub id: NodeId,
    /// Node label
    pub label: NodeLabel,
    /// Flat property bag
    pub properties: Properties,
}

/// In-memory [`GraphStore`] implementation.
///
/// **Warning**: all data is lost when the store is dropped. Intended for
/// tests and short-lived embedding; the inspection accessors exist so tests
/// can assert on node, relationship and push counts.
#[derive(Debug, Default)]
pub struct MemoryGraphStore {
    node_counter: NodeId,
    nodes: HashMap<NodeId, StoredNode>,
    // Only get_or_create registers keys here; create never does.
    by_key: HashMap<(NodeLabel, String), NodeId>,
    relationships: HashSet<(NodeId, RelationType, NodeId)>,
    staged: HashMap<NodeId, Vec<(RelationType, NodeId)>>,
    push_counts: HashMap<NodeId, u64>,
}

impl MemoryGraphStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of nodes in the store.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of nodes carrying the given label.
    pub fn node_count_with_label(&self, label: NodeLabel) -> usize {
        self.nodes.values().filter(|n| n.label == label).count()
    }

    /// Number of persisted relationships of the given type.
    pub fn relationship_count(&self, relation: RelationType) -> usize {
        self.relationships
            .iter()
            .filter(|(_, r, _)| *r == relation)
            .count()
    }

    /// True if a persisted relationship `source -[relation]-> target` exists.
    pub fn has_relationship(
        &self,
        source: NodeId,
        relation: RelationType,
        target: NodeId,
    ) -> bool {
        self.relationships.contains(&(source, relation, target))
    }

    /// Look up a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&StoredNode> {
        self.nodes.get(&id)
    }

    /// Look up a node registered under `label` and key `name`.
    ///
    /// Only nodes inserted via [`GraphStore::get_or_create`] are keyed.
    pub fn node_by_key(&self, label: NodeLabel, name: &str) -> Option<&StoredNode> {
        self.by_key
            .get(&(label, name.to_string()))
            .and_then(|id| self.nodes.get(id))
    }

    /// Number of times [`GraphStore::push`] was called for `node`.
    pub fn push_count(&self, node: NodeId) -> u64 {
        self.push_counts.get(&node).copied().unwrap_or(0)
    }

    fn next_node_id(&mut self) -> NodeId {
        let id = self.node_counter;
        self.node_counter += 1;
        id
    }

    fn require_node(&self, id: NodeId) -> Result<()> {
        if self.nodes.contains_key(&id) {
            Ok(())
        } else {
            Err(ExportError::NodeNotFound {
                node_id: id.to_string(),
            })
        }
    }
}

impl GraphStore for MemoryGraphStore {
    fn create(&mut self, label: NodeLabel, properties: Properties) -> Result<NodeId> {
        let id = self.next_node_id();
        trace!("memory store: create {label} node {id}");
        self.nodes.insert(
            id,
            StoredNode {
                id,
                label,
                properties,
            },
        );
        Ok(id)
    }

    fn get_or_create(
        &mut self,
        label: NodeLabel,
        key: &str,
        properties: Properties,
    ) -> Result<NodeId> {
        if let Some(id) = self.by_key.get(&(label, key.to_string())) {
            trace!("memory store: reusing {label} node {id} for key '{key}'");
            return Ok(*id);
        }

        let id = self.create(label, properties)?;
        self.by_key.insert((label, key.to_string()), id);
        Ok(id)
    }

    fn relate(&mut self, source: NodeId, relation: RelationType, target: NodeId) -> Result<()> {
        self.require_node(source)?;
        self.require_node(target)?;
        self.staged.entry(source).or_default().push((relation, target));
        Ok(())
    }

    fn push(&mut self, node: NodeId) -> Result<()> {
        self.require_node(node)?;
        for (relation, target) in self.staged.remove(&node).unwrap_or_default() {
            // HashSet insert makes re-established relationships idempotent
            self.relationships.insert((node, relation, target));
        }
        *self.push_counts.entry(node).or_insert(0) += 1;
        Ok(())
    }
}
