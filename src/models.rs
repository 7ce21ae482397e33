//! Model adapters mapping corpus records onto graph nodes.
//!
//! Each adapter is a thin pass-through: it selects the node properties for
//! its record type and forwards to the injected [`GraphStore`]. Node handles
//! expose the relationship operations the upsert procedure needs
//! (`belongs_to`, `is_contained_in`) plus `push`.
//!
//! Only scalar fields become node properties; nested structures (the
//! namespace record, the languages mapping) are modeled as their own nodes
//! and relationships instead.

use serde_json::{Map, Value};

use crate::corpus::{LanguageRecord, Namespace, Project};
use crate::error::Result;
use crate::graph::{GraphStore, NodeId, NodeLabel, Properties, RelationType};

/// Keep only the scalar entries of a JSON object (strings, numbers, bools).
fn scalar_properties(fields: &Map<String, Value>) -> Properties {
    fields
        .iter()
        .filter(|(_, value)| !matches!(value, Value::Object(_) | Value::Array(_)))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Handle to a Project node.
#[derive(Debug, Clone, Copy)]
pub struct ProjectNode {
    id: NodeId,
}

impl ProjectNode {
    /// Create a Project node from the project's scalar fields.
    ///
    /// Always inserts a new node: re-running an export duplicates Project
    /// nodes.
    pub fn create(store: &mut dyn GraphStore, project: &Project) -> Result<Self> {
        let id = store.create(NodeLabel::Project, scalar_properties(&project.extra))?;
        Ok(Self { id })
    }

    /// Store-assigned node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// Handle to a Namespace node.
#[derive(Debug, Clone, Copy)]
pub struct NamespaceNode {
    id: NodeId,
}

impl NamespaceNode {
    /// Create a Namespace node from the namespace record.
    ///
    /// Always inserts a new node, mirroring [`ProjectNode::create`].
    pub fn create(store: &mut dyn GraphStore, namespace: &Namespace) -> Result<Self> {
        let mut properties = scalar_properties(&namespace.extra);
        properties.insert("name".to_string(), namespace.name.clone().into());
        let id = store.create(NodeLabel::Namespace, properties)?;
        Ok(Self { id })
    }

    /// Stage a `BELONGS_TO` relationship to the given project.
    pub fn belongs_to(&self, store: &mut dyn GraphStore, project: &ProjectNode) -> Result<()> {
        store.relate(self.id, RelationType::BelongsTo, project.id())
    }

    /// Persist this node's staged relationships.
    pub fn push(&self, store: &mut dyn GraphStore) -> Result<()> {
        store.push(self.id)
    }

    /// Store-assigned node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// Handle to a Language node.
#[derive(Debug, Clone, Copy)]
pub struct LanguageNode {
    id: NodeId,
}

impl LanguageNode {
    /// Get or create a Language node keyed by language name.
    ///
    /// Repeated languages across projects reuse one node per name.
    pub fn get_or_create(store: &mut dyn GraphStore, record: &LanguageRecord) -> Result<Self> {
        let mut properties = scalar_properties(&record.metrics.extra);
        properties.insert("name".to_string(), record.name.clone().into());
        properties.insert("lines".to_string(), record.metrics.lines.into());
        let id = store.get_or_create(NodeLabel::Language, &record.name, properties)?;
        Ok(Self { id })
    }

    /// Stage an `IS_CONTAINED_IN` relationship to the given project.
    pub fn is_contained_in(
        &self,
        store: &mut dyn GraphStore,
        project: &ProjectNode,
    ) -> Result<()> {
        store.relate(self.id, RelationType::IsContainedIn, project.id())
    }

    /// Persist this node's staged relationships.
    pub fn push(&self, store: &mut dyn GraphStore) -> Result<()> {
        store.push(self.id)
    }

    /// Store-assigned node ID.
    pub fn id(&self) -> NodeId {
        self.id
    }
}
