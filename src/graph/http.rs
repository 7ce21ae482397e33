//! Graph store backed by the Neo4j transactional Cypher HTTP endpoint.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::{debug, info};
use serde_json::{json, Value};

use super::{GraphStore, NodeId, NodeLabel, Properties, RelationType};
use crate::config::GraphEndpoint;
use crate::error::{ExportError, Result};

/// [`GraphStore`] implementation speaking Cypher over HTTP.
///
/// Each `create`/`get_or_create` executes one transactional Cypher request
/// immediately (the node ID is needed for later linking). Relationships are
/// staged locally and written out by [`GraphStore::push`], one `MERGE`
/// statement per staged link.
///
/// The connection is verified eagerly by [`HttpGraphStore::connect`], so an
/// unreachable endpoint or rejected credentials fail before any node is
/// written.
#[derive(Debug)]
pub struct HttpGraphStore {
    endpoint: String,
    agent: ureq::Agent,
    auth_header: String,
    known_nodes: HashSet<NodeId>,
    staged: HashMap<NodeId, Vec<(RelationType, NodeId)>>,
}

impl HttpGraphStore {
    /// Connect to the graph store at the given endpoint.
    ///
    /// Runs a probe statement so connectivity and credentials are checked up
    /// front.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Connection`] if the endpoint is unreachable or
    /// authentication is rejected.
    pub fn connect(endpoint: &GraphEndpoint) -> Result<Self> {
        let url = format!("{}/db/neo4j/tx/commit", endpoint.url());
        info!("Connecting to graph store at {url}");

        let credentials = format!("{}:{}", endpoint.user, endpoint.password);
        let store = Self {
            endpoint: url,
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(30))
                .build(),
            auth_header: format!("Basic {}", BASE64.encode(credentials)),
            known_nodes: HashSet::new(),
            staged: HashMap::new(),
        };

        // Probe statement: verifies reachability and credentials
        store.run("RETURN 1", json!({}))?;
        Ok(store)
    }

    /// Execute one Cypher statement and return the decoded server reply.
    fn run(&self, statement: &str, parameters: Value) -> Result<Value> {
        debug!("Running statement: {statement}");
        let body = json!({
            "statements": [{ "statement": statement, "parameters": parameters }]
        });

        let response = self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &self.auth_header)
            .send_json(body)
            .map_err(|e| ExportError::connection(self.endpoint.clone(), e))?;

        let reply: Value = response
            .into_json()
            .map_err(|e| ExportError::serialization("malformed graph store reply", Some(e)))?;

        if let Some(errors) = reply["errors"].as_array() {
            if let Some(first) = errors.first() {
                let code = first["code"].as_str().unwrap_or("unknown");
                let message = first["message"].as_str().unwrap_or("no message");
                return Err(ExportError::graph_store(
                    format!("{code}: {message}"),
                    None::<std::io::Error>,
                ));
            }
        }

        Ok(reply)
    }

    /// Extract the node ID returned by a `RETURN id(n)` statement.
    fn node_id_from_reply(&self, reply: &Value) -> Result<NodeId> {
        reply["results"][0]["data"][0]["row"][0]
            .as_u64()
            .ok_or_else(|| {
                ExportError::graph_store(
                    "graph store reply carried no node id",
                    None::<std::io::Error>,
                )
            })
    }

    fn require_node(&self, id: NodeId) -> Result<()> {
        if self.known_nodes.contains(&id) {
            Ok(())
        } else {
            Err(ExportError::NodeNotFound {
                node_id: id.to_string(),
            })
        }
    }
}

impl GraphStore for HttpGraphStore {
    fn create(&mut self, label: NodeLabel, properties: Properties) -> Result<NodeId> {
        // Labels come from a closed enum, safe to interpolate
        let statement = format!("CREATE (n:{label}) SET n = $props RETURN id(n)");
        let reply = self.run(&statement, json!({ "props": Value::Object(properties) }))?;
        let id = self.node_id_from_reply(&reply)?;
        debug!("Created {label} node {id}");
        self.known_nodes.insert(id);
        Ok(id)
    }

    fn get_or_create(
        &mut self,
        label: NodeLabel,
        key: &str,
        properties: Properties,
    ) -> Result<NodeId> {
        let statement =
            format!("MERGE (n:{label} {{name: $key}}) ON CREATE SET n += $props RETURN id(n)");
        let reply = self.run(
            &statement,
            json!({ "key": key, "props": Value::Object(properties) }),
        )?;
        let id = self.node_id_from_reply(&reply)?;
        debug!("Matched or created {label} node {id} for key '{key}'");
        self.known_nodes.insert(id);
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
            // MERGE keeps re-established relationships idempotent
            let statement = format!(
                "MATCH (a), (b) WHERE id(a) = $source AND id(b) = $target \
                 MERGE (a)-[:{relation}]->(b)"
            );
            self.run(&statement, json!({ "source": node, "target": target }))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_unreachable_endpoint_fails() {
        // Nothing listens on this port, the probe is refused immediately
        let endpoint = GraphEndpoint {
            protocol: "http".to_string(),
            hostname: "127.0.0.1".to_string(),
            port: 1,
            user: "neo4j".to_string(),
            password: "secret".to_string(),
        };

        let err = HttpGraphStore::connect(&endpoint).unwrap_err();
        assert!(matches!(err, ExportError::Connection { .. }));
    }
}
