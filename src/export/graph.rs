//! Graph upsert procedure.
//!
//! Writes every project of the corpus into a property graph store:
//! Project and Namespace nodes are created fresh on every run, Language
//! nodes are shared by name across projects and runs.

use log::debug;

use crate::corpus::{language_records, Corpus};
use crate::error::Result;
use crate::graph::GraphStore;
use crate::models::{LanguageNode, NamespaceNode, ProjectNode};

/// Upsert the corpus into the given graph store.
///
/// For every project, in sequence order:
/// 1. create a Project node (unconditionally),
/// 2. create a Namespace node (unconditionally),
/// 3. stage Namespace `BELONGS_TO` Project,
/// 4. for every language: get-or-create a Language node by name, stage
///    Language `IS_CONTAINED_IN` Project, and push the language node
///    immediately,
/// 5. push the namespace node after all languages.
///
/// Re-running against the same store duplicates Project and Namespace nodes
/// but reuses Language nodes by name. This asymmetry is intentional.
///
/// # Errors
///
/// The first failing store operation aborts the remaining loop; nodes already
/// written stay in the store (no transaction wrapping, no rollback).
pub fn export_graph(store: &mut dyn GraphStore, corpus: &Corpus) -> Result<()> {
    for project in &corpus.projects {
        debug!("Upserting project in namespace '{}'", project.namespace.name);
        let project_node = ProjectNode::create(store, project)?;
        let namespace_node = NamespaceNode::create(store, &project.namespace)?;
        namespace_node.belongs_to(store, &project_node)?;

        for record in language_records(&project.languages) {
            let language_node = LanguageNode::get_or_create(store, &record)?;
            language_node.is_contained_in(store, &project_node)?;
            language_node.push(store)?;
        }

        namespace_node.push(store)?;
    }

    Ok(())
}
