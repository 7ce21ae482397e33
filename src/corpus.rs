//! Corpus data model: typed records for projects, namespaces and languages.
//!
//! A corpus is an object whose keys are category names, each mapping to a
//! sequence of records. The `"Projects"` category is typed and interpreted by
//! the graph export; all other categories are carried verbatim so they pass
//! through JSON and console export unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{ExportError, Result};

/// The full dataset being exported, keyed by category name.
///
/// Constructed once per export session, either by an upstream producer or
/// deserialized from a JSON file, and never mutated during export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    /// Project records, the one category this crate interprets
    #[serde(rename = "Projects")]
    pub projects: Vec<Project>,
    /// Additional top-level categories, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Corpus {
    /// True if the corpus holds no projects and no extra categories.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty() && self.extra.is_empty()
    }

    /// Parse a corpus from a JSON reader.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Serialization`] if the input is not valid JSON
    /// for the corpus shape (including a missing `"Projects"` key).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).map_err(|e| {
            ExportError::serialization("input does not contain valid structured data", Some(e))
        })
    }

    /// Parse a corpus from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be opened and
    /// [`ExportError::Serialization`] if its content is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref()).map_err(|e| ExportError::io(path.as_ref(), e))?;
        Self::from_reader(file)
    }
}

/// One software project's metadata.
///
/// Fields beyond `namespace` and `languages` are opaque and flatten through
/// to JSON and console output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// The organizational unit owning this project
    pub namespace: Namespace,
    /// Per-language metrics, keyed by language name
    pub languages: BTreeMap<String, LanguageMetrics>,
    /// Opaque additional fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The organizational unit owning a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Namespace {
    /// Namespace name
    pub name: String,
    /// Opaque additional fields
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Metrics recorded for one language within a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageMetrics {
    /// Line count for this language
    #[serde(default)]
    pub lines: i64,
    /// Opaque additional metrics
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A flat language record: one language name merged with its metrics,
/// suitable for a single graph upsert call.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageRecord {
    /// Language name (the key of the source mapping)
    pub name: String,
    /// The metrics recorded under that name
    pub metrics: LanguageMetrics,
}

/// Flatten a per-project language mapping into one record per language.
///
/// Pure function: total over any well-formed mapping, including the empty
/// one. Output order follows the mapping's key order (sorted by name).
pub fn language_records(languages: &BTreeMap<String, LanguageMetrics>) -> Vec<LanguageRecord> {
    languages
        .iter()
        .map(|(name, metrics)| LanguageRecord {
            name: name.clone(),
            metrics: metrics.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_languages() -> BTreeMap<String, LanguageMetrics> {
        let mut languages = BTreeMap::new();
        languages.insert(
            "Go".to_string(),
            LanguageMetrics {
                lines: 10,
                extra: Map::new(),
            },
        );
        languages.insert(
            "Rust".to_string(),
            LanguageMetrics {
                lines: 5,
                extra: Map::new(),
            },
        );
        languages
    }

    #[test]
    fn test_language_records_one_per_key() {
        let records = language_records(&sample_languages());

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Go");
        assert_eq!(records[0].metrics.lines, 10);
        assert_eq!(records[1].name, "Rust");
        assert_eq!(records[1].metrics.lines, 5);
    }

    #[test]
    fn test_language_records_empty_mapping() {
        let records = language_records(&BTreeMap::new());
        assert!(records.is_empty());
    }

    #[test]
    fn test_corpus_parse_minimal() {
        let corpus = Corpus::from_reader(
            r#"{"Projects": [{"namespace": {"name": "ns1"},
                              "languages": {"Go": {"lines": 10}}}]}"#
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(corpus.projects.len(), 1);
        assert_eq!(corpus.projects[0].namespace.name, "ns1");
        assert_eq!(corpus.projects[0].languages["Go"].lines, 10);
    }

    #[test]
    fn test_corpus_parse_keeps_extra_categories_and_fields() {
        let corpus = Corpus::from_reader(
            r#"{"Projects": [{"name": "proj",
                              "namespace": {"name": "ns1", "id": 7},
                              "languages": {}}],
                "Reports": [{"kind": "summary"}]}"#
                .as_bytes(),
        )
        .unwrap();

        assert_eq!(corpus.projects[0].extra["name"], json!("proj"));
        assert_eq!(corpus.projects[0].namespace.extra["id"], json!(7));
        assert_eq!(corpus.extra["Reports"], json!([{"kind": "summary"}]));
    }

    #[test]
    fn test_corpus_parse_rejects_malformed_input() {
        let err = Corpus::from_reader("not json at all".as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Serialization { .. }));
    }

    #[test]
    fn test_corpus_parse_rejects_missing_projects_key() {
        let err = Corpus::from_reader(r#"{"Reports": []}"#.as_bytes()).unwrap_err();
        assert!(matches!(err, ExportError::Serialization { .. }));
    }

    #[test]
    fn test_corpus_default_is_empty() {
        assert!(Corpus::default().is_empty());
    }
}
