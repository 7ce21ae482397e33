//! Integration tests for format dispatch and sink handling.

use std::fs;
use std::path::PathBuf;

use corpus_export::{Corpus, ExportError, Exporter, ExporterConfig, Format, GraphEndpoint};
use tempfile::TempDir;

fn sample_corpus() -> Corpus {
    serde_json::from_str(
        r#"{"Projects": [{"namespace": {"name": "ns1"},
                          "languages": {"Go": {"lines": 10},
                                        "Rust": {"lines": 5}}}]}"#,
    )
    .unwrap()
}

fn sink(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[test]
fn test_json_export_round_trips_through_file() {
    let dir = TempDir::new().unwrap();
    let out = sink(&dir, "corpus.json");
    let corpus = sample_corpus();

    let exporter = Exporter::new(ExporterConfig::default(), Format::Json, corpus.clone());
    exporter.export(&out).unwrap();

    let reloaded =
        Exporter::from_file(ExporterConfig::default(), Format::Json, &out).unwrap();
    assert_eq!(reloaded.corpus(), &corpus);
}

#[test]
fn test_json_export_uses_four_space_indent() {
    let dir = TempDir::new().unwrap();
    let out = sink(&dir, "corpus.json");

    Exporter::new(ExporterConfig::default(), Format::Json, sample_corpus())
        .export(&out)
        .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("{\n    \"Projects\""));
}

#[test]
fn test_console_export_writes_one_block_per_element() {
    let dir = TempDir::new().unwrap();
    let out = sink(&dir, "corpus.txt");
    let corpus: Corpus = serde_json::from_str(
        r#"{"Projects": [{"namespace": {"name": "ns1"}, "languages": {}},
                         {"namespace": {"name": "ns2"}, "languages": {}}]}"#,
    )
    .unwrap();

    Exporter::new(ExporterConfig::default(), Format::Console, corpus)
        .export(&out)
        .unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let non_empty: Vec<&str> = written.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(non_empty.len(), 2);
    assert!(non_empty[0].contains("ns1"));
    assert!(non_empty[1].contains("ns2"));
}

#[test]
fn test_from_file_with_invalid_json_yields_empty_corpus() {
    let dir = TempDir::new().unwrap();
    let input = sink(&dir, "broken.json");
    fs::write(&input, "this is not json").unwrap();

    let exporter =
        Exporter::from_file(ExporterConfig::default(), Format::Console, &input).unwrap();

    assert!(exporter.corpus().is_empty());
}

#[test]
fn test_from_file_with_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let input = sink(&dir, "does-not-exist.json");

    let err =
        Exporter::from_file(ExporterConfig::default(), Format::Json, &input).unwrap_err();
    assert!(matches!(err, ExportError::Io { .. }));
}

#[test]
fn test_export_on_empty_corpus_still_writes_sink() {
    let dir = TempDir::new().unwrap();
    let input = sink(&dir, "broken.json");
    let out = sink(&dir, "out.json");
    fs::write(&input, "{{{").unwrap();

    let exporter =
        Exporter::from_file(ExporterConfig::default(), Format::Json, &input).unwrap();
    exporter.export(&out).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    let reloaded: Corpus = serde_json::from_str(&written).unwrap();
    assert!(reloaded.is_empty());
}

#[test]
fn test_graph_export_creates_sink_before_connecting() {
    let dir = TempDir::new().unwrap();
    let out = sink(&dir, "unused.out");
    let config = ExporterConfig {
        verbose: false,
        graph: GraphEndpoint {
            protocol: "http".to_string(),
            hostname: "127.0.0.1".to_string(),
            port: 1,
            user: "neo4j".to_string(),
            password: "wrong".to_string(),
        },
    };

    let exporter = Exporter::new(config, Format::GraphStore, sample_corpus());
    let err = exporter.export(&out).unwrap_err();

    assert!(matches!(err, ExportError::Connection { .. }));
    // The sink is opened before any format branch runs, and stays empty
    assert_eq!(fs::read(&out).unwrap().len(), 0);
}

#[test]
fn test_unknown_format_rejected_eagerly() {
    let err = "yaml".parse::<Format>().unwrap_err();
    assert!(matches!(err, ExportError::UnknownFormat { value } if value == "yaml"));
}
