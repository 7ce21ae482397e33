//! JSON format export.
//!
//! Renders the full corpus as indented JSON, byte-for-byte reproducible for
//! a given corpus.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::corpus::Corpus;
use crate::error::{ExportError, Result};

/// Render the corpus as JSON with 4-space indentation.
///
/// Reloading the rendered text yields a corpus equal to the input (round-trip
/// identity).
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if the corpus cannot be rendered;
/// this does not happen for corpora built from JSON input.
pub fn export_json(corpus: &Corpus) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    corpus
        .serialize(&mut serializer)
        .map_err(|e| ExportError::serialization("failed to render corpus as JSON", Some(e)))?;

    String::from_utf8(buffer)
        .map_err(|e| ExportError::serialization("rendered JSON is not valid UTF-8", Some(e)))
}
