//! Console format export.
//!
//! Renders the corpus as line-oriented text: one compact JSON line per
//! element, followed by a blank line, in category-then-element order.

use std::fmt::Write;

use serde_json::Value;

use crate::corpus::Corpus;
use crate::error::{ExportError, Result};

/// Render the corpus as console text.
///
/// Every top-level category is visited in insertion order; every element of a
/// category's sequence is printed as its compact JSON representation followed
/// by a blank line. Category values that are not sequences are skipped.
///
/// # Errors
///
/// Returns [`ExportError::Serialization`] if the corpus cannot be rendered.
pub fn export_console(corpus: &Corpus) -> Result<String> {
    let value = serde_json::to_value(corpus)
        .map_err(|e| ExportError::serialization("failed to render corpus", Some(e)))?;

    let mut out = String::new();
    if let Value::Object(categories) = value {
        for elements in categories.values() {
            if let Value::Array(elements) = elements {
                for element in elements {
                    // Infallible: writing to a String cannot fail
                    let _ = writeln!(out, "{element}");
                    out.push('\n');
                }
            }
        }
    }

    Ok(out)
}
