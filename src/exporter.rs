//! The exporter: corpus loading, sink handling and format dispatch.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::{debug, info};

use crate::config::{ExporterConfig, Format};
use crate::corpus::Corpus;
use crate::error::{ExportError, Result};
use crate::export::{export_console, export_graph, export_json};
use crate::graph::{GraphStore, HttpGraphStore};

/// Exports a corpus to a JSON file, console text, or a property graph store.
///
/// Configuration and output format are fixed at construction; the corpus is
/// never mutated during export.
#[derive(Debug)]
pub struct Exporter {
    config: ExporterConfig,
    format: Format,
    corpus: Corpus,
}

impl Exporter {
    /// Create an exporter for a pre-built corpus.
    pub fn new(config: ExporterConfig, format: Format, corpus: Corpus) -> Self {
        Self {
            config,
            format,
            corpus,
        }
    }

    /// Create an exporter by loading the corpus from a JSON file.
    ///
    /// A file whose content is not valid corpus JSON does not fail the
    /// constructor: a single diagnostic is printed and the exporter proceeds
    /// on an empty corpus.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Io`] if the file cannot be opened or read.
    pub fn from_file<P: AsRef<Path>>(
        config: ExporterConfig,
        format: Format,
        path: P,
    ) -> Result<Self> {
        let corpus = match Corpus::from_file(path.as_ref()) {
            Ok(corpus) => corpus,
            Err(ExportError::Serialization { .. }) => {
                println!("The input file does not contain valid JSON data.");
                Corpus::default()
            }
            Err(e) => return Err(e),
        };

        Ok(Self::new(config, format, corpus))
    }

    /// The corpus held by this exporter.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// The output format this exporter was constructed with.
    pub fn format(&self) -> Format {
        self.format
    }

    /// Export the corpus to `out` according to the configured format.
    ///
    /// The sink file is created before any format branch runs and held open
    /// for the whole call; the graph-store branch writes to the remote store
    /// instead and leaves the sink empty.
    ///
    /// # Errors
    ///
    /// - [`ExportError::Io`] if the sink cannot be created or written
    /// - [`ExportError::Connection`] if the graph-store endpoint is
    ///   unreachable or rejects the credentials
    /// - [`ExportError::GraphStore`] if a store operation fails; nodes
    ///   already written are not rolled back
    pub fn export<P: AsRef<Path>>(&self, out: P) -> Result<()> {
        let out = out.as_ref();
        let mut sink = File::create(out).map_err(|e| ExportError::io(out, e))?;

        println!("Exporting...");
        debug!("Export format: {}", self.format);

        match self.format {
            Format::Json => {
                if self.config.verbose {
                    println!("Output written to {}", out.display());
                }
                let rendered = export_json(&self.corpus)?;
                sink.write_all(rendered.as_bytes())
                    .map_err(|e| ExportError::io(out, e))?;
            }
            Format::Console => {
                if self.config.verbose {
                    println!("Output will be printed in console form.");
                }
                let rendered = export_console(&self.corpus)?;
                sink.write_all(rendered.as_bytes())
                    .map_err(|e| ExportError::io(out, e))?;
            }
            Format::GraphStore => {
                if self.config.verbose {
                    println!("Output will be exported to the graph store.");
                }
                let mut store = HttpGraphStore::connect(&self.config.graph)?;
                export_graph(&mut store, &self.corpus)?;
            }
        }

        sink.flush().map_err(|e| ExportError::io(out, e))?;
        info!("Export finished");
        Ok(())
    }

    /// Run the graph upsert procedure against an injected store.
    ///
    /// This bypasses the sink and connection handling of [`export`]
    /// and is the seam for testing the upsert without a live endpoint.
    ///
    /// [`export`]: Exporter::export
    ///
    /// # Errors
    ///
    /// Propagates the first failing store operation.
    pub fn export_to_store(&self, store: &mut dyn GraphStore) -> Result<()> {
        export_graph(store, &self.corpus)
    }
}
