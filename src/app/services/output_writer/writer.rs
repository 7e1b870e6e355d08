//! JSON database and error log writing

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::app::models::{FlightRecord, Rejection};
use crate::config::OutputConfig;
use crate::constants::JSON_INDENT;
use crate::{Error, Result};

/// Paths and sizes of the written artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSummary {
    pub json_path: PathBuf,
    pub json_bytes: u64,
    pub errors_path: PathBuf,
    pub errors_bytes: u64,
}

/// Render records as a JSON array indented with four spaces
///
/// An empty slice renders as `[]`. No trailing newline is added.
pub fn render_json(records: &[FlightRecord]) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    records
        .serialize(&mut serializer)
        .map_err(|e| Error::serialization("Failed to serialize flight records", e))?;

    Ok(buffer)
}

/// Render rejections one per line, each newline-terminated
///
/// No rejections renders as an empty string.
pub fn render_error_log(rejections: &[Rejection]) -> String {
    rejections
        .iter()
        .map(|rejection| format!("{}\n", rejection))
        .collect()
}

/// Writes the two output artifacts of a run
#[derive(Debug, Clone)]
pub struct OutputWriter {
    config: OutputConfig,
}

impl OutputWriter {
    /// Create a writer for the configured output locations
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write both artifacts, replacing any previous contents
    pub fn write(
        &self,
        records: &[FlightRecord],
        rejections: &[Rejection],
    ) -> Result<OutputSummary> {
        let json = render_json(records)?;
        write_file(&self.config.json_path, &json)?;

        let error_log = render_error_log(rejections);
        write_file(&self.config.errors_path, error_log.as_bytes())?;

        info!(
            "Wrote {} records to {} and {} rejections to {}",
            records.len(),
            self.config.json_path.display(),
            rejections.len(),
            self.config.errors_path.display()
        );

        Ok(OutputSummary {
            json_path: self.config.json_path.clone(),
            json_bytes: json.len() as u64,
            errors_path: self.config.errors_path.clone(),
            errors_bytes: error_log.len() as u64,
        })
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    std::fs::write(path, contents)
        .map_err(|e| Error::io(format!("Failed to write {}", path.display()), e))
}
