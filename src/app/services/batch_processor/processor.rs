//! Per-file processing and the fold across files
//!
//! [`BatchProcessor::process_file`] reads one file and partitions its rows.
//! [`BatchProcessor::process_files`] folds that over a file list, threading
//! the accumulated outcome through as an explicit value.

use std::path::{Path, PathBuf};
use tracing::info;

use super::stats::{FileStats, ProcessingStats};
use crate::Result;
use crate::app::models::{FlightRecord, Rejection};
use crate::app::services::flight_validator::validate_entry;
use crate::app::services::row_reader::RowReader;
use crate::config::ReaderConfig;

/// Partitioned rows of a single file
#[derive(Debug, Clone, Default)]
pub struct FileOutcome {
    /// Accepted rows, in file order
    pub records: Vec<FlightRecord>,

    /// Rejected rows, in file order
    pub rejections: Vec<Rejection>,

    /// Counters for this file
    pub stats: FileStats,
}

/// Partitioned rows of a whole run
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Accepted rows, in file-then-row order
    pub records: Vec<FlightRecord>,

    /// Rejected rows, in file-then-row order
    pub rejections: Vec<Rejection>,

    /// Counters for the run
    pub stats: ProcessingStats,
}

impl BatchOutcome {
    /// Append one file's outcome after everything accumulated so far
    pub fn merge(mut self, file: FileOutcome) -> Self {
        self.records.extend(file.records);
        self.rejections.extend(file.rejections);
        self.stats.absorb(file.stats);
        self
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "{} files, {} rows: {} accepted, {} rejected",
            self.stats.files_processed,
            self.stats.rows_read,
            self.records.len(),
            self.rejections.len()
        )
    }
}

/// Runs the row reader and the validator over input files
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    reader: RowReader,
}

impl BatchProcessor {
    /// Create a new processor with the given tokenization settings
    pub fn new(reader_config: ReaderConfig) -> Self {
        Self {
            reader: RowReader::new(reader_config),
        }
    }

    /// Read one file and partition its rows into records and rejections
    pub fn process_file(&self, file_path: &Path) -> Result<FileOutcome> {
        let source_name = source_file_name(file_path);
        let entries = self.reader.read_file(file_path)?;

        let mut outcome = FileOutcome {
            stats: FileStats::new(&source_name),
            ..Default::default()
        };

        for entry in &entries {
            match validate_entry(entry) {
                Ok(record) => {
                    outcome.records.push(record);
                    outcome.stats.record_accepted();
                }
                Err(reason) => {
                    outcome
                        .rejections
                        .push(Rejection::new(&source_name, &entry.raw, reason));
                    outcome.stats.record_rejected(reason);
                }
            }
        }

        info!(
            "Processed {}: {} accepted, {} rejected",
            source_name, outcome.stats.accepted, outcome.stats.rejected
        );

        Ok(outcome)
    }

    /// Process files in order, stopping at the first file-level error
    pub fn process_files(&self, files: &[PathBuf]) -> Result<BatchOutcome> {
        self.process_files_with(files, |_| {})
    }

    /// Like [`BatchProcessor::process_files`], calling `on_file` after each file
    pub fn process_files_with<F>(&self, files: &[PathBuf], mut on_file: F) -> Result<BatchOutcome>
    where
        F: FnMut(&FileStats),
    {
        let outcome = files
            .iter()
            .try_fold(BatchOutcome::default(), |accumulated, file_path| {
                let file_outcome = self.process_file(file_path)?;
                on_file(&file_outcome.stats);
                Ok::<_, crate::Error>(accumulated.merge(file_outcome))
            })?;

        info!("Batch complete: {}", outcome.summary());
        Ok(outcome)
    }
}

/// Name used to tag rejections: the last path component
fn source_file_name(file_path: &Path) -> String {
    file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file_path.display().to_string())
}
