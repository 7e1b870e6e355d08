//! Line-oriented CSV reading
//!
//! This module handles file loading, blank/comment filtering and per-line
//! field tokenization.

use std::path::Path;
use tracing::{debug, info};

use crate::app::models::RawEntry;
use crate::config::ReaderConfig;
use crate::{Error, Result};

/// Label used in errors for text that did not come from a file
const IN_MEMORY_SOURCE: &str = "<memory>";

/// Reader producing candidate rows from flight CSV text
#[derive(Debug, Clone, Default)]
pub struct RowReader {
    config: ReaderConfig,
}

impl RowReader {
    /// Create a new reader with the given tokenization settings
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read a file and return its candidate rows in file order
    ///
    /// Failing to open or decode the file is fatal for the run and is
    /// returned as an error; nothing is skipped silently at this level.
    pub fn read_file(&self, file_path: &Path) -> Result<Vec<RawEntry>> {
        info!("Reading flight file: {}", file_path.display());

        let content = std::fs::read_to_string(file_path).map_err(|e| {
            Error::io(format!("Failed to read file {}", file_path.display()), e)
        })?;

        self.collect_entries(&content, &file_path.display().to_string())
    }

    /// Read in-memory text with the same rules as [`RowReader::read_file`]
    pub fn read_str(&self, content: &str) -> Result<Vec<RawEntry>> {
        self.collect_entries(content, IN_MEMORY_SOURCE)
    }

    fn collect_entries(&self, content: &str, source: &str) -> Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        let mut blank_lines = 0;
        let mut comment_lines = 0;

        for (index, line) in physical_lines(content).enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() {
                blank_lines += 1;
                continue;
            }

            if trimmed.starts_with(self.config.comment_prefix) {
                comment_lines += 1;
                continue;
            }

            let line_number = index + 1;
            let fields = self.split_fields(trimmed, source, line_number)?;

            entries.push(RawEntry::new(line_number, trimmed, fields));
        }

        debug!(
            "{}: {} candidate rows, {} blank lines, {} comment lines skipped",
            source,
            entries.len(),
            blank_lines,
            comment_lines
        );

        Ok(entries)
    }

    /// Tokenize a single line as exactly one delimited row
    fn split_fields(&self, line: &str, source: &str, line_number: usize) -> Result<Vec<String>> {
        let tokenize_error = |e: csv::Error| {
            Error::csv_parsing(
                source,
                format!("Failed to tokenize line {}", line_number),
                Some(e),
            )
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.config.delimiter)
            .from_reader(line.as_bytes());

        let mut record = csv::StringRecord::new();
        if !csv_reader.read_record(&mut record).map_err(tokenize_error)? {
            return Ok(Vec::new());
        }
        let fields = record.iter().map(str::to_string).collect();

        if csv_reader.read_record(&mut record).map_err(tokenize_error)? {
            return Err(Error::csv_parsing(
                source,
                format!("Line {} holds more than one record", line_number),
                None,
            ));
        }

        Ok(fields)
    }
}

/// Split text into lines on `\n`, `\r\n` and bare `\r`
fn physical_lines(content: &str) -> impl Iterator<Item = &str> {
    content.lines().flat_map(|line| line.split('\r'))
}
