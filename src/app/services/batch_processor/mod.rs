//! Batch processing of flight CSV files
//!
//! This module ties the row reader and the validator together and folds an
//! ordered list of input files into one accepted collection and one
//! rejected collection.
//!
//! # Architecture
//!
//! - [`discovery`] - Resolves the input selection into the ordered file list
//! - [`processor`] - Per-file processing and the fold across files
//! - [`stats`] - Per-file and run-wide counters for reporting
//!
//! Results keep file-then-row order: all rows of the first file, then all
//! rows of the second, and so on. Any file-level failure aborts the batch.
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use flight_processor::app::services::batch_processor::{BatchProcessor, FileDiscovery};
//! use flight_processor::config::{InputSelection, ReaderConfig};
//!
//! # fn example() -> flight_processor::Result<()> {
//! let mut discovery = FileDiscovery::new(InputSelection::Directory("data".into()));
//! let files = discovery.discover()?;
//!
//! let processor = BatchProcessor::new(ReaderConfig::default());
//! let outcome = processor.process_files(&files)?;
//!
//! println!(
//!     "{} accepted, {} rejected",
//!     outcome.records.len(),
//!     outcome.rejections.len()
//! );
//! # Ok(())
//! # }
//! ```

pub mod discovery;
pub mod processor;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use discovery::FileDiscovery;
pub use processor::{BatchOutcome, BatchProcessor, FileOutcome};
pub use stats::{FileStats, ProcessingStats};
