//! Processing statistics for flight batches
//!
//! This module provides counters for tracking how many rows each file
//! contributed and why rows were rejected. Statistics are for reporting
//! only and never influence the output artifacts.

use crate::app::models::RejectionReason;
use std::collections::BTreeMap;

/// Counters for a single input file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileStats {
    /// File name (last path component)
    pub file_name: String,

    /// Candidate rows handed to the validator
    pub rows_read: usize,

    /// Rows that became flight records
    pub accepted: usize,

    /// Rows that were rejected
    pub rejected: usize,

    /// Rejections broken down by reason, in pipeline order
    pub rejections_by_reason: BTreeMap<RejectionReason, usize>,
}

impl FileStats {
    /// Create empty statistics for a file
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            ..Default::default()
        }
    }

    /// Count an accepted row
    pub fn record_accepted(&mut self) {
        self.rows_read += 1;
        self.accepted += 1;
    }

    /// Count a rejected row
    pub fn record_rejected(&mut self, reason: RejectionReason) {
        self.rows_read += 1;
        self.rejected += 1;
        *self.rejections_by_reason.entry(reason).or_insert(0) += 1;
    }

    /// True if the file contributed nothing to either output
    pub fn is_empty(&self) -> bool {
        self.rows_read == 0
    }
}

/// Counters for a whole run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProcessingStats {
    /// Number of files read
    pub files_processed: usize,

    /// Candidate rows across all files
    pub rows_read: usize,

    /// Accepted rows across all files
    pub accepted: usize,

    /// Rejected rows across all files
    pub rejected: usize,

    /// Rejections by reason across all files
    pub rejections_by_reason: BTreeMap<RejectionReason, usize>,

    /// Per-file statistics, in processing order
    pub files: Vec<FileStats>,
}

impl ProcessingStats {
    /// Fold one file's statistics into the run totals
    pub fn absorb(&mut self, file_stats: FileStats) {
        self.files_processed += 1;
        self.rows_read += file_stats.rows_read;
        self.accepted += file_stats.accepted;
        self.rejected += file_stats.rejected;

        for (reason, count) in &file_stats.rejections_by_reason {
            *self.rejections_by_reason.entry(*reason).or_insert(0) += count;
        }

        self.files.push(file_stats);
    }

    /// Rejection count for one reason
    pub fn rejected_for(&self, reason: RejectionReason) -> usize {
        self.rejections_by_reason.get(&reason).copied().unwrap_or(0)
    }

    /// Calculate acceptance rate as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.rows_read == 0 {
            0.0
        } else {
            (self.accepted as f64 / self.rows_read as f64) * 100.0
        }
    }
}
