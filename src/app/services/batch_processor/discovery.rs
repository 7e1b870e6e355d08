//! File discovery for flight inputs
//!
//! Resolves the command-line input selection into the ordered list of files
//! to process.

use crate::config::InputSelection;
use crate::constants::CSV_EXTENSION;
use crate::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// File discovery component for flight inputs
#[derive(Debug)]
pub struct FileDiscovery {
    selection: InputSelection,
    ignored_count: usize,
}

impl FileDiscovery {
    /// Create a new file discovery instance
    pub fn new(selection: InputSelection) -> Self {
        Self {
            selection,
            ignored_count: 0,
        }
    }

    /// Number of directory entries skipped by the last discovery
    pub fn ignored_count(&self) -> usize {
        self.ignored_count
    }

    /// Discover the files to process
    ///
    /// A single-file selection is returned as-is; opening it is left to the
    /// row reader. A directory selection lists the regular files directly
    /// inside the directory whose extension is `csv` in any letter case,
    /// sorted by path:
    ///
    /// ```text
    /// flights/
    ///   a.csv        <- processed
    ///   B.CSV        <- processed
    ///   notes.txt    <- ignored
    ///   archive/     <- ignored, not descended
    ///     c.csv
    /// ```
    pub fn discover(&mut self) -> Result<Vec<PathBuf>> {
        self.ignored_count = 0;

        match &self.selection {
            InputSelection::File(path) => Ok(vec![path.clone()]),
            InputSelection::Directory(path) => {
                let path = path.clone();
                self.discover_directory(&path)
            }
        }
    }

    fn discover_directory(&mut self, directory: &Path) -> Result<Vec<PathBuf>> {
        if !directory.is_dir() {
            return Err(Error::file_not_found(directory.display().to_string()));
        }

        debug!("Searching for CSV files in: {}", directory.display());

        let mut files = Vec::new();

        for entry in WalkDir::new(directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = match entry {
                Ok(entry) => entry,
                // Unreadable entries (such as dangling links) only matter if
                // they would have been selected
                Err(e) if e.path().is_some_and(|path| !is_csv_file(path)) => {
                    debug!("Ignoring unreadable entry: {}", e);
                    self.ignored_count += 1;
                    continue;
                }
                Err(e) => {
                    return Err(Error::directory_traversal(
                        format!("Failed to read directory {}", directory.display()),
                        e,
                    ));
                }
            };

            if entry.file_type().is_file() && is_csv_file(entry.path()) {
                files.push(entry.into_path());
            } else {
                self.ignored_count += 1;
            }
        }

        files.sort();

        if files.is_empty() {
            warn!("No CSV files found in {}", directory.display());
        }

        debug!(
            "Found {} CSV files ({} other entries ignored)",
            files.len(),
            self.ignored_count
        );

        Ok(files)
    }
}

/// Check if a path has a `csv` extension, ignoring case
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION))
}
