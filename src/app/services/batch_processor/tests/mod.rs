//! Test utilities for batch processing
//!
//! This module provides sample flight files and helpers for laying them out
//! in temporary directories.

use std::path::PathBuf;
use tempfile::TempDir;


/// Helper to create a flight file with two good rows and two bad rows
pub fn create_flights_csv() -> String {
    r#"# flights exported 2024-01-02
FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100
FL1,NYC,lax,2024-01-01 10:00,2024-01-01 09:00,100

AB,JFK,LHR,2024-03-01 08:30,2024-03-01 14:45,0
XY9,CDG,AMS,2024-05-05 06:00,2024-05-05 07:15,89.5
"#
    .to_string()
}

/// Helper to create a file holding nothing but comments and blank lines
pub fn create_comment_only_csv() -> String {
    "# nothing to see\n\n   \n# still nothing\n".to_string()
}

/// Helper to write a file into a temporary directory
pub fn write_file(temp_dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}
