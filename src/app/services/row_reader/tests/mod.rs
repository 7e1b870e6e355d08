//! Test utilities for row reader testing
//!
//! This module provides sample file contents and temporary file helpers
//! shared by the row reader test modules.

use std::io::Write;
use tempfile::NamedTempFile;

// Test modules
mod reader_tests;

/// Helper to create a flight CSV mixing data, comments and blank lines
pub fn create_mixed_flight_csv() -> String {
    r#"# flight_id,origin,destination,departure,arrival,price
FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100

   # indented comment
AB,JFK,LHR,2024-03-01 08:30,2024-03-01 14:45,0
   
  XY9 , CDG , AMS ,2024-05-05 06:00,2024-05-05 07:15, 89.5  "#
        .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
