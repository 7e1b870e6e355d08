//! Test utilities for flight validation testing


/// Split a row on commas without any quoting rules
pub fn fields(row: &str) -> Vec<String> {
    row.split(',').map(str::to_string).collect()
}

/// A row that passes every validation step
pub const VALID_ROW: &str = "FL1,NYC,LAX,2024-01-01 09:00,2024-01-01 10:00,100";
