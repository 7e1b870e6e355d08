//! Application constants for the flight processor
//!
//! This module contains the fixed vocabulary, formats and default values
//! used throughout the flight processor.

// =============================================================================
// Input Format
// =============================================================================

/// Field delimiter for input rows
pub const FIELD_DELIMITER: u8 = b',';

/// Lines starting with this prefix (after trimming) are comments
pub const COMMENT_PREFIX: char = '#';

/// Extension (compared case-insensitively) selecting files in directory mode
pub const CSV_EXTENSION: &str = "csv";

/// Number of fields in a flight row
pub const EXPECTED_FIELD_COUNT: usize = 6;

/// Field positions within a flight row
pub mod field_index {
    pub const FLIGHT_ID: usize = 0;
    pub const ORIGIN: usize = 1;
    pub const DESTINATION: usize = 2;
    pub const DEPARTURE: usize = 3;
    pub const ARRIVAL: usize = 4;
    pub const PRICE: usize = 5;
}

// =============================================================================
// Validation Rules
// =============================================================================

/// Minimum flight_id length in characters
pub const FLIGHT_ID_MIN_LEN: usize = 2;

/// Maximum flight_id length in characters
pub const FLIGHT_ID_MAX_LEN: usize = 8;

/// Airport code length in characters
pub const AIRPORT_CODE_LEN: usize = 3;

/// chrono format for departure/arrival timestamps
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Textual shape a timestamp must have before it is handed to chrono
///
/// chrono accepts unpadded months, days and hours; the input format
/// requires every component zero-padded.
pub const DATETIME_PATTERN: &str = r"^[0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}$";

/// Rejection reason strings, in pipeline order
pub mod reasons {
    pub const FIELD_COUNT: &str = "incorrect number of fields";
    pub const FLIGHT_ID: &str = "invalid flight_id";
    pub const ORIGIN: &str = "invalid origin code";
    pub const DESTINATION: &str = "invalid destination code";
    pub const DEPARTURE: &str = "invalid departure datetime";
    pub const ARRIVAL: &str = "invalid arrival datetime";
    pub const CHRONOLOGY: &str = "arrival must be after departure";
    pub const PRICE: &str = "invalid price value";
}

// =============================================================================
// Output
// =============================================================================

/// Default JSON output path when `-o` is not given
pub const DEFAULT_OUTPUT_FILE: &str = "db.json";

/// Error log file name, placed next to the JSON output
pub const ERROR_LOG_FILE: &str = "errors.txt";

/// Indentation used for the pretty-printed JSON output
pub const JSON_INDENT: &[u8] = b"    ";

// =============================================================================
// Logging
// =============================================================================

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "flight_processor=warn";
