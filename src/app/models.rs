//! Data models for flight processing
//!
//! This module contains the core data structures passed between the row
//! reader, the validator and the output writer.

use crate::constants::reasons;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Raw Input
// =============================================================================

/// One non-blank, non-comment input line and its delimited fields
///
/// `raw` is the trimmed line exactly as it appeared in the file; it is what
/// the error log reports for a rejected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// 1-based line number in the source file
    pub line_number: usize,

    /// Trimmed original text of the line
    pub raw: String,

    /// Fields in column order, untrimmed
    pub fields: Vec<String>,
}

impl RawEntry {
    pub fn new(line_number: usize, raw: impl Into<String>, fields: Vec<String>) -> Self {
        Self {
            line_number,
            raw: raw.into(),
            fields,
        }
    }

    /// Number of fields on the line
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

// =============================================================================
// Validated Output
// =============================================================================

/// A flight row that passed every validation step
///
/// Field order is the JSON key order of the output database.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    /// Alphanumeric flight identifier, 2 to 8 characters
    pub flight_id: String,

    /// Three-letter uppercase origin airport code
    pub origin: String,

    /// Three-letter uppercase destination airport code
    pub destination: String,

    /// Departure timestamp as written in the input (`YYYY-MM-DD HH:MM`)
    pub departure_datetime: String,

    /// Arrival timestamp as written in the input, strictly after departure
    pub arrival_datetime: String,

    /// Ticket price, finite and strictly positive
    pub price: f64,
}

// =============================================================================
// Rejections
// =============================================================================

/// Why a row was rejected
///
/// Variants are declared in pipeline order, so the derived `Ord` sorts
/// reasons the way the validator checks them.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RejectionReason {
    #[error("incorrect number of fields")]
    FieldCount,

    #[error("invalid flight_id")]
    FlightId,

    #[error("invalid origin code")]
    OriginCode,

    #[error("invalid destination code")]
    DestinationCode,

    #[error("invalid departure datetime")]
    DepartureDatetime,

    #[error("invalid arrival datetime")]
    ArrivalDatetime,

    #[error("arrival must be after departure")]
    Chronology,

    #[error("invalid price value")]
    Price,
}

impl RejectionReason {
    /// Every reason, in pipeline order
    pub const ALL: [RejectionReason; 8] = [
        RejectionReason::FieldCount,
        RejectionReason::FlightId,
        RejectionReason::OriginCode,
        RejectionReason::DestinationCode,
        RejectionReason::DepartureDatetime,
        RejectionReason::ArrivalDatetime,
        RejectionReason::Chronology,
        RejectionReason::Price,
    ];

    /// The fixed message written to the error log
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::FieldCount => reasons::FIELD_COUNT,
            RejectionReason::FlightId => reasons::FLIGHT_ID,
            RejectionReason::OriginCode => reasons::ORIGIN,
            RejectionReason::DestinationCode => reasons::DESTINATION,
            RejectionReason::DepartureDatetime => reasons::DEPARTURE,
            RejectionReason::ArrivalDatetime => reasons::ARRIVAL,
            RejectionReason::Chronology => reasons::CHRONOLOGY,
            RejectionReason::Price => reasons::PRICE,
        }
    }
}

/// A rejected row, tagged with the file it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// File name (last path component) of the source file
    pub source_file: String,

    /// Trimmed original text of the rejected line
    pub raw: String,

    /// First validation rule the row violated
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn new(
        source_file: impl Into<String>,
        raw: impl Into<String>,
        reason: RejectionReason,
    ) -> Self {
        Self {
            source_file: source_file.into(),
            raw: raw.into(),
            reason,
        }
    }
}

/// Error log line: `<source_file>: <raw> => <reason>`
impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} => {}", self.source_file, self.raw, self.reason)
    }
}
