//! Flight row validation
//!
//! This module classifies each candidate row as either a [`FlightRecord`]
//! or a [`RejectionReason`]. Rows are checked against a fixed, ordered table
//! of steps and the first failing step decides the reason; later steps are
//! never evaluated for that row.
//!
//! ## Architecture
//!
//! - [`checks`] - Field-level predicates and parsers (codes, identifiers, timestamps, prices)
//! - [`validator`] - The ordered step table and the functions that walk it
//!
//! ## Pipeline
//!
//! | # | Step               | Reason                              |
//! |---|--------------------|-------------------------------------|
//! | 1 | field count        | `incorrect number of fields`        |
//! | 2 | flight_id          | `invalid flight_id`                 |
//! | 3 | origin code        | `invalid origin code`               |
//! | 4 | destination code   | `invalid destination code`          |
//! | 5 | departure datetime | `invalid departure datetime`        |
//! | 6 | arrival datetime   | `invalid arrival datetime`          |
//! | 7 | chronology         | `arrival must be after departure`   |
//! | 8 | price              | `invalid price value`               |
//!
//! [`FlightRecord`]: crate::app::models::FlightRecord
//! [`RejectionReason`]: crate::app::models::RejectionReason

pub mod checks;
pub mod validator;

#[cfg(test)]
pub mod tests;

pub use validator::{PIPELINE, ValidationStep, validate_entry, validate_fields};
