//! Ordered validation pipeline for flight rows
//!
//! The pipeline is a table of [`ValidationStep`]s. Each step owns exactly one
//! [`RejectionReason`] and a check over a working draft of the row; steps
//! that parse a value (timestamps, price) store it on the draft for the
//! steps after them.

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use super::checks::{is_valid_airport_code, is_valid_flight_id, parse_datetime, parse_price};
use crate::app::models::{FlightRecord, RawEntry, RejectionReason};
use crate::constants::EXPECTED_FIELD_COUNT;
use crate::constants::field_index::{ARRIVAL, DEPARTURE, DESTINATION, FLIGHT_ID, ORIGIN, PRICE};

/// Row under validation: trimmed fields plus values parsed so far
#[derive(Debug)]
pub struct Draft<'a> {
    fields: Vec<&'a str>,
    departure: Option<NaiveDateTime>,
    arrival: Option<NaiveDateTime>,
    price: Option<f64>,
}

impl<'a> Draft<'a> {
    fn new(fields: &'a [String]) -> Self {
        Self {
            fields: fields.iter().map(|field| field.trim()).collect(),
            departure: None,
            arrival: None,
            price: None,
        }
    }

    /// Trimmed field at `index`, empty if the row is too short
    fn field(&self, index: usize) -> &'a str {
        self.fields.get(index).copied().unwrap_or_default()
    }

    fn into_record(self) -> Result<FlightRecord, RejectionReason> {
        let price = self.price.ok_or(RejectionReason::Price)?;

        Ok(FlightRecord {
            flight_id: self.field(FLIGHT_ID).to_string(),
            origin: self.field(ORIGIN).to_string(),
            destination: self.field(DESTINATION).to_string(),
            departure_datetime: self.field(DEPARTURE).to_string(),
            arrival_datetime: self.field(ARRIVAL).to_string(),
            price,
        })
    }
}

/// One entry of the validation pipeline
pub struct ValidationStep {
    /// Short step name used in logs
    pub name: &'static str,

    /// Reason reported when this step fails
    pub reason: RejectionReason,

    check: fn(&mut Draft<'_>) -> bool,
}

impl ValidationStep {
    fn passes(&self, draft: &mut Draft<'_>) -> bool {
        (self.check)(draft)
    }
}

impl std::fmt::Debug for ValidationStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationStep")
            .field("name", &self.name)
            .field("reason", &self.reason)
            .finish()
    }
}

/// Validation steps in evaluation order
pub static PIPELINE: [ValidationStep; 8] = [
    ValidationStep {
        name: "field_count",
        reason: RejectionReason::FieldCount,
        check: check_field_count,
    },
    ValidationStep {
        name: "flight_id",
        reason: RejectionReason::FlightId,
        check: check_flight_id,
    },
    ValidationStep {
        name: "origin",
        reason: RejectionReason::OriginCode,
        check: check_origin,
    },
    ValidationStep {
        name: "destination",
        reason: RejectionReason::DestinationCode,
        check: check_destination,
    },
    ValidationStep {
        name: "departure",
        reason: RejectionReason::DepartureDatetime,
        check: check_departure,
    },
    ValidationStep {
        name: "arrival",
        reason: RejectionReason::ArrivalDatetime,
        check: check_arrival,
    },
    ValidationStep {
        name: "chronology",
        reason: RejectionReason::Chronology,
        check: check_chronology,
    },
    ValidationStep {
        name: "price",
        reason: RejectionReason::Price,
        check: check_price,
    },
];

fn check_field_count(draft: &mut Draft<'_>) -> bool {
    draft.fields.len() == EXPECTED_FIELD_COUNT
}

fn check_flight_id(draft: &mut Draft<'_>) -> bool {
    is_valid_flight_id(draft.field(FLIGHT_ID))
}

fn check_origin(draft: &mut Draft<'_>) -> bool {
    is_valid_airport_code(draft.field(ORIGIN))
}

fn check_destination(draft: &mut Draft<'_>) -> bool {
    is_valid_airport_code(draft.field(DESTINATION))
}

fn check_departure(draft: &mut Draft<'_>) -> bool {
    draft.departure = parse_datetime(draft.field(DEPARTURE));
    draft.departure.is_some()
}

fn check_arrival(draft: &mut Draft<'_>) -> bool {
    draft.arrival = parse_datetime(draft.field(ARRIVAL));
    draft.arrival.is_some()
}

fn check_chronology(draft: &mut Draft<'_>) -> bool {
    matches!(
        (draft.departure, draft.arrival),
        (Some(departure), Some(arrival)) if arrival > departure
    )
}

fn check_price(draft: &mut Draft<'_>) -> bool {
    draft.price = parse_price(draft.field(PRICE));
    draft.price.is_some()
}

/// Validate raw row fields, stopping at the first failing step
pub fn validate_fields(fields: &[String]) -> Result<FlightRecord, RejectionReason> {
    let mut draft = Draft::new(fields);

    if let Some(step) = PIPELINE.iter().find(|step| !step.passes(&mut draft)) {
        trace!("Validation step '{}' failed", step.name);
        return Err(step.reason);
    }

    draft.into_record()
}

/// Validate a candidate row produced by the row reader
pub fn validate_entry(entry: &RawEntry) -> Result<FlightRecord, RejectionReason> {
    let result = validate_fields(&entry.fields);

    if let Err(reason) = &result {
        debug!("Rejected line {}: {} ({})", entry.line_number, entry.raw, reason);
    }

    result
}
