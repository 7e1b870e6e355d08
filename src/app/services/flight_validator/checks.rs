//! Field-level checks for flight rows
//!
//! Every function here takes an already-trimmed field value.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    AIRPORT_CODE_LEN, DATETIME_FORMAT, DATETIME_PATTERN, FLIGHT_ID_MAX_LEN, FLIGHT_ID_MIN_LEN,
};

static DATETIME_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATETIME_PATTERN).expect("valid datetime regex"));

/// Letters and digits only, between 2 and 8 characters
pub fn is_valid_flight_id(value: &str) -> bool {
    let length = value.chars().count();
    (FLIGHT_ID_MIN_LEN..=FLIGHT_ID_MAX_LEN).contains(&length)
        && value.chars().all(char::is_alphanumeric)
}

/// Exactly three uppercase letters
pub fn is_valid_airport_code(value: &str) -> bool {
    value.chars().count() == AIRPORT_CODE_LEN
        && value
            .chars()
            .all(|c| c.is_alphabetic() && c.is_uppercase())
}

/// Parse a zero-padded `YYYY-MM-DD HH:MM` timestamp
///
/// Returns `None` for any other shape and for impossible calendar values
/// such as `2024-02-30` or `24:00`.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    if !DATETIME_SHAPE.is_match(value) {
        return None;
    }
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).ok()
}

/// Parse a strictly positive, finite price
pub fn parse_price(value: &str) -> Option<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}
