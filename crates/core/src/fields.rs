//! Field extraction from a card description.
//!
//! Each field is matched independently against the same string; a field
//! that does not match gets its own `Unknown ...` sentinel.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{
    REGISTRATION_MARKER, UNKNOWN_AIRLINE, UNKNOWN_LOCATION, UNKNOWN_MODEL, UNKNOWN_REGISTRATION,
};
use crate::livery::LiveryFields;

#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static REGISTRATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"REG:(\S+)").unwrap());

/// Only the Boeing branch takes a trailing token; an Airbus match is the bare
/// manufacturer name.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static MODEL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Airbus|Boeing\s\S+").unwrap());

/// `City-Country(` with the open parenthesis included in the match.
#[expect(clippy::unwrap_used, reason = "static regex pattern is compile-time validated")]
static LOCATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z\s]+)-\s?([A-Za-z\s]+)\(").unwrap());

/// Text before the first `REG:` marker, trimmed.
#[must_use]
pub fn parse_airline(description: &str) -> Option<String> {
    description
        .split_once(REGISTRATION_MARKER)
        .map(|(airline, _)| airline.trim().to_owned())
}

/// Non-whitespace run immediately after `REG:`.
#[must_use]
pub fn parse_registration(description: &str) -> Option<String> {
    REGISTRATION_REGEX
        .captures(description)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

#[must_use]
pub fn parse_aircraft_model(description: &str) -> Option<String> {
    MODEL_REGEX.find(description).map(|m| m.as_str().to_owned())
}

/// The letter runs may start with the whitespace that preceded them in the
/// description; it is trimmed off the match.
#[must_use]
pub fn parse_location(description: &str) -> Option<String> {
    LOCATION_REGEX.find(description).map(|m| m.as_str().trim().to_owned())
}

/// Maps a description string to the four livery fields, substituting the
/// per-field sentinel for anything that does not match.
#[must_use]
pub fn parse_description(description: &str) -> LiveryFields {
    LiveryFields {
        airline: parse_airline(description).unwrap_or_else(|| UNKNOWN_AIRLINE.to_owned()),
        registration: parse_registration(description)
            .unwrap_or_else(|| UNKNOWN_REGISTRATION.to_owned()),
        aircraft_model: parse_aircraft_model(description)
            .unwrap_or_else(|| UNKNOWN_MODEL.to_owned()),
        location: parse_location(description).unwrap_or_else(|| UNKNOWN_LOCATION.to_owned()),
    }
}
