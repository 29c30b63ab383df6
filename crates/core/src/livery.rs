use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN;

/// A stored livery photograph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveryRecord {
    pub id: i64,
    pub airline: String,
    pub registration: String,
    pub aircraft_model: String,
    pub location: String,
    pub image_url: String,
}

/// The four fields recovered from a card description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveryFields {
    pub airline: String,
    pub registration: String,
    pub aircraft_model: String,
    pub location: String,
}

impl LiveryFields {
    /// Fields for a card without a description block: every value is `"Unknown"`.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            airline: UNKNOWN.to_owned(),
            registration: UNKNOWN.to_owned(),
            aircraft_model: UNKNOWN.to_owned(),
            location: UNKNOWN.to_owned(),
        }
    }
}

/// Candidate record extracted from a listing page, not yet checked against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLivery {
    pub fields: LiveryFields,
    pub image_url: String,
    /// Text the fields were parsed from. Not persisted.
    pub description: String,
}

impl NewLivery {
    #[must_use]
    pub fn new(fields: LiveryFields, image_url: impl Into<String>, description: impl Into<String>) -> Self {
        Self { fields, image_url: image_url.into(), description: description.into() }
    }

    pub fn airline(&self) -> &str {
        &self.fields.airline
    }

    pub fn registration(&self) -> &str {
        &self.fields.registration
    }

    pub fn aircraft_model(&self) -> &str {
        &self.fields.aircraft_model
    }

    pub fn location(&self) -> &str {
        &self.fields.location
    }

    /// Attach the id assigned by the store.
    #[must_use]
    pub fn into_record(self, id: i64) -> LiveryRecord {
        LiveryRecord {
            id,
            airline: self.fields.airline,
            registration: self.fields.registration,
            aircraft_model: self.fields.aircraft_model,
            location: self.fields.location,
            image_url: self.image_url,
        }
    }
}

/// Aggregate counts over the stored catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveryStats {
    pub total: u64,
    /// Distinct airline values, sentinels included.
    pub airlines: u64,
    /// Rows whose registration could not be parsed.
    pub unknown_registrations: u64,
}
