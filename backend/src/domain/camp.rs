//! Donation camp records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::registration::{DraftValidationError, IntegerInput, missing_fields};

/// Unvalidated camp input decoded from a request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampDraft {
    pub name: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub available_spots: Option<IntegerInput>,
}

/// Camp input that passed validation and awaits a creation timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCamp {
    pub name: String,
    pub location: String,
    pub date: String,
    pub available_spots: u32,
}

impl CampDraft {
    /// Required keys in the order they are reported.
    pub const REQUIRED_FIELDS: [&'static str; 4] = ["name", "location", "date", "available_spots"];

    pub fn validate(self) -> Result<NewCamp, DraftValidationError> {
        let missing = missing_fields(&[
            ("name", self.name.is_some()),
            ("location", self.location.is_some()),
            ("date", self.date.is_some()),
            ("available_spots", self.available_spots.is_some()),
        ]);
        let (Some(name), Some(location), Some(date), Some(spots)) =
            (self.name, self.location, self.date, self.available_spots)
        else {
            return Err(DraftValidationError::MissingFields(missing));
        };

        let available_spots = spots
            .to_non_negative()
            .ok_or(DraftValidationError::InvalidInteger {
                field: "available_spots",
            })?;

        Ok(NewCamp {
            name,
            location,
            date,
            available_spots,
        })
    }
}

impl NewCamp {
    /// Stamp the creation time, producing the stored record.
    pub fn created_at(self, created_at: DateTime<Utc>) -> Camp {
        Camp {
            name: self.name,
            location: self.location,
            date: self.date,
            available_spots: self.available_spots,
            created_at,
        }
    }
}

/// Stored camp record, serialised with snake_case keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camp {
    pub name: String,
    pub location: String,
    pub date: String,
    pub available_spots: u32,
    pub created_at: DateTime<Utc>,
}
