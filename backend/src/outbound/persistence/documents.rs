//! BSON document shapes for the `donors` and `camps` collections.
//!
//! These are internal to the persistence adapter. Field names match the keys
//! existing records already use. Records written by earlier deployments may
//! lack the server-assigned timestamp or carry `available_spots` as the string
//! the client sent; both are accepted on read.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Camp, Donor, DonorDetails, DonorProfile, Email, PasswordHash};

fn default_health_conditions() -> String {
    crate::domain::DEFAULT_HEALTH_CONDITIONS.to_owned()
}

/// Integer stored natively or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum StoredInteger {
    Int(i64),
    Text(String),
}

impl StoredInteger {
    fn to_u32(&self, field: &'static str) -> Result<u32, DocumentError> {
        let value = match self {
            Self::Int(value) => *value,
            Self::Text(text) => {
                text.trim()
                    .parse::<i64>()
                    .map_err(|_| DocumentError::NotAnInteger {
                        field,
                        value: text.clone(),
                    })?
            }
        };
        u32::try_from(value).map_err(|_| DocumentError::OutOfRange { field, value })
    }
}

/// Full donor document including the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DonorDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub blood_group: String,
    pub contact: String,
    pub email: String,
    pub password: String,
    pub address: String,
    #[serde(default)]
    pub last_donation_date: Option<String>,
    pub eligible_next_donation: String,
    #[serde(default = "default_health_conditions")]
    pub health_conditions: String,
    pub preferred_location: String,
    pub donor_status: String,
    #[serde(default)]
    pub registered_at: Option<bson::DateTime>,
}

/// Donor document as read back through the listing projection.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct DonorProfileDocument {
    #[serde(rename = "_id", default)]
    pub id: Option<ObjectId>,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub blood_group: String,
    pub contact: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub last_donation_date: Option<String>,
    pub eligible_next_donation: String,
    #[serde(default = "default_health_conditions")]
    pub health_conditions: String,
    pub preferred_location: String,
    pub donor_status: String,
    #[serde(default)]
    pub registered_at: Option<bson::DateTime>,
}

/// Document conversion failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum DocumentError {
    #[error("stored {field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("stored {field} is not an integer: {value:?}")]
    NotAnInteger { field: &'static str, value: String },
    #[error("stored email is blank")]
    BlankEmail,
    #[error("stored {field} is absent and the record has no object id")]
    MissingTimestamp { field: &'static str },
}

fn to_u32(field: &'static str, value: i64) -> Result<u32, DocumentError> {
    u32::try_from(value).map_err(|_| DocumentError::OutOfRange { field, value })
}

/// Use the stored timestamp, or the creation time embedded in the object id.
fn stamped_at(
    field: &'static str,
    stored: Option<bson::DateTime>,
    id: Option<ObjectId>,
) -> Result<DateTime<Utc>, DocumentError> {
    stored
        .or_else(|| id.map(|oid| oid.timestamp()))
        .map(bson::DateTime::to_chrono)
        .ok_or(DocumentError::MissingTimestamp { field })
}

impl From<&Donor> for DonorDocument {
    fn from(donor: &Donor) -> Self {
        let details = donor.details();
        Self {
            id: None,
            name: details.name.clone(),
            age: i64::from(details.age),
            gender: details.gender.clone(),
            blood_group: details.blood_group.clone(),
            contact: details.contact.clone(),
            email: donor.email().to_string(),
            password: donor.password_hash().as_str().to_owned(),
            address: details.address.clone(),
            last_donation_date: details.last_donation_date.clone(),
            eligible_next_donation: details.eligible_next_donation.clone(),
            health_conditions: details.health_conditions.clone(),
            preferred_location: details.preferred_location.clone(),
            donor_status: details.donor_status.clone(),
            registered_at: Some(bson::DateTime::from_chrono(donor.registered_at())),
        }
    }
}

impl TryFrom<DonorDocument> for Donor {
    type Error = DocumentError;

    fn try_from(doc: DonorDocument) -> Result<Self, Self::Error> {
        let email = Email::new(&doc.email).map_err(|_| DocumentError::BlankEmail)?;
        let registered_at = stamped_at("registered_at", doc.registered_at, doc.id)?;
        let details = DonorDetails {
            name: doc.name,
            age: to_u32("age", doc.age)?,
            gender: doc.gender,
            blood_group: doc.blood_group,
            contact: doc.contact,
            address: doc.address,
            last_donation_date: doc.last_donation_date,
            eligible_next_donation: doc.eligible_next_donation,
            health_conditions: doc.health_conditions,
            preferred_location: doc.preferred_location,
            donor_status: doc.donor_status,
        };
        Ok(Donor::new(
            email,
            PasswordHash::from_encoded(doc.password),
            details,
            registered_at,
        ))
    }
}

impl TryFrom<DonorProfileDocument> for DonorProfile {
    type Error = DocumentError;

    fn try_from(doc: DonorProfileDocument) -> Result<Self, Self::Error> {
        let email = Email::new(&doc.email).map_err(|_| DocumentError::BlankEmail)?;
        let registered_at = stamped_at("registered_at", doc.registered_at, doc.id)?;
        Ok(DonorProfile {
            details: DonorDetails {
                name: doc.name,
                age: to_u32("age", doc.age)?,
                gender: doc.gender,
                blood_group: doc.blood_group,
                contact: doc.contact,
                address: doc.address,
                last_donation_date: doc.last_donation_date,
                eligible_next_donation: doc.eligible_next_donation,
                health_conditions: doc.health_conditions,
                preferred_location: doc.preferred_location,
                donor_status: doc.donor_status,
            },
            email,
            registered_at,
        })
    }
}

/// Camp document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CampDocument {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub location: String,
    pub date: String,
    pub available_spots: StoredInteger,
    #[serde(default)]
    pub created_at: Option<bson::DateTime>,
}

impl From<&Camp> for CampDocument {
    fn from(camp: &Camp) -> Self {
        Self {
            id: None,
            name: camp.name.clone(),
            location: camp.location.clone(),
            date: camp.date.clone(),
            available_spots: StoredInteger::Int(i64::from(camp.available_spots)),
            created_at: Some(bson::DateTime::from_chrono(camp.created_at)),
        }
    }
}

impl TryFrom<CampDocument> for Camp {
    type Error = DocumentError;

    fn try_from(doc: CampDocument) -> Result<Self, Self::Error> {
        Ok(Camp {
            available_spots: doc.available_spots.to_u32("available_spots")?,
            created_at: stamped_at("created_at", doc.created_at, doc.id)?,
            name: doc.name,
            location: doc.location,
            date: doc.date,
        })
    }
}
