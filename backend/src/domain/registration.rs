//! Donor registration drafts and their validation.
//!
//! Inbound adapters decode request bodies into a [`DonorRegistrationDraft`]
//! with every field optional. [`DonorRegistrationDraft::validate`] then
//! reports all absent required fields at once before checking values.

use std::fmt;

use serde::Deserialize;
use zeroize::Zeroizing;

use super::donor::{DonorDetails, Email};

/// Value used for `health_conditions` when the donor omits it.
pub const DEFAULT_HEALTH_CONDITIONS: &str = "None";

/// Integer field that tolerates a numeric string.
///
/// # Examples
/// ```
/// use donor_registry::domain::IntegerInput;
///
/// assert_eq!(IntegerInput::Number(42).to_non_negative(), Some(42));
/// assert_eq!(IntegerInput::Text(" 7 ".into()).to_non_negative(), Some(7));
/// assert_eq!(IntegerInput::Number(-1).to_non_negative(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntegerInput {
    Number(i64),
    Text(String),
}

impl IntegerInput {
    /// Interpret the value as a non-negative `u32`.
    pub fn to_non_negative(&self) -> Option<u32> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(text) => text.trim().parse::<i64>().ok()?,
        };
        u32::try_from(value).ok()
    }
}

/// Errors raised while turning a draft into a validated record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DraftValidationError {
    /// One or more required keys were absent or `null`.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    /// A field that must hold a non-negative integer did not.
    #[error("{field} must be a non-negative integer")]
    InvalidInteger { field: &'static str },
    /// A field that must not be blank was blank.
    #[error("{field} must not be empty")]
    Blank { field: &'static str },
}

/// Unvalidated registration input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonorRegistrationDraft {
    pub name: Option<String>,
    pub age: Option<IntegerInput>,
    pub gender: Option<String>,
    pub blood_group: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub last_donation_date: Option<String>,
    pub eligible_next_donation: Option<String>,
    pub health_conditions: Option<String>,
    pub preferred_location: Option<String>,
    pub donor_status: Option<String>,
}

/// Registration that passed validation. The password is still plaintext and
/// must be hashed before anything is stored.
#[derive(Clone, PartialEq, Eq)]
pub struct DonorRegistration {
    pub email: Email,
    pub password: Zeroizing<String>,
    pub details: DonorDetails,
}

impl fmt::Debug for DonorRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DonorRegistration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("details", &self.details)
            .finish()
    }
}

/// Collect the names of absent fields in declaration order.
pub(crate) fn missing_fields(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter_map(|(name, present)| (!present).then_some(*name))
        .collect()
}

impl DonorRegistrationDraft {
    /// Required keys in the order they are reported.
    pub const REQUIRED_FIELDS: [&'static str; 11] = [
        "name",
        "age",
        "gender",
        "blood_group",
        "contact",
        "email",
        "password",
        "address",
        "eligible_next_donation",
        "preferred_location",
        "donor_status",
    ];

    /// Validate presence, then values.
    ///
    /// # Examples
    /// ```
    /// use donor_registry::domain::{DonorRegistrationDraft, DraftValidationError};
    ///
    /// let draft = DonorRegistrationDraft {
    ///     name: Some("Ada".into()),
    ///     ..Default::default()
    /// };
    /// match draft.validate() {
    ///     Err(DraftValidationError::MissingFields(fields)) => {
    ///         assert_eq!(fields.first(), Some(&"age"));
    ///         assert!(!fields.contains(&"name"));
    ///     }
    ///     other => panic!("unexpected: {other:?}"),
    /// }
    /// ```
    pub fn validate(self) -> Result<DonorRegistration, DraftValidationError> {
        let missing = missing_fields(&[
            ("name", self.name.is_some()),
            ("age", self.age.is_some()),
            ("gender", self.gender.is_some()),
            ("blood_group", self.blood_group.is_some()),
            ("contact", self.contact.is_some()),
            ("email", self.email.is_some()),
            ("password", self.password.is_some()),
            ("address", self.address.is_some()),
            ("eligible_next_donation", self.eligible_next_donation.is_some()),
            ("preferred_location", self.preferred_location.is_some()),
            ("donor_status", self.donor_status.is_some()),
        ]);
        if !missing.is_empty() {
            return Err(DraftValidationError::MissingFields(missing));
        }

        let (
            Some(name),
            Some(age),
            Some(gender),
            Some(blood_group),
            Some(contact),
            Some(email),
            Some(password),
            Some(address),
            Some(eligible_next_donation),
            Some(preferred_location),
            Some(donor_status),
        ) = (
            self.name,
            self.age,
            self.gender,
            self.blood_group,
            self.contact,
            self.email,
            self.password,
            self.address,
            self.eligible_next_donation,
            self.preferred_location,
            self.donor_status,
        )
        else {
            return Err(DraftValidationError::MissingFields(
                Self::REQUIRED_FIELDS.to_vec(),
            ));
        };

        let age = age
            .to_non_negative()
            .ok_or(DraftValidationError::InvalidInteger { field: "age" })?;
        let email =
            Email::new(&email).map_err(|_| DraftValidationError::Blank { field: "email" })?;
        if password.trim().is_empty() {
            return Err(DraftValidationError::Blank { field: "password" });
        }

        Ok(DonorRegistration {
            email,
            password: Zeroizing::new(password),
            details: DonorDetails {
                name,
                age,
                gender,
                blood_group,
                contact,
                address,
                last_donation_date: self.last_donation_date,
                eligible_next_donation,
                health_conditions: self
                    .health_conditions
                    .unwrap_or_else(|| DEFAULT_HEALTH_CONDITIONS.to_owned()),
                preferred_location,
                donor_status,
            },
        })
    }
}
