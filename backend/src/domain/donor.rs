//! Donor records and the value types they are built from.
//!
//! A [`Donor`] is what the repository stores; a [`DonorProfile`] is the
//! read model returned by listings and never carries the password hash.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validation errors for [`Email`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    #[error("email must not be empty")]
    Empty,
}

/// Donor email address used as the login identifier.
///
/// ## Invariants
/// - Stored trimmed and non-empty.
///
/// Emails are compared exactly as supplied once trimmed; the registry does
/// not case-fold.
///
/// # Examples
/// ```
/// use donor_registry::domain::Email;
///
/// let email = Email::new("  ada@example.org ").expect("valid email");
/// assert_eq!(email.as_ref(), "ada@example.org");
/// assert!(Email::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn new(value: impl AsRef<str>) -> Result<Self, EmailValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(EmailValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

/// Encoded salted password hash (a PHC string such as `$argon2id$...`).
///
/// The raw plaintext never reaches this type.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn from_encoded(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Donor-supplied attributes shared by stored records and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorDetails {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub blood_group: String,
    pub contact: String,
    pub address: String,
    pub last_donation_date: Option<String>,
    pub eligible_next_donation: String,
    pub health_conditions: String,
    pub preferred_location: String,
    pub donor_status: String,
}

/// Stored donor record including the credential hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    email: Email,
    password: PasswordHash,
    details: DonorDetails,
    registered_at: DateTime<Utc>,
}

impl Donor {
    pub fn new(
        email: Email,
        password: PasswordHash,
        details: DonorDetails,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            password,
            details,
            registered_at,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }

    pub fn details(&self) -> &DonorDetails {
        &self.details
    }

    pub fn registered_at(&self) -> DateTime<Utc> {
        self.registered_at
    }

    /// Project the record into its public form, dropping the hash.
    pub fn to_profile(&self) -> DonorProfile {
        DonorProfile {
            details: self.details.clone(),
            email: self.email.clone(),
            registered_at: self.registered_at,
        }
    }
}

/// Public donor projection returned by `GET /donors`.
///
/// Serialises with the snake_case keys clients already rely on. There is no
/// password field to leak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorProfile {
    #[serde(flatten)]
    pub details: DonorDetails,
    pub email: Email,
    pub registered_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn details() -> DonorDetails {
        DonorDetails {
            name: "Ada".into(),
            age: 30,
            gender: "F".into(),
            blood_group: "O+".into(),
            contact: "0123".into(),
            address: "1 Analytical Way".into(),
            last_donation_date: None,
            eligible_next_donation: "2026-01-01".into(),
            health_conditions: "None".into(),
            preferred_location: "Leeds".into(),
            donor_status: "active".into(),
        }
    }

    #[rstest]
    #[case("")]
    #[case("  \t ")]
    fn email_rejects_blank(#[case] raw: &str) {
        assert_eq!(Email::new(raw), Err(EmailValidationError::Empty));
    }

    #[rstest]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::from_encoded("$argon2id$v=19$secret");
        assert_eq!(format!("{hash:?}"), "PasswordHash(<redacted>)");
    }

    #[rstest]
    fn profile_serialises_without_password() {
        let registered_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 9, 30, 0)
            .single()
            .expect("valid timestamp");
        let donor = Donor::new(
            Email::new("ada@example.org").expect("email"),
            PasswordHash::from_encoded("$argon2id$hash"),
            details(),
            registered_at,
        );

        let value = serde_json::to_value(donor.to_profile()).expect("serialise profile");
        let object = value.as_object().expect("profile object");
        assert!(!object.contains_key("password"));
        assert_eq!(object["email"], "ada@example.org");
        assert_eq!(object["blood_group"], "O+");
        assert_eq!(object["last_donation_date"], serde_json::Value::Null);
        assert_eq!(object["registered_at"], "2026-03-01T09:30:00Z");
    }
}
