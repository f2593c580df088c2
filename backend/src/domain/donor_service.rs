//! Donor domain service.
//!
//! Implements the registration, login, and listing driving ports on top of
//! the donor repository, the password hasher, and the token issuer.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    DonorRegistrationCommand, DonorRepository, DonorRepositoryError, DonorsQuery, LoginService,
    PasswordHashError, PasswordHasher, TokenIssuer,
};
use crate::domain::{
    Donor, DonorProfile, DonorRegistrationDraft, DraftValidationError, Error, IssuedToken,
    LoginCredentials,
};

/// Message returned when an email is already taken.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email already registered";
/// Message returned for every login failure.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password";

pub(crate) fn map_draft_error(error: DraftValidationError) -> Error {
    let message = error.to_string();
    match error {
        DraftValidationError::MissingFields(fields) => {
            Error::invalid_request("Missing required fields")
                .with_details(json!({ "missing_fields": fields }))
        }
        DraftValidationError::InvalidInteger { field } | DraftValidationError::Blank { field } => {
            Error::invalid_request(message).with_details(json!({ "field": field }))
        }
    }
}

fn map_repository_error(error: DonorRepositoryError) -> Error {
    match error {
        DonorRepositoryError::DuplicateEmail { .. } => Error::conflict(DUPLICATE_EMAIL_MESSAGE),
        DonorRepositoryError::Connection { .. } | DonorRepositoryError::Query { .. } => {
            Error::upstream(error.to_string())
        }
    }
}

/// Donor service implementing the donor driving ports.
#[derive(Clone)]
pub struct DonorService<R> {
    donor_repo: Arc<R>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
    clock: Arc<dyn Clock>,
}

impl<R> DonorService<R> {
    /// Create a new donor service.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// use donor_registry::domain::DonorService;
    /// use donor_registry::outbound::persistence::InMemoryDonorRepository;
    /// use donor_registry::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};
    ///
    /// let service = DonorService::new(
    ///     Arc::new(InMemoryDonorRepository::default()),
    ///     Arc::new(Argon2PasswordHasher::default()),
    ///     Arc::new(JwtTokenIssuer::new(b"0123456789abcdef0123456789abcdef")),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(
        donor_repo: Arc<R>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            donor_repo,
            hasher,
            tokens,
            clock,
        }
    }
}

#[async_trait]
impl<R> DonorRegistrationCommand for DonorService<R>
where
    R: DonorRepository,
{
    async fn register(&self, draft: DonorRegistrationDraft) -> Result<(), Error> {
        let registration = draft.validate().map_err(map_draft_error)?;

        if self
            .donor_repo
            .find_by_email(&registration.email)
            .await
            .map_err(map_repository_error)?
            .is_some()
        {
            debug!(email = %registration.email, "registration rejected: email taken");
            return Err(Error::conflict(DUPLICATE_EMAIL_MESSAGE));
        }

        let password = self
            .hasher
            .hash(registration.password.as_str())
            .await
            .map_err(|err| Error::internal(err.to_string()))?;
        let donor = Donor::new(
            registration.email,
            password,
            registration.details,
            self.clock.utc(),
        );

        self.donor_repo
            .insert(&donor)
            .await
            .map_err(map_repository_error)?;
        info!(email = %donor.email(), "donor registered");
        Ok(())
    }
}

#[async_trait]
impl<R> LoginService for DonorService<R>
where
    R: DonorRepository,
{
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error> {
        let Some(donor) = self
            .donor_repo
            .find_by_email(credentials.email())
            .await
            .map_err(map_repository_error)?
        else {
            debug!(email = %credentials.email(), "login failed: unknown email");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        };

        let verified = match self
            .hasher
            .verify(credentials.password(), donor.password_hash())
            .await
        {
            Ok(verified) => verified,
            Err(PasswordHashError::MalformedHash { message }) => {
                warn!(email = %donor.email(), %message, "stored password hash unreadable");
                false
            }
            Err(err) => return Err(Error::internal(err.to_string())),
        };
        if !verified {
            debug!(email = %credentials.email(), "login failed: password mismatch");
            return Err(Error::unauthorized(INVALID_CREDENTIALS_MESSAGE));
        }

        let token = self
            .tokens
            .issue(donor.email(), self.clock.utc())
            .map_err(|err| Error::internal(err.to_string()))?;
        info!(email = %donor.email(), expires_at = %token.expires_at, "login succeeded");
        Ok(token)
    }
}

#[async_trait]
impl<R> DonorsQuery for DonorService<R>
where
    R: DonorRepository,
{
    async fn list_donors(&self) -> Result<Vec<DonorProfile>, Error> {
        self.donor_repo
            .list_profiles()
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "donor_service_tests.rs"]
mod tests;
