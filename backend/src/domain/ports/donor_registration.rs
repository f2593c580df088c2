//! Driving port for donor self-registration.

use async_trait::async_trait;

use crate::domain::{DonorRegistrationDraft, Error};

/// Domain use-case port for registering a donor.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRegistrationCommand: Send + Sync {
    /// Validate, hash, and store a new donor.
    ///
    /// Missing fields surface as [`crate::domain::ErrorCode::InvalidRequest`]
    /// with `details.missing_fields`; a taken email surfaces as
    /// [`crate::domain::ErrorCode::Conflict`].
    async fn register(&self, draft: DonorRegistrationDraft) -> Result<(), Error>;
}
