//! Port abstraction for donor persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Donor, DonorProfile, Email};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by donor repository adapters.
    pub enum DonorRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "donor repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } => "donor repository query failed: {message}",
        /// The store rejected an insert because the email is already taken.
        DuplicateEmail { email: String } => "donor email already registered: {email}",
    }
}

/// Port for reading and writing donor records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorRepository: Send + Sync {
    /// Fetch the donor registered under `email`, if any.
    async fn find_by_email(&self, email: &Email) -> Result<Option<Donor>, DonorRepositoryError>;

    /// Insert a new donor.
    ///
    /// Adapters must report an email collision as
    /// [`DonorRepositoryError::DuplicateEmail`], including one that slips
    /// past a prior [`DonorRepository::find_by_email`] check.
    async fn insert(&self, donor: &Donor) -> Result<(), DonorRepositoryError>;

    /// List every donor without credential material.
    async fn list_profiles(&self) -> Result<Vec<DonorProfile>, DonorRepositoryError>;
}
