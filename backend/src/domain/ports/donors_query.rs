//! Driving port for donor listings.

use async_trait::async_trait;

use crate::domain::{DonorProfile, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonorsQuery: Send + Sync {
    /// Return every registered donor, without passwords.
    async fn list_donors(&self) -> Result<Vec<DonorProfile>, Error>;
}
