//! Driving port for camp listings.

use async_trait::async_trait;

use crate::domain::{Camp, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampsQuery: Send + Sync {
    async fn list_camps(&self) -> Result<Vec<Camp>, Error>;
}
