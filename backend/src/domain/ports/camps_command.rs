//! Driving port for creating donation camps.

use async_trait::async_trait;

use crate::domain::{Camp, CampDraft, Error};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampsCommand: Send + Sync {
    /// Validate and store a camp, returning the stored record.
    async fn add_camp(&self, draft: CampDraft) -> Result<Camp, Error>;
}
