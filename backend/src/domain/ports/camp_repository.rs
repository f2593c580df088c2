//! Port abstraction for camp persistence adapters.

use async_trait::async_trait;

use crate::domain::Camp;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by camp repository adapters.
    pub enum CampRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "camp repository connection failed: {message}",
        /// Query or insert failed during execution.
        Query { message: String } => "camp repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CampRepository: Send + Sync {
    /// Insert a camp record.
    async fn insert(&self, camp: &Camp) -> Result<(), CampRepositoryError>;

    /// List all camps in insertion order.
    async fn list(&self) -> Result<Vec<Camp>, CampRepositoryError>;
}
