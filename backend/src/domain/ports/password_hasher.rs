//! Driven port for salted one-way password hashing.

use async_trait::async_trait;

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hashing adapters.
    pub enum PasswordHashError {
        /// Hashing itself failed.
        Hash { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed by this adapter.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

/// Port for producing and checking password hashes.
///
/// Implementations are expected to be CPU-heavy; async adapters should move
/// the work off the request worker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a freshly generated salt.
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError>;

    /// Check `password` against `hash`. A mismatch is `Ok(false)`.
    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError>;
}
