//! Driving port for donor login.
//!
//! Inbound adapters call this port to exchange credentials for a signed token
//! without importing the hashing or signing infrastructure.

use async_trait::async_trait;

use crate::domain::{Error, IssuedToken, LoginCredentials};

/// Domain use-case port for authentication.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LoginService: Send + Sync {
    /// Check credentials and issue a token.
    ///
    /// Unknown emails and wrong passwords fail identically.
    async fn login(&self, credentials: &LoginCredentials) -> Result<IssuedToken, Error>;
}
