//! Driven port for signing bearer tokens.

use chrono::{DateTime, Utc};

use crate::domain::{Email, IssuedToken};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token issuing adapters.
    pub enum TokenIssueError {
        /// The claims could not be encoded or signed.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// Port for issuing a signed token for an authenticated donor.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Issue a token for `email`, with expiry measured from `issued_at`.
    fn issue(&self, email: &Email, issued_at: DateTime<Utc>)
    -> Result<IssuedToken, TokenIssueError>;
}
