//! HS256 JSON Web Token implementation of the `TokenIssuer` port.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenIssueError, TokenIssuer};
use crate::domain::{Email, IssuedToken};

/// Lifetime of an issued token, in hours.
pub const TOKEN_TTL_HOURS: i64 = 3;

/// Claims carried by a login token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub email: String,
    /// Expiry as Unix seconds.
    pub exp: i64,
}

/// Signs login tokens with a shared HMAC secret.
pub struct JwtTokenIssuer {
    secret: Zeroizing<Vec<u8>>,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            secret: Zeroizing::new(secret.to_vec()),
            ttl: Duration::hours(TOKEN_TTL_HOURS),
        }
    }

    /// Decode and validate a token signed by this issuer.
    ///
    /// Expiry is checked against the system clock.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.secret),
            &Validation::new(Algorithm::HS256),
        )
        .map(|data| data.claims)
    }
}

impl std::fmt::Debug for JwtTokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenIssuer")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(
        &self,
        email: &Email,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, TokenIssueError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            email: email.to_string(),
            exp: expires_at.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.secret),
        )
        .map_err(|err| TokenIssueError::signing(err.to_string()))?;
        Ok(IssuedToken { token, expires_at })
    }
}
