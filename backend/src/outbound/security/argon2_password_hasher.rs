//! Argon2id implementation of the `PasswordHasher` port.
//!
//! New hashes are always Argon2id. Verification also accepts the bcrypt
//! hashes (`$2a$`, `$2b$`, `$2y$`) stored by earlier deployments, so those
//! donors can still log in. Hashing and verification run on Tokio's blocking
//! pool.

use argon2::password_hash::{self, SaltString};
use argon2::{Argon2, PasswordHasher as _, PasswordVerifier as _};
use async_trait::async_trait;
use rand_core::OsRng;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHashError, PasswordHasher};

/// Argon2id hasher using the crate's default parameters.
#[derive(Debug, Default, Clone)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

fn hash_blocking(argon2: &Argon2<'_>, password: &[u8]) -> Result<PasswordHash, PasswordHashError> {
    let salt = SaltString::generate(&mut OsRng);
    argon2
        .hash_password(password, &salt)
        .map(|hash| PasswordHash::from_encoded(hash.to_string()))
        .map_err(|err| PasswordHashError::hash(err.to_string()))
}

const BCRYPT_PREFIXES: [&str; 3] = ["$2a$", "$2b$", "$2y$"];

fn is_bcrypt(encoded: &str) -> bool {
    BCRYPT_PREFIXES
        .iter()
        .any(|prefix| encoded.starts_with(prefix))
}

fn verify_blocking(
    argon2: &Argon2<'_>,
    password: &[u8],
    encoded: &str,
) -> Result<bool, PasswordHashError> {
    if is_bcrypt(encoded) {
        return bcrypt::verify(password, encoded)
            .map_err(|err| PasswordHashError::malformed_hash(err.to_string()));
    }
    let parsed = password_hash::PasswordHash::new(encoded)
        .map_err(|err| PasswordHashError::malformed_hash(err.to_string()))?;
    match argon2.verify_password(password, &parsed) {
        Ok(()) => Ok(true),
        Err(password_hash::Error::Password) => Ok(false),
        // Anything else means the stored string is not an Argon2 hash we can use.
        Err(err) => Err(PasswordHashError::malformed_hash(err.to_string())),
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHashError> {
        let argon2 = self.argon2.clone();
        let password = Zeroizing::new(password.as_bytes().to_vec());
        tokio::task::spawn_blocking(move || hash_blocking(&argon2, &password))
            .await
            .map_err(|err| PasswordHashError::hash(err.to_string()))?
    }

    async fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHashError> {
        let argon2 = self.argon2.clone();
        let password = Zeroizing::new(password.as_bytes().to_vec());
        let encoded = hash.as_str().to_owned();
        tokio::task::spawn_blocking(move || verify_blocking(&argon2, &password, &encoded))
            .await
            .map_err(|err| PasswordHashError::hash(err.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn hash_is_salted_and_verifies() {
        let hasher = Argon2PasswordHasher::default();
        let first = hasher.hash("correct horse").await.expect("hash");
        let second = hasher.hash("correct horse").await.expect("hash");

        assert!(first.as_str().starts_with("$argon2id$"));
        assert_ne!(first.as_str(), "correct horse");
        assert_ne!(first, second, "salts must differ per hash");
        assert!(hasher.verify("correct horse", &first).await.expect("verify"));
        assert!(!hasher.verify("battery staple", &first).await.expect("verify"));
    }

    #[rstest]
    #[case("$2b$")]
    #[case("$2a$")]
    #[case("$2y$")]
    #[tokio::test]
    async fn legacy_bcrypt_hashes_verify(#[case] prefix: &str) {
        let generated = bcrypt::hash("crimean-hotel", 4).expect("bcrypt hash");
        let legacy = PasswordHash::from_encoded(generated.replacen("$2b$", prefix, 1));
        let hasher = Argon2PasswordHasher::default();

        assert!(hasher.verify("crimean-hotel", &legacy).await.expect("verify"));
        assert!(!hasher.verify("scutari", &legacy).await.expect("verify"));
    }

    #[rstest]
    #[tokio::test]
    async fn truncated_bcrypt_hash_is_reported_as_malformed() {
        let hasher = Argon2PasswordHasher::default();
        let err = hasher
            .verify("pw", &PasswordHash::from_encoded("$2b$12$legacy"))
            .await
            .expect_err("truncated hash");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }

    #[rstest]
    #[case("not a phc string")]
    #[case("")]
    #[tokio::test]
    async fn unparseable_hash_is_reported_as_malformed(#[case] encoded: &str) {
        let hasher = Argon2PasswordHasher::default();
        let err = hasher
            .verify("pw", &PasswordHash::from_encoded(encoded))
            .await
            .expect_err("malformed hash");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn foreign_algorithm_is_reported_as_malformed() {
        let hasher = Argon2PasswordHasher::default();
        let foreign = PasswordHash::from_encoded(
            "$pbkdf2-sha256$i=1000$c2FsdHNhbHQ$YWJjZGVmZ2hpamtsbW5vcHFyc3R1dnd4eXo",
        );
        let err = hasher
            .verify("pw", &foreign)
            .await
            .expect_err("foreign hash");
        assert!(matches!(err, PasswordHashError::MalformedHash { .. }));
    }
}
