//! Token signing secret loading.
//!
//! The secret comes from `SECRET_KEY` or from the file named by
//! `SECRET_KEY_FILE`. Release builds refuse to start without one; debug
//! builds fall back to a random per-process secret.

use std::fmt;
use std::path::PathBuf;

use mockable::Env;
use rand_core::{OsRng, RngCore};
use tracing::warn;
use zeroize::Zeroizing;

const SECRET_KEY_ENV: &str = "SECRET_KEY";
const SECRET_KEY_FILE_ENV: &str = "SECRET_KEY_FILE";
/// Minimum accepted secret length in release builds.
pub const SECRET_MIN_LEN: usize = 32;
const EPHEMERAL_SECRET_LEN: usize = 32;

/// Build mode for secret validation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Debug builds tolerate a missing or short secret with a warning.
    Debug,
    /// Release builds require an explicit secret of adequate length.
    Release,
}

impl BuildMode {
    /// Determine the build mode from `cfg!(debug_assertions)`.
    ///
    /// # Examples
    /// ```
    /// use donor_registry::config::BuildMode;
    ///
    /// let mode = BuildMode::from_debug_assertions();
    /// if cfg!(debug_assertions) {
    ///     assert_eq!(mode, BuildMode::Debug);
    /// } else {
    ///     assert_eq!(mode, BuildMode::Release);
    /// }
    /// ```
    #[must_use]
    pub fn from_debug_assertions() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// HMAC key used to sign login tokens.
pub struct SigningSecret(Zeroizing<Vec<u8>>);

impl SigningSecret {
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }

    fn ephemeral() -> Self {
        let mut raw = Zeroizing::new([0u8; EPHEMERAL_SECRET_LEN]);
        OsRng.fill_bytes(&mut raw[..]);
        Self(Zeroizing::new(hex::encode(&raw[..]).into_bytes()))
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Errors raised while loading the signing secret.
#[derive(thiserror::Error, Debug)]
pub enum SigningSecretError {
    /// Neither `SECRET_KEY` nor `SECRET_KEY_FILE` is set.
    #[error("missing signing secret: set SECRET_KEY or SECRET_KEY_FILE")]
    Missing,
    /// Reading the secret file failed.
    #[error("failed to read signing secret at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The secret is shorter than [`SECRET_MIN_LEN`].
    #[error("signing secret too short: need >= {min_len} bytes, got {length}")]
    TooShort { length: usize, min_len: usize },
}

/// Load the signing secret from the environment.
///
/// `SECRET_KEY` wins over `SECRET_KEY_FILE`. Trailing whitespace in a secret
/// file is ignored.
///
/// # Examples
/// ```
/// use donor_registry::config::{BuildMode, signing_secret_from_env};
/// use mockable::MockEnv;
///
/// let mut env = MockEnv::new();
/// env.expect_string().returning(|name| match name {
///     "SECRET_KEY" => Some("k".repeat(32)),
///     _ => None,
/// });
///
/// let secret = signing_secret_from_env(&env, BuildMode::Release).expect("secret");
/// assert_eq!(secret.as_bytes().len(), 32);
/// ```
pub fn signing_secret_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SigningSecret, SigningSecretError> {
    let raw = match non_empty(env.string(SECRET_KEY_ENV)) {
        Some(value) => Zeroizing::new(value.into_bytes()),
        None => match non_empty(env.string(SECRET_KEY_FILE_ENV)) {
            Some(path) => read_secret_file(PathBuf::from(path))?,
            None => {
                if mode.is_debug() {
                    warn!("no signing secret configured; using a temporary secret (dev only)");
                    return Ok(SigningSecret::ephemeral());
                }
                return Err(SigningSecretError::Missing);
            }
        },
    };

    let length = raw.len();
    if length < SECRET_MIN_LEN {
        if mode.is_debug() {
            warn!(length, min_len = SECRET_MIN_LEN, "signing secret is shorter than recommended");
        } else {
            return Err(SigningSecretError::TooShort {
                length,
                min_len: SECRET_MIN_LEN,
            });
        }
    }
    Ok(SigningSecret(raw))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

fn read_secret_file(path: PathBuf) -> Result<Zeroizing<Vec<u8>>, SigningSecretError> {
    let mut bytes =
        Zeroizing::new(std::fs::read(&path).map_err(|source| SigningSecretError::Read {
            path,
            source,
        })?);
    while bytes.last().is_some_and(u8::is_ascii_whitespace) {
        bytes.pop();
    }
    Ok(bytes)
}
