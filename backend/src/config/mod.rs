//! Process configuration: listener and store settings plus the token
//! signing secret.

pub mod settings;
pub mod signing;

pub use settings::AppSettings;
pub use signing::{BuildMode, SigningSecret, SigningSecretError, signing_secret_from_env};
