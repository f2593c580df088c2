//! HTTP inbound adapter exposing the registry endpoints.

pub mod camps;
pub mod donors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;

pub use error::ApiResult;
