//! Request body decoding shared by the HTTP handlers.
//!
//! Bodies that are not JSON, do not match the request shape, or carry
//! unknown keys are rejected with `invalid_request` instead of Actix's
//! default plain-text 400.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, web};
use serde_json::json;

use crate::domain::Error;

/// Upper bound on accepted JSON bodies.
const MAX_JSON_BYTES: usize = 64 * 1024;

fn json_error_reason(err: &JsonPayloadError) -> &'static str {
    match err {
        JsonPayloadError::ContentType => "content_type",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "too_large"
        }
        JsonPayloadError::Deserialize(inner) if inner.is_data() => "invalid_shape",
        _ => "malformed_json",
    }
}

pub(crate) fn json_payload_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let reason = json_error_reason(&err);
    Error::invalid_request("Invalid JSON payload")
        .with_details(json!({ "reason": reason, "error": err.to_string() }))
        .into()
}

/// JSON extractor configuration applied to every route.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use donor_registry::inbound::http::validation::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(json_payload_error)
}
