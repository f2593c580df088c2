//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Credentials were rejected.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The document store failed or could not be reached.
    #[schema(rename = "upstream_failure")]
    UpstreamFailure,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Error)]
#[schema(rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "Missing required fields")]
    message: String,
    /// Correlation identifier matching the `Trace-Id` response header.
    #[schema(example = "6f1c8c1e-7d3b-4c55-9d7e-0d0f6b3f9a10")]
    trace_id: Option<String>,
    /// Supplementary details such as `missing_fields`.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::DonorProfile`].
#[derive(ToSchema)]
#[schema(as = crate::domain::DonorProfile)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DonorProfileSchema {
    #[schema(example = "Ada Lovelace")]
    name: String,
    #[schema(example = 36)]
    age: u32,
    gender: String,
    #[schema(example = "O+")]
    blood_group: String,
    contact: String,
    #[schema(example = "ada@example.org")]
    email: String,
    address: String,
    last_donation_date: Option<String>,
    eligible_next_donation: String,
    #[schema(example = "None")]
    health_conditions: String,
    preferred_location: String,
    #[schema(example = "active")]
    donor_status: String,
    /// Server-assigned registration time (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime)]
    registered_at: String,
}

/// OpenAPI schema for [`crate::domain::Camp`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Camp)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CampSchema {
    #[schema(example = "Spring drive")]
    name: String,
    #[schema(example = "Town hall")]
    location: String,
    #[schema(example = "2026-04-01")]
    date: String,
    #[schema(example = 25)]
    available_spots: u32,
    /// Server-assigned creation time (RFC 3339, UTC).
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
