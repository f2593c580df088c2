//! Domain primitives, ports, and services.
//!
//! Purpose: Define the donor and camp records, the validation they go
//! through, and the use-case services the HTTP adapter drives. Nothing in
//! here knows about actix or MongoDB.
//!
//! Public surface:
//! - Error (alias to `error::Error`): API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - Donor / DonorProfile: stored record and its password-free projection.
//! - Camp: stored donation camp.
//! - DonorService / CampService: implementations of the driving ports.

pub mod auth;
pub mod camp;
pub mod camp_service;
pub mod donor;
pub mod donor_service;
pub mod error;
pub mod ports;
pub mod registration;
pub mod trace_id;

pub use self::auth::{IssuedToken, LoginCredentials, LoginValidationError};
pub use self::camp::{Camp, CampDraft, NewCamp};
pub use self::camp_service::CampService;
pub use self::donor::{
    Donor, DonorDetails, DonorProfile, Email, EmailValidationError, PasswordHash,
};
pub use self::donor_service::{
    DUPLICATE_EMAIL_MESSAGE, DonorService, INVALID_CREDENTIALS_MESSAGE,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::registration::{
    DEFAULT_HEALTH_CONDITIONS, DonorRegistration, DonorRegistrationDraft, DraftValidationError,
    IntegerInput,
};
pub use self::trace_id::TraceId;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use donor_registry::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::conflict("Email already registered"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
