//! Donor API handlers.
//!
//! ```text
//! POST /register_donor {"name":"Ada","age":36,...,"email":"ada@example.org","password":"..."}
//! POST /login {"email":"ada@example.org","password":"..."}
//! GET /donors
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{
    DonorProfile, DonorRegistrationDraft, Error, INVALID_CREDENTIALS_MESSAGE, IntegerInput,
    LoginCredentials,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DonorProfileSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Success message for `POST /register_donor`.
pub const REGISTRATION_MESSAGE: &str = "Registration Successful!";
/// Success message for `POST /login`.
pub const LOGIN_MESSAGE: &str = "Login successful!";

/// Request body for `POST /register_donor`.
///
/// Every key is optional at the decoding stage so that absent keys can be
/// reported together. `null` counts as absent.
#[derive(Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RegisterDonorRequest {
    #[schema(example = "Ada Lovelace")]
    pub name: Option<String>,
    /// Integer, or a string holding one.
    #[schema(value_type = Option<i64>, example = 36)]
    pub age: Option<IntegerInput>,
    pub gender: Option<String>,
    #[schema(example = "O+")]
    pub blood_group: Option<String>,
    pub contact: Option<String>,
    #[schema(example = "ada@example.org")]
    pub email: Option<String>,
    pub password: Option<String>,
    pub address: Option<String>,
    pub last_donation_date: Option<String>,
    pub eligible_next_donation: Option<String>,
    /// Defaults to `"None"`.
    pub health_conditions: Option<String>,
    pub preferred_location: Option<String>,
    pub donor_status: Option<String>,
}

impl From<RegisterDonorRequest> for DonorRegistrationDraft {
    fn from(value: RegisterDonorRequest) -> Self {
        Self {
            name: value.name,
            age: value.age,
            gender: value.gender,
            blood_group: value.blood_group,
            contact: value.contact,
            email: value.email,
            password: value.password,
            address: value.address,
            last_donation_date: value.last_donation_date,
            eligible_next_donation: value.eligible_next_donation,
            health_conditions: value.health_conditions,
            preferred_location: value.preferred_location,
            donor_status: value.donor_status,
        }
    }
}

/// Login request body for `POST /login`.
#[derive(Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "ada@example.org")]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Plain acknowledgement body.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body returned by a successful login.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful!")]
    pub message: String,
    /// HS256 JWT carrying `email` and `exp` claims.
    pub token: String,
}

/// Register a new donor.
#[utoipa::path(
    post,
    path = "/register_donor",
    request_body = RegisterDonorRequest,
    responses(
        (status = 201, description = "Donor registered", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorSchema),
        (status = 409, description = "Email already registered", body = ErrorSchema),
        (status = 500, description = "Store or internal failure", body = ErrorSchema)
    ),
    tags = ["donors"],
    operation_id = "registerDonor"
)]
#[post("/register_donor")]
pub async fn register_donor(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterDonorRequest>,
) -> ApiResult<HttpResponse> {
    state
        .registration
        .register(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(REGISTRATION_MESSAGE)))
}

/// Exchange donor credentials for a signed token.
///
/// Blank or absent credentials fail exactly like wrong ones.
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login success", body = LoginResponse),
        (status = 400, description = "Body is not JSON", body = ErrorSchema),
        (status = 401, description = "Invalid email or password", body = ErrorSchema),
        (status = 500, description = "Store or internal failure", body = ErrorSchema)
    ),
    tags = ["donors"],
    operation_id = "login"
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<web::Json<LoginResponse>> {
    let LoginRequest { email, password } = payload.into_inner();
    let credentials = LoginCredentials::try_from_parts(
        email.as_deref().unwrap_or_default(),
        password.as_deref().unwrap_or_default(),
    )
    .map_err(|_| Error::unauthorized(INVALID_CREDENTIALS_MESSAGE))?;

    let issued = state.login.login(&credentials).await?;
    Ok(web::Json(LoginResponse {
        message: LOGIN_MESSAGE.to_owned(),
        token: issued.token,
    }))
}

/// List every registered donor without password hashes.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use donor_registry::inbound::http::donors::list_donors;
///
/// let app = App::new().service(list_donors);
/// ```
#[utoipa::path(
    get,
    path = "/donors",
    responses(
        (status = 200, description = "Donors", body = [DonorProfileSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["donors"],
    operation_id = "listDonors"
)]
#[get("/donors")]
pub async fn list_donors(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<DonorProfile>>> {
    Ok(web::Json(state.donors.list_donors().await?))
}

#[cfg(test)]
#[path = "donors_tests.rs"]
mod tests;
