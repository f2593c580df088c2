//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers that describe domain types without coupling them
//! to utoipa. The document backs Swagger UI in debug builds and is exported
//! by the `openapi-dump` binary.

use crate::inbound::http::camps::AddCampRequest;
use crate::inbound::http::donors::{
    LoginRequest, LoginResponse, MessageResponse, RegisterDonorRequest,
};
use crate::inbound::http::schemas::{CampSchema, DonorProfileSchema, ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Donor registry API",
        description = "Blood-donation registry: donor registration, login, donor listing, and donation camps."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::donors::register_donor,
        crate::inbound::http::donors::login,
        crate::inbound::http::donors::list_donors,
        crate::inbound::http::camps::list_camps,
        crate::inbound::http::camps::add_camp,
        crate::inbound::http::health::welcome,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        DonorProfileSchema,
        CampSchema,
        RegisterDonorRequest,
        LoginRequest,
        LoginResponse,
        MessageResponse,
        AddCampRequest
    )),
    tags(
        (name = "donors", description = "Donor registration, login, and listing"),
        (name = "camps", description = "Donation camps"),
        (name = "health", description = "Welcome message and health probes")
    )
)]
pub struct ApiDoc;
