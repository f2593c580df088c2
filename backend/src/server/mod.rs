//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpResponse, HttpServer, web};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::Trace;
#[cfg(debug_assertions)]
use crate::doc::ApiDoc;
use crate::domain::{Error, TRACE_ID_HEADER};
use crate::inbound::http::ApiResult;
use crate::inbound::http::camps::{add_camp, list_camps};
use crate::inbound::http::donors::{list_donors, login, register_donor};
use crate::inbound::http::health::{HealthState, live, ready, welcome};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::json_config;

const CORS_MAX_AGE_SECS: usize = 3600;

/// Any origin, any method, any header; responses carry a literal `*`.
fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allow_any_method()
        .allow_any_header()
        .expose_headers([TRACE_ID_HEADER])
        .max_age(CORS_MAX_AGE_SECS)
}

async fn route_not_found() -> ApiResult<HttpResponse> {
    Err(Error::not_found("Route not found"))
}

/// Build the application with every route and middleware attached.
///
/// The trace middleware is outermost, so CORS preflight answers carry a
/// `Trace-Id` header too.
pub fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(cors())
        .wrap(Trace)
        .service(welcome)
        .service(register_donor)
        .service(login)
        .service(list_donors)
        .service(list_camps)
        .service(add_camp)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app.default_service(web::to(route_not_found))
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
