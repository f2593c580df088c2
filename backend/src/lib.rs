//! Blood-donation registry backend.
//!
//! Donors register and log in, staff list donors and manage donation camps.
//! The domain sits behind ports; MongoDB, Argon2, and JWT adapters live in
//! [`outbound`], the Actix handlers in [`inbound`].

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
