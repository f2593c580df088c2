//! Test helpers for inbound HTTP components.
//!
//! The harness wires the real domain services over in-memory repositories
//! together with the real Argon2 and JWT adapters.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use mockable::DefaultClock;
use serde_json::Value;

use crate::domain::{CampService, DonorService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::validation::json_config;
use crate::inbound::http::{camps, donors};
use crate::outbound::persistence::{InMemoryCampRepository, InMemoryDonorRepository};
use crate::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};

/// Signing secret used by every harness.
pub const TEST_SECRET: &[u8] = b"test-signing-secret-0123456789abcdef";

pub struct TestHarness {
    pub donor_repo: Arc<InMemoryDonorRepository>,
    pub camp_repo: Arc<InMemoryCampRepository>,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            donor_repo: Arc::new(InMemoryDonorRepository::default()),
            camp_repo: Arc::new(InMemoryCampRepository::default()),
        }
    }

    pub fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new(TEST_SECRET)
    }

    pub fn state(&self) -> HttpState {
        let donor_service = Arc::new(DonorService::new(
            self.donor_repo.clone(),
            Arc::new(Argon2PasswordHasher::default()),
            Arc::new(Self::issuer()),
            Arc::new(DefaultClock),
        ));
        let camp_service = Arc::new(CampService::new(
            self.camp_repo.clone(),
            Arc::new(DefaultClock),
        ));
        HttpState::new(HttpStatePorts {
            registration: donor_service.clone(),
            login: donor_service.clone(),
            donors: donor_service,
            camps: camp_service.clone(),
            camps_query: camp_service,
        })
    }

    /// App exposing the donor and camp routes.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::new(self.state()))
            .app_data(json_config())
            .service(donors::register_donor)
            .service(donors::login)
            .service(donors::list_donors)
            .service(camps::list_camps)
            .service(camps::add_camp)
    }
}

/// Decode a response body as JSON.
pub async fn read_json(response: ServiceResponse) -> Value {
    let bytes = actix_web::test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
