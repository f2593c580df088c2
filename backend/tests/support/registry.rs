//! Application wiring shared by the integration suites.

use std::sync::Arc;

use mockable::DefaultClock;
use serde_json::{Value, json};

use donor_registry::domain::ports::{CampRepository, DonorRepository};
use donor_registry::domain::{CampService, DonorService};
use donor_registry::inbound::http::state::{HttpState, HttpStatePorts};
use donor_registry::outbound::persistence::{InMemoryCampRepository, InMemoryDonorRepository};
use donor_registry::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};

pub const TEST_SECRET: &[u8] = b"integration-signing-secret-0123456789";

pub fn issuer() -> JwtTokenIssuer {
    JwtTokenIssuer::new(TEST_SECRET)
}

/// HTTP state over arbitrary repositories with the real security adapters.
pub fn http_state_over<D, C>(donors: Arc<D>, camps: Arc<C>) -> HttpState
where
    D: DonorRepository + 'static,
    C: CampRepository + 'static,
{
    let donor_service = Arc::new(DonorService::new(
        donors,
        Arc::new(Argon2PasswordHasher::default()),
        Arc::new(issuer()),
        Arc::new(DefaultClock),
    ));
    let camp_service = Arc::new(CampService::new(camps, Arc::new(DefaultClock)));
    HttpState::new(HttpStatePorts {
        registration: donor_service.clone(),
        login: donor_service.clone(),
        donors: donor_service,
        camps: camp_service.clone(),
        camps_query: camp_service,
    })
}

pub fn in_memory_state() -> HttpState {
    http_state_over(
        Arc::new(InMemoryDonorRepository::default()),
        Arc::new(InMemoryCampRepository::default()),
    )
}

/// A complete registration body for `email`.
pub fn registration_payload(email: &str) -> Value {
    json!({
        "name": "Mary Seacole",
        "age": "48",
        "gender": "F",
        "blood_group": "B+",
        "contact": "020 7946 0000",
        "email": email,
        "password": "crimean-hotel",
        "address": "Kingston",
        "last_donation_date": "2026-01-15",
        "eligible_next_donation": "2026-04-15",
        "health_conditions": "Mild asthma",
        "preferred_location": "St Thomas'",
        "donor_status": "active",
    })
}
