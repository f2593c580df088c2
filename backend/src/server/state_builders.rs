//! Builders wiring repositories and security adapters into HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::warn;

use crate::domain::ports::{CampRepository, DonorRepository};
use crate::domain::{CampService, DonorService};
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::persistence::{
    InMemoryCampRepository, InMemoryDonorRepository, MongoCampRepository, MongoDonorRepository,
};
use crate::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};

use super::ServerConfig;

/// Assemble the driving ports over the given repositories.
pub(crate) fn ports_over<D, C>(
    donor_repo: Arc<D>,
    camp_repo: Arc<C>,
    secret: &[u8],
) -> HttpStatePorts
where
    D: DonorRepository + 'static,
    C: CampRepository + 'static,
{
    let donors = Arc::new(DonorService::new(
        donor_repo,
        Arc::new(Argon2PasswordHasher::default()),
        Arc::new(JwtTokenIssuer::new(secret)),
        Arc::new(DefaultClock),
    ));
    let camps = Arc::new(CampService::new(camp_repo, Arc::new(DefaultClock)));
    HttpStatePorts {
        registration: donors.clone(),
        login: donors.clone(),
        donors,
        camps: camps.clone(),
        camps_query: camps,
    }
}

/// Build HTTP state from the configured store, or the in-memory
/// repositories when no store is attached.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let secret = config.signing_secret.as_bytes();
    let ports = match &config.store {
        Some(store) => ports_over(
            Arc::new(MongoDonorRepository::new(store.clone())),
            Arc::new(MongoCampRepository::new(store.clone())),
            secret,
        ),
        None => {
            warn!("no document store configured; records are kept in memory only");
            ports_over(
                Arc::new(InMemoryDonorRepository::default()),
                Arc::new(InMemoryCampRepository::default()),
                secret,
            )
        }
    };
    HttpState::new(ports)
}
