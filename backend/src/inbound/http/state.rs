//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CampsCommand, CampsQuery, DonorRegistrationCommand, DonorsQuery, LoginService,
};

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub registration: Arc<dyn DonorRegistrationCommand>,
    pub login: Arc<dyn LoginService>,
    pub donors: Arc<dyn DonorsQuery>,
    pub camps: Arc<dyn CampsCommand>,
    pub camps_query: Arc<dyn CampsQuery>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub registration: Arc<dyn DonorRegistrationCommand>,
    pub login: Arc<dyn LoginService>,
    pub donors: Arc<dyn DonorsQuery>,
    pub camps: Arc<dyn CampsCommand>,
    pub camps_query: Arc<dyn CampsQuery>,
}

impl From<HttpStatePorts> for HttpState {
    fn from(ports: HttpStatePorts) -> Self {
        Self::new(ports)
    }
}

impl HttpState {
    /// Construct state from a ports bundle.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use donor_registry::domain::{CampService, DonorService};
    /// use donor_registry::inbound::http::state::{HttpState, HttpStatePorts};
    /// use donor_registry::outbound::persistence::{
    ///     InMemoryCampRepository, InMemoryDonorRepository,
    /// };
    /// use donor_registry::outbound::security::{Argon2PasswordHasher, JwtTokenIssuer};
    ///
    /// let donors = Arc::new(DonorService::new(
    ///     Arc::new(InMemoryDonorRepository::default()),
    ///     Arc::new(Argon2PasswordHasher::default()),
    ///     Arc::new(JwtTokenIssuer::new(b"0123456789abcdef0123456789abcdef")),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let camps = Arc::new(CampService::new(
    ///     Arc::new(InMemoryCampRepository::default()),
    ///     Arc::new(DefaultClock),
    /// ));
    /// let state = HttpState::new(HttpStatePorts {
    ///     registration: donors.clone(),
    ///     login: donors.clone(),
    ///     donors,
    ///     camps: camps.clone(),
    ///     camps_query: camps,
    /// });
    /// let _login = state.login.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            registration,
            login,
            donors,
            camps,
            camps_query,
        } = ports;
        Self {
            registration,
            login,
            donors,
            camps,
            camps_query,
        }
    }
}
