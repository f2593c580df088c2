//! HTTP server configuration object.

use std::net::SocketAddr;

use crate::config::SigningSecret;
use crate::outbound::persistence::MongoStore;

/// Builder-style configuration for creating the HTTP server.
#[derive(Debug)]
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) signing_secret: SigningSecret,
    pub(crate) store: Option<MongoStore>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, signing_secret: SigningSecret) -> Self {
        Self {
            bind_addr,
            signing_secret,
            store: None,
        }
    }

    /// Attach a connected document store.
    ///
    /// Without one the server runs on the in-memory repositories.
    #[must_use]
    pub fn with_store(mut self, store: MongoStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
