//! Server settings loaded via OrthoConfig.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 45171;
const DEFAULT_MONGO_DATABASE: &str = "blood_donation";

fn default_host() -> String {
    DEFAULT_HOST.to_owned()
}

/// Listener and document store settings.
///
/// Every value may come from the command line, a config file, or a
/// `DONOR_REGISTRY_*` environment variable.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "DONOR_REGISTRY")]
pub struct AppSettings {
    /// Interface address to bind.
    #[ortho_config(default = default_host())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = DEFAULT_PORT)]
    pub port: u16,
    /// MongoDB connection string. The in-memory store is used when unset.
    pub mongo_uri: Option<String>,
    /// Database holding the `donors` and `camps` collections.
    pub mongo_database: Option<String>,
}

impl AppSettings {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn mongo_database(&self) -> &str {
        self.mongo_database
            .as_deref()
            .unwrap_or(DEFAULT_MONGO_DATABASE)
    }

    /// Socket address built from [`host`](Self::host) and [`port`](Self::port).
    ///
    /// # Errors
    /// Fails when the host is not an IP address literal.
    pub fn bind_addr(&self) -> Result<SocketAddr, AddrParseError> {
        let ip: IpAddr = self.host().trim().parse()?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
