//! Backend entry-point: loads settings, connects the store, and serves the API.

use std::io;

use actix_web::web;
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use donor_registry::config::{AppSettings, BuildMode, signing_secret_from_env};
use donor_registry::inbound::http::health::HealthState;
use donor_registry::outbound::persistence::{MongoStore, StoreConfig};
use donor_registry::server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid bind host {}: {e}", settings.host()),
        )
    })?;
    let secret = signing_secret_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr, secret);
    if let Some(uri) = settings.mongo_uri.as_deref() {
        let store = MongoStore::connect(&StoreConfig::new(uri, settings.mongo_database()))
            .await
            .map_err(io::Error::other)?;
        store.ping().await.map_err(io::Error::other)?;
        store.ensure_indexes().await.map_err(io::Error::other)?;
        info!(database = settings.mongo_database(), "document store ready");
        config = config.with_store(store);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting donor registry");
    create_server(health_state, config)?.await
}
