//! MongoDB client construction and collection handles.
//!
//! The driver owns its own connection pool; [`MongoStore`] is cheap to clone
//! and is shared by every repository and worker.

use std::time::Duration;

use bson::doc;
use mongodb::options::{ClientOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};
use tracing::info;

use super::documents::{CampDocument, DonorDocument};

pub(crate) const DONORS_COLLECTION: &str = "donors";
pub(crate) const CAMPS_COLLECTION: &str = "camps";
const APP_NAME: &str = "donor-registry";

/// Errors raised while connecting to or preparing the store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The URI was rejected or the client could not be built.
    #[error("failed to configure document store client: {message}")]
    Configure { message: String },

    /// The server did not answer a ping.
    #[error("document store is unreachable: {message}")]
    Unreachable { message: String },

    /// Index creation failed.
    #[error("failed to create document store index: {message}")]
    Index { message: String },
}

impl StoreError {
    pub fn configure(message: impl Into<String>) -> Self {
        Self::Configure {
            message: message.into(),
        }
    }

    pub fn unreachable(message: impl Into<String>) -> Self {
        Self::Unreachable {
            message: message.into(),
        }
    }

    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }
}

/// Connection settings for the document store.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use donor_registry::outbound::persistence::StoreConfig;
///
/// let config = StoreConfig::new("mongodb://localhost:27017", "blood_donation")
///     .with_server_selection_timeout(Duration::from_secs(2));
/// assert_eq!(config.database(), "blood_donation");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    uri: String,
    database: String,
    server_selection_timeout: Duration,
}

impl StoreConfig {
    /// Create a configuration with a five second server-selection timeout.
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            server_selection_timeout: Duration::from_secs(5),
        }
    }

    /// Bound how long an operation waits for a reachable server.
    pub fn with_server_selection_timeout(mut self, timeout: Duration) -> Self {
        self.server_selection_timeout = timeout;
        self
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn database(&self) -> &str {
        &self.database
    }
}

/// Shared handle to the registry database.
#[derive(Clone, Debug)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Build a client for `config`.
    ///
    /// The driver connects lazily, so this succeeds without a running server;
    /// call [`MongoStore::ping`] to check reachability.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Configure`] when the URI cannot be parsed.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(config.uri())
            .await
            .map_err(|err| StoreError::configure(err.to_string()))?;
        options.app_name = Some(APP_NAME.to_owned());
        options.server_selection_timeout = Some(config.server_selection_timeout);

        let client =
            Client::with_options(options).map_err(|err| StoreError::configure(err.to_string()))?;
        Ok(Self {
            database: client.database(config.database()),
        })
    }

    /// Round-trip a `ping` command.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|err| StoreError::unreachable(err.to_string()))
    }

    /// Create the unique email index on the donors collection.
    ///
    /// Index creation is idempotent, so this runs on every start.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let model = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("donors_email_unique".to_owned())
                    .build(),
            )
            .build();
        self.donors()
            .create_index(model)
            .await
            .map_err(|err| StoreError::index(err.to_string()))?;
        info!(collection = DONORS_COLLECTION, "unique email index ensured");
        Ok(())
    }

    pub(crate) fn donors(&self) -> Collection<DonorDocument> {
        self.database.collection(DONORS_COLLECTION)
    }

    pub(crate) fn camps(&self) -> Collection<CampDocument> {
        self.database.collection(CAMPS_COLLECTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn store_config_defaults() {
        let config = StoreConfig::new("mongodb://localhost:27017", "blood_donation");
        assert_eq!(config.uri(), "mongodb://localhost:27017");
        assert_eq!(config.database(), "blood_donation");
        assert_eq!(config.server_selection_timeout, Duration::from_secs(5));
    }

    #[rstest]
    #[tokio::test]
    async fn connect_rejects_malformed_uri() {
        let config = StoreConfig::new("postgres://not-mongo", "blood_donation");
        let err = MongoStore::connect(&config)
            .await
            .expect_err("non-mongodb scheme must fail");
        assert!(matches!(err, StoreError::Configure { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn connect_is_lazy() {
        let config = StoreConfig::new("mongodb://127.0.0.1:1", "blood_donation");
        MongoStore::connect(&config)
            .await
            .expect("client builds without a server");
    }

    #[rstest]
    fn store_error_display() {
        assert!(
            StoreError::unreachable("timed out")
                .to_string()
                .contains("timed out")
        );
        assert!(StoreError::index("duplicate").to_string().contains("index"));
    }
}
