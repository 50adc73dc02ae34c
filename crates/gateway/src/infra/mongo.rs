//! MongoDB connection manager.
//!
//! Owns the single client of the running gateway. Nothing connects when a
//! `MongoConnection` is created: the client is built by [`MongoConnection::connect`]
//! during startup, verified with a `ping`, and only then published to readers.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use mongodb::{bson::doc, options::ClientOptions, Client, Database};
use thiserror::Error;
use tracing::{debug, error, info};

use common::DatabaseConfig;

/// Startup failures of the connection manager.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid MongoDB configuration: {0}")]
    Configuration(#[source] mongodb::error::Error),

    #[error("MongoDB did not answer the startup ping: {0}")]
    Ping(#[source] mongodb::error::Error),

    #[error("MongoDB connection is already established")]
    AlreadyConnected,
}

struct Connected {
    client: Client,
    database: Database,
}

/// Holds the client and database handle once connected.
///
/// Written at startup and shutdown only; request handlers read clones of the
/// database handle through [`MongoConnection::database`].
#[derive(Default)]
pub struct MongoConnection {
    slot: RwLock<Option<Connected>>,
}

impl MongoConnection {
    /// Create an unset manager. Performs no I/O.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the client, ping the database and publish the handle.
    ///
    /// On any failure the manager stays unset and the error is returned to the
    /// caller, which is expected to abort startup.
    pub async fn connect(&self, config: &DatabaseConfig) -> Result<Database, ConnectionError> {
        if self.is_connected() {
            return Err(ConnectionError::AlreadyConnected);
        }

        let mut options = ClientOptions::parse(config.uri.as_str())
            .await
            .map_err(ConnectionError::Configuration)?;
        options.app_name = Some(config.app_name.clone());
        options.server_selection_timeout =
            Some(Duration::from_millis(config.server_selection_timeout_ms));

        let client = Client::with_options(options).map_err(ConnectionError::Configuration)?;
        let database = client.database(&config.name);

        if let Err(e) = database.run_command(doc! { "ping": 1 }).await {
            error!("Failed to connect to MongoDB: {}", e);
            client.shutdown().await;
            return Err(ConnectionError::Ping(e));
        }

        // Another task may have connected while we were pinging.
        let rejected = {
            let mut slot = self.write_slot();
            if slot.is_some() {
                Some(client)
            } else {
                *slot = Some(Connected {
                    client,
                    database: database.clone(),
                });
                None
            }
        };

        if let Some(client) = rejected {
            client.shutdown().await;
            return Err(ConnectionError::AlreadyConnected);
        }

        info!(database = %config.name, "Connected to MongoDB");
        Ok(database)
    }

    /// Release the client if one is held. Safe to call any number of times.
    pub async fn disconnect(&self) {
        let connected = self.write_slot().take();

        match connected {
            Some(Connected { client, .. }) => {
                client.shutdown().await;
                info!("MongoDB connection closed");
            }
            None => debug!("MongoDB disconnect requested with no open connection"),
        }
    }

    /// Database handle if connected, `None` otherwise. Never fails.
    pub fn database(&self) -> Option<Database> {
        self.read_slot().as_ref().map(|c| c.database.clone())
    }

    /// Whether a verified connection is currently held
    pub fn is_connected(&self) -> bool {
        self.read_slot().is_some()
    }

    fn read_slot(&self) -> RwLockReadGuard<'_, Option<Connected>> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_slot(&self) -> RwLockWriteGuard<'_, Option<Connected>> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on port 1; server selection gives up after the timeout.
    fn unreachable_config() -> DatabaseConfig {
        DatabaseConfig {
            uri: "mongodb://127.0.0.1:1".to_string(),
            server_selection_timeout_ms: 200,
            ..DatabaseConfig::default()
        }
    }

    #[test]
    fn new_manager_is_unset() {
        let connection = MongoConnection::new();
        assert!(!connection.is_connected());
        assert!(connection.database().is_none());
    }

    #[tokio::test]
    async fn disconnect_without_connect_is_a_noop() {
        let connection = MongoConnection::new();
        connection.disconnect().await;
        connection.disconnect().await;
        assert!(connection.database().is_none());
    }

    #[tokio::test]
    async fn malformed_uri_fails_and_leaves_state_unset() {
        let connection = MongoConnection::new();
        let config = DatabaseConfig {
            uri: "not-a-mongodb-uri".to_string(),
            ..DatabaseConfig::default()
        };

        let result = connection.connect(&config).await;

        assert!(matches!(result, Err(ConnectionError::Configuration(_))));
        assert!(connection.database().is_none());
    }

    #[tokio::test]
    async fn unreachable_server_fails_ping_and_leaves_state_unset() {
        let connection = MongoConnection::new();

        let result = connection.connect(&unreachable_config()).await;

        assert!(matches!(result, Err(ConnectionError::Ping(_))));
        assert!(!connection.is_connected());
        assert!(connection.database().is_none());
    }

    #[tokio::test]
    #[ignore = "Requires MongoDB (set MONGODB_URI)"]
    async fn reachable_server_publishes_handle_until_disconnect() {
        let config = DatabaseConfig {
            uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| common::DEFAULT_MONGODB_URI.to_string()),
            ..DatabaseConfig::default()
        };
        let connection = MongoConnection::new();

        let database = connection.connect(&config).await.unwrap();
        assert_eq!(database.name(), config.name);
        assert!(connection.database().is_some());
        assert!(matches!(
            connection.connect(&config).await,
            Err(ConnectionError::AlreadyConnected)
        ));

        connection.disconnect().await;
        assert!(connection.database().is_none());
    }
}
