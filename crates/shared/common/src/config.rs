//! Shared configuration structures.

use serde::{Deserialize, Serialize};

/// Default MongoDB connection string (local standard port)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default MongoDB database name
pub const DEFAULT_MONGODB_DB: &str = "ecom_db";

/// Default client application name reported to the server
pub const DEFAULT_MONGODB_APP_NAME: &str = "storefront-gateway";

/// Default time the driver waits to find a usable server
pub const DEFAULT_SERVER_SELECTION_TIMEOUT_MS: u64 = 5000;

/// Document database configuration.
#[derive(Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Connection string
    pub uri: String,
    /// Database resolved on the client
    pub name: String,
    /// Application name sent in the connection handshake
    pub app_name: String,
    /// Server selection timeout; bounds how long the startup ping may wait
    pub server_selection_timeout_ms: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The URI may carry credentials.
        f.debug_struct("DatabaseConfig")
            .field("uri", &"[REDACTED]")
            .field("name", &self.name)
            .field("app_name", &self.app_name)
            .field("server_selection_timeout_ms", &self.server_selection_timeout_ms)
            .finish()
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_MONGODB_URI.to_string(),
            name: DEFAULT_MONGODB_DB.to_string(),
            app_name: DEFAULT_MONGODB_APP_NAME.to_string(),
            server_selection_timeout_ms: DEFAULT_SERVER_SELECTION_TIMEOUT_MS,
        }
    }
}

/// JWT configuration for authentication.
#[derive(Clone, Default, Deserialize, Serialize)]
pub struct JwtConfig {
    #[serde(skip_serializing)]
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
