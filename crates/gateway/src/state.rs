//! Application state for dependency injection.

use std::sync::Arc;

use services::ServiceContainer;

use crate::auth::TokenVerifier;
use crate::config::GatewayConfig;
use crate::infra::MongoConnection;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<dyn ServiceContainer>,
    pub token_verifier: Arc<dyn TokenVerifier>,
    pub database: Arc<MongoConnection>,
    pub config: GatewayConfig,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        services: Arc<dyn ServiceContainer>,
        token_verifier: Arc<dyn TokenVerifier>,
        database: Arc<MongoConnection>,
        config: GatewayConfig,
    ) -> Self {
        Self {
            services,
            token_verifier,
            database,
            config,
        }
    }
}
