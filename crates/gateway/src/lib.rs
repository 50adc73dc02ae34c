//! Storefront Gateway Library
//!
//! HTTP routing layer of the storefront: authenticates callers, validates
//! request bodies and forwards every call to the service layer. The hosting
//! binary supplies the services through a [`ServiceProvider`] and calls
//! [`run_server`].

pub mod auth;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use services::ServiceProvider;

use crate::auth::JwtVerifier;
use crate::config::GatewayConfig;
use crate::infra::MongoConnection;
use crate::routes::create_router;
use crate::state::AppState;

/// Install the global tracing subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Connect to MongoDB, serve HTTP until a shutdown signal, then disconnect.
///
/// A failed startup connection aborts before the listener is bound.
pub async fn run_server<P>(
    config: GatewayConfig,
    provider: P,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>>
where
    P: ServiceProvider,
{
    let database = Arc::new(MongoConnection::new());
    let db = database.connect(&config.database).await?;

    let services = Arc::new(provider.provide(db));
    let token_verifier = Arc::new(JwtVerifier::new(config.jwt.secret.as_bytes()));

    let state = AppState::new(services, token_verifier, database.clone(), config);
    let served = serve(state).await;

    database.disconnect().await;

    served
}

async fn serve(state: AppState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let addr: SocketAddr = state.config.server_addr().parse()?;
    let app = create_router(state);

    info!("Gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown");
}
