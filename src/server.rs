//! Server assembly: router construction, CORS policy, startup and
//! graceful shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::{error, info};

use crate::api::{AppState, SharedState, api_router};
use crate::config::Config;
use crate::mail;
use crate::store::{DbHandle, PortfolioDb};

/// Build the full application router with CORS applied.
pub fn build_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config);
    api_router().with_state(state).layer(cors)
}

/// Restrict cross-origin access to the configured frontend origin(s);
/// with none configured the API stays open for local development.
fn cors_layer(config: &Config) -> CorsLayer {
    if config.allowed_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// Start the portfolio API server.
///
/// A database that cannot be opened is logged and tolerated: the process
/// keeps serving, and content routes fail per-request until the database
/// becomes available on a restart. Auth, health, and the contact relay
/// stay functional throughout.
pub async fn start_server(config: Config) -> Result<()> {
    let db = match PortfolioDb::open(&config.database_path) {
        Ok(db) => Some(DbHandle::new(db)),
        Err(e) => {
            error!(
                "failed to open database at {}: {e}; continuing without storage",
                config.database_path.display()
            );
            None
        }
    };

    mail::log_transport_status(&config.mail);
    if config.admin_password_hash.is_none() || config.jwt_secret.is_none() {
        tracing::warn!(
            "ADMIN_PASSWORD_HASH / JWT_SECRET not fully set; admin login will be unavailable"
        );
    }

    let addr = format!("{}:{}", config.host, config.port);
    let state = Arc::new(AppState { db, config });
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;
    info!("portfolio API listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    info!("shutting down...");
}
