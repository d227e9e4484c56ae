//! Health check and database diagnostics.

use axum::{Json, extract::State};
use chrono::Utc;
use tracing::warn;

use super::SharedState;

/// `GET /api/health` — liveness only; does not touch the database.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Portfolio API is running",
    }))
}

/// `GET /api/diagnostics` — database state, per-collection counts, and a
/// reduced environment summary for debugging deployments.
pub async fn diagnostics(State(state): State<SharedState>) -> Json<serde_json::Value> {
    let (connected, counts) = match &state.db {
        Some(db) => match db.call(|db| db.collection_counts()).await {
            Ok(counts) => (true, serde_json::json!(counts)),
            Err(err) => {
                warn!("diagnostics count query failed: {err}");
                (false, serde_json::Value::Null)
            }
        },
        None => (false, serde_json::Value::Null),
    };

    Json(serde_json::json!({
        "database": {
            "connected": connected,
            "path": state.config.database_path.display().to_string(),
        },
        "collections": counts,
        "environment": {
            "port": state.config.port,
            "devMode": state.config.dev_mode,
            "mailConfigured": state.config.mail.is_configured(),
            "adminConfigured": state.config.admin_password_hash.is_some()
                && state.config.jwt_secret.is_some(),
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
