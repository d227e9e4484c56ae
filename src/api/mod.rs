//! HTTP router layer.
//!
//! Thin mapping from verb+path to a store or gate call. Success responses
//! carry the resource as the JSON body; failures carry `{"error": msg}`
//! with the status drawn from the error kind. This module is the only
//! place error kinds become status codes.
//!
//! | Module        | Routes                                              |
//! |---------------|-----------------------------------------------------|
//! | `singletons`  | /api/about, /api/hero, /api/contact-info            |
//! | `collections` | /api/projects, /api/skills, /api/socials, /api/testimonials |
//! | `auth`        | /api/auth/admin/login, /api/auth/admin/verify       |
//! | `contact`     | /api/contact                                        |
//! | `diagnostics` | /api/health, /api/diagnostics                       |

pub mod auth;
pub mod collections;
pub mod contact;
pub mod diagnostics;
pub mod singletons;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::error;

use crate::auth::AdminClaims;
use crate::config::Config;
use crate::errors::{AuthError, StoreError};
use crate::store::DbHandle;

// ── Shared application state ──────────────────────────────────────────

pub struct AppState {
    /// `None` when the database could not be opened at startup; content
    /// routes then fail per-request instead of the process refusing to
    /// boot.
    pub db: Option<DbHandle>,
    pub config: Config,
}

impl AppState {
    pub fn db(&self) -> Result<&DbHandle, ApiError> {
        self.db.as_ref().ok_or(ApiError::Upstream)
    }
}

pub type SharedState = Arc<AppState>;

// ── Error handling ────────────────────────────────────────────────────

pub enum ApiError {
    Validation(String),
    Auth(AuthError),
    NotFound(String),
    /// Database or another collaborator is unreachable. Detail is logged
    /// where the failure is observed; the client sees a generic message.
    Upstream,
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Service temporarily unavailable".to_string(),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        (status, Json(serde_json::json!({"error": message}))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(kind) => ApiError::NotFound(format!("{kind} not found")),
            StoreError::Validation(msg) => ApiError::Validation(msg),
            StoreError::Unavailable(detail) => {
                error!("store unavailable: {detail}");
                ApiError::Upstream
            }
            StoreError::Sql(e) => {
                error!("database error: {e}");
                ApiError::Internal("Unexpected database error".into())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Misconfigured => ApiError::Internal(err.to_string()),
            AuthError::Internal(detail) => {
                error!("auth failure: {detail}");
                ApiError::Internal("Authentication error".into())
            }
            other => ApiError::Auth(other),
        }
    }
}

// ── Admin-gate extractor ──────────────────────────────────────────────

/// Bearer-token guard for mutating routes. Declared before the `Json`
/// body extractor in every protected handler, so an unauthenticated
/// request is rejected before its payload is even parsed.
impl FromRequestParts<SharedState> for AdminClaims {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        let token = crate::auth::bearer_token(header)?;
        let secret = state
            .config
            .jwt_secret
            .as_deref()
            .ok_or(AuthError::Misconfigured)?;
        Ok(crate::auth::verify_token(secret, token)?)
    }
}

// ── Router ────────────────────────────────────────────────────────────

pub fn api_router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/about",
            get(singletons::get_about).put(singletons::update_about),
        )
        .route(
            "/api/hero",
            get(singletons::get_hero).put(singletons::update_hero),
        )
        .route(
            "/api/contact-info",
            get(singletons::get_contact_info).put(singletons::update_contact_info),
        )
        .route(
            "/api/projects",
            get(collections::list_projects).post(collections::create_project),
        )
        .route(
            "/api/projects/{id}",
            put(collections::update_project).delete(collections::delete_project),
        )
        .route(
            "/api/skills",
            get(collections::list_skills).post(collections::create_skill),
        )
        .route(
            "/api/skills/category/{category}",
            get(collections::list_skills_by_category),
        )
        .route(
            "/api/skills/{id}",
            put(collections::update_skill).delete(collections::delete_skill),
        )
        .route(
            "/api/socials",
            get(collections::list_socials).post(collections::create_social),
        )
        .route(
            "/api/socials/{id}",
            put(collections::update_social).delete(collections::delete_social),
        )
        .route(
            "/api/testimonials",
            get(collections::list_testimonials).post(collections::create_testimonial),
        )
        .route(
            "/api/testimonials/featured",
            get(collections::list_featured_testimonials),
        )
        .route(
            "/api/testimonials/{id}",
            put(collections::update_testimonial).delete(collections::delete_testimonial),
        )
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/auth/admin/verify", get(auth::admin_verify))
        .route("/api/contact", post(contact::send_contact))
        .route("/api/health", get(diagnostics::health))
        .route("/api/diagnostics", get(diagnostics::diagnostics))
}

// ── Tests ─────────────────────────────────────────────────────────────
