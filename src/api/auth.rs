//! Admin login and token verification endpoints.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tracing::warn;

use super::{ApiError, SharedState};
use crate::auth;
use crate::errors::AuthError;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub password: Option<String>,
}

/// `POST /api/auth/admin/login` — exchange the admin password for a
/// 24-hour bearer token.
pub async fn admin_login(
    State(state): State<SharedState>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let password = req
        .password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::Validation("Password is required".into()))?;

    let stored_hash = state
        .config
        .admin_password_hash
        .as_deref()
        .ok_or(AuthError::Misconfigured)?;
    let secret = state
        .config
        .jwt_secret
        .as_deref()
        .ok_or(AuthError::Misconfigured)?;

    if !auth::verify_password(&password, stored_hash) {
        warn!("admin login rejected: wrong password");
        return Err(ApiError::Auth(AuthError::InvalidPassword));
    }

    let token = auth::mint_token(secret, Utc::now())?;
    Ok(Json(serde_json::json!({
        "success": true,
        "token": token,
        "message": "Login successful",
    })))
}

/// `GET /api/auth/admin/verify` — let the admin panel check whether its
/// stored token is still good. Responses carry a `valid` flag either way,
/// so this handler shapes its own failures instead of using `ApiError`.
pub async fn admin_verify(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let result = auth::bearer_token(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok()),
    )
    .and_then(|token| {
        let secret = state
            .config
            .jwt_secret
            .as_deref()
            .ok_or(AuthError::Misconfigured)?;
        auth::verify_token(secret, token)
    });

    match result {
        Ok(claims) => Json(serde_json::json!({"valid": true, "admin": claims})).into_response(),
        Err(err) => {
            let status = if err == AuthError::Misconfigured {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::UNAUTHORIZED
            };
            (
                status,
                Json(serde_json::json!({"valid": false, "error": err.to_string()})),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{
        TEST_PASSWORD, TEST_SECRET, body_json, json_request, test_app, test_config, test_state,
    };
    use super::*;
    use crate::api::{AppState, api_router};
    use axum::body::Body;
    use axum::http::Request;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn verify_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri("/api/auth/admin/verify");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_login_success_returns_verifiable_token() {
        let app = api_router().with_state(test_state());
        let resp = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/auth/admin/login",
                None,
                serde_json::json!({"password": TEST_PASSWORD}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["success"], true);

        let token = body["token"].as_str().unwrap();
        let resp = app.oneshot(verify_request(Some(token))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["admin"]["admin"], true);
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_401() {
        let app = test_app();
        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/auth/admin/login",
                None,
                serde_json::json!({"password": "wrong-password"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["error"], "Invalid password");
    }

    #[tokio::test]
    async fn test_login_missing_password_is_400() {
        let app = test_app();
        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/auth/admin/login",
                None,
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["error"], "Password is required");
    }

    #[tokio::test]
    async fn test_login_without_configured_hash_is_500() {
        let mut config = test_config();
        config.admin_password_hash = None;
        let state = Arc::new(AppState { db: None, config });
        let app = api_router().with_state(state);

        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/auth/admin/login",
                None,
                serde_json::json!({"password": "anything"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["error"], "Server configuration error");
    }

    #[tokio::test]
    async fn test_verify_without_token_is_401_with_valid_false() {
        let app = test_app();
        let resp = app.oneshot(verify_request(None)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["valid"], false);
    }

    #[tokio::test]
    async fn test_verify_expired_token_distinguishable() {
        let app = test_app();
        let issued = chrono::Utc::now() - chrono::Duration::hours(25);
        let token = auth::mint_token(TEST_SECRET, issued).unwrap();

        let resp = app.oneshot(verify_request(Some(&token))).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"], "Token expired. Please login again.");
    }

    #[tokio::test]
    async fn test_verify_garbage_token_is_invalid() {
        let app = test_app();
        let resp = app
            .oneshot(verify_request(Some("not.a.jwt")))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["error"], "Invalid token");
    }
}
