//! Contact-form relay endpoint.
//!
//! Validates the submission, then hands it to whatever transport the
//! current configuration selects. A transport failure is reported to the
//! caller as a 500 but never aborts request handling; an unconfigured
//! transport logs the submission and still succeeds.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::error;

use super::{ApiError, SharedState};
use crate::mail::{ContactMessage, Mailer};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub async fn send_contact(
    State(state): State<SharedState>,
    Json(req): Json<ContactRequest>,
) -> Response {
    let (name, email, message) = match (clean(req.name), clean(req.email), clean(req.message)) {
        (Some(name), Some(email), Some(message)) => (name, email, message),
        _ => return ApiError::Validation("All fields are required".into()).into_response(),
    };

    // Transport selection happens per submission so configuration changes
    // apply without a restart.
    let mailer = Mailer::from_config(&state.config.mail);
    let submission = ContactMessage {
        name,
        email,
        message,
    };

    match mailer.send(&submission).await {
        Ok(()) => Json(serde_json::json!({"message": "Message sent successfully!"})).into_response(),
        Err(err) => {
            error!("contact relay failed: {err}");
            let mut body =
                serde_json::json!({"error": "Failed to send message. Please try again later."});
            if state.config.dev_mode {
                body["details"] = serde_json::Value::String(err.to_string());
            }
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::{body_json, json_request, test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_contact_succeeds_without_transport() {
        let app = test_app();
        let resp = app
            .oneshot(json_request(
                "POST",
                "/api/contact",
                None,
                serde_json::json!({
                    "name": "Ada",
                    "email": "ada@example.com",
                    "message": "Hello!",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = body_json(resp.into_body()).await;
        assert_eq!(body["message"], "Message sent successfully!");
    }

    #[tokio::test]
    async fn test_contact_rejects_missing_fields() {
        let app = test_app();
        for payload in [
            serde_json::json!({}),
            serde_json::json!({"name": "Ada"}),
            serde_json::json!({"name": "Ada", "email": "ada@example.com"}),
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "  "}),
        ] {
            let resp = app
                .clone()
                .oneshot(json_request("POST", "/api/contact", None, payload))
                .await
                .unwrap();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body: serde_json::Value = body_json(resp.into_body()).await;
            assert_eq!(body["error"], "All fields are required");
        }
    }
}
