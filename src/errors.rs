//! Typed error hierarchy for the portfolio backend.
//!
//! Three enums cover the three subsystems:
//! - `StoreError` — content-repository failures
//! - `AuthError` — admin-gate failures
//! - `MailError` — contact-relay transport failures
//!
//! None of these carry HTTP status codes; the router layer
//! (`api::ApiError`) is the only place errors are mapped to responses.

use thiserror::Error;

/// Errors from the content store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced document does not exist. The argument is the
    /// resource kind as shown to clients ("Skill", "Project", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Sql(#[from] rusqlite::Error),
}

/// Errors from the admin gate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("No token provided")]
    MissingToken,

    #[error("Token expired. Please login again.")]
    TokenExpired,

    #[error("Invalid token")]
    TokenInvalid,

    /// Wrong admin password. There is exactly one admin identity, so this
    /// message never distinguishes "no such account" from "wrong password".
    #[error("Invalid password")]
    InvalidPassword,

    /// `ADMIN_PASSWORD_HASH` or `JWT_SECRET` is not set.
    #[error("Server configuration error")]
    Misconfigured,

    #[error("Authentication error: {0}")]
    Internal(String),
}

/// Errors from the outbound mail transport.
#[derive(Debug, Error)]
pub enum MailError {
    #[error("mail provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("mail provider returned {status}: {detail}")]
    Provider { status: u16, detail: String },
}
