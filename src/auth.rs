//! Admin gate: password verification and token issuance/verification.
//!
//! There is exactly one admin identity. Presenting the correct password
//! mints a signed HS256 token carrying `{admin, iat, exp}`; every mutating
//! route then requires that token as a bearer credential. Nothing is
//! persisted server-side — validity is fully determined by the signature
//! and the embedded expiry, so revocation means waiting out the 24-hour
//! window or rotating `JWT_SECRET`.
//!
//! This module is framework-free; the bearer-header extractor that feeds
//! it lives in the `api` layer.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

use crate::errors::AuthError;

/// Token lifetime: 24 hours from issuance.
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Claims embedded in an admin token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminClaims {
    pub admin: bool,
    /// Issuance time, unix seconds.
    pub iat: i64,
    /// Expiry, unix seconds. Checked with zero leeway so the 24-hour
    /// boundary is exact.
    pub exp: i64,
}

/// Compute the hex digest stored in `ADMIN_PASSWORD_HASH`.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare a candidate password against the stored hex digest.
///
/// The digest comparison is constant-time. A malformed stored hash is
/// reported the same way as a mismatch so the response never hints at
/// server-side state.
pub fn verify_password(candidate: &str, stored_hash_hex: &str) -> bool {
    let digest = Sha256::digest(candidate.as_bytes());
    match hex::decode(stored_hash_hex.trim()) {
        Ok(stored) => digest.as_slice().ct_eq(&stored).into(),
        Err(_) => false,
    }
}

/// Mint an admin token issued at `issued_at`, expiring 24 hours later.
pub fn mint_token(secret: &str, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
    let iat = issued_at.timestamp();
    let claims = AdminClaims {
        admin: true,
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };
    jsonwebtoken::encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(e.to_string()))
}

/// Verify signature and expiry, distinguishing expired from invalid so the
/// client can decide between re-login and hard failure.
pub fn verify_token(secret: &str, token: &str) -> Result<AdminClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    match jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(data) if data.claims.admin => Ok(data.claims),
        Ok(_) => Err(AuthError::TokenInvalid),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(AuthError::TokenExpired),
            _ => Err(AuthError::TokenInvalid),
        },
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header value.
/// Missing or malformed scheme short-circuits before any signature work.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    header
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingToken)
}
