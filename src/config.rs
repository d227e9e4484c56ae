use std::path::PathBuf;

/// Runtime configuration for the portfolio backend.
///
/// All values come from the environment (a `.env` file is loaded by the
/// binary before this is constructed). The struct is built once at startup
/// and passed into `AppState` by value — nothing reads the environment
/// after this point, so components can be handed a synthetic `Config` in
/// tests.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind, `HOST` (default `0.0.0.0`).
    pub host: String,
    /// Listen port, `PORT` (default 5000).
    pub port: u16,
    /// SQLite database file, `DATABASE_PATH` (default `portfolio.db`).
    pub database_path: PathBuf,
    /// SHA-256 hex digest of the admin password, `ADMIN_PASSWORD_HASH`.
    /// Login reports a configuration error while unset.
    pub admin_password_hash: Option<String>,
    /// Token-signing secret, `JWT_SECRET`. Rotating it invalidates every
    /// outstanding token.
    pub jwt_secret: Option<String>,
    /// Allowed CORS origins, `FRONTEND_ORIGIN` (comma-separated). Empty
    /// means permissive, for local development against any dev server.
    pub allowed_origins: Vec<String>,
    pub mail: MailConfig,
    /// `FOLIO_DEV` — include error detail in responses that would
    /// otherwise carry only a generic message.
    pub dev_mode: bool,
}

/// Outbound mail settings for the contact relay.
///
/// The relay is an HTTP mail provider; all three of `api_url`, `api_key`
/// and `from` must be set for real delivery. Anything less selects the
/// logging no-op transport.
#[derive(Debug, Clone, Default)]
pub struct MailConfig {
    /// Provider endpoint, `MAIL_API_URL`.
    pub api_url: Option<String>,
    /// Bearer key for the provider, `MAIL_API_KEY`.
    pub api_key: Option<String>,
    /// Sender address, `MAIL_FROM`.
    pub from: Option<String>,
    /// Recipient for contact submissions, `CONTACT_EMAIL`. Falls back to
    /// the sender address when unset.
    pub contact_email: Option<String>,
}

impl MailConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env_opt("MAIL_API_URL"),
            api_key: env_opt("MAIL_API_KEY"),
            from: env_opt("MAIL_FROM"),
            contact_email: env_opt("CONTACT_EMAIL"),
        }
    }

    /// True when every value needed for real delivery is present.
    pub fn is_configured(&self) -> bool {
        self.api_url.is_some() && self.api_key.is_some() && self.from.is_some()
    }
}

impl Config {
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(5000);

        let allowed_origins = std::env::var("FRONTEND_ORIGIN")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port,
            database_path: std::env::var("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("portfolio.db")),
            admin_password_hash: env_opt("ADMIN_PASSWORD_HASH"),
            jwt_secret: env_opt("JWT_SECRET"),
            allowed_origins,
            mail: MailConfig::from_env(),
            dev_mode: matches!(
                std::env::var("FOLIO_DEV").as_deref(),
                Ok("1") | Ok("true")
            ),
        }
    }
}

/// Read an env var, treating unset and blank the same way.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_requires_all_three() {
        let mut mail = MailConfig::default();
        assert!(!mail.is_configured());

        mail.api_url = Some("https://mail.example.com/send".into());
        mail.api_key = Some("key".into());
        assert!(!mail.is_configured());

        mail.from = Some("site@example.com".into());
        assert!(mail.is_configured());
    }
}
