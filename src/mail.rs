//! Outbound mail transport for the contact relay.
//!
//! The relay is best-effort by design: one attempt per submission, the
//! outcome reported verbatim, no queue or retry. The transport is
//! selected fresh for every send, so changing the mail configuration
//! takes effect without touching in-flight state.
//!
//! Two transports exist: an HTTP mail provider (JSON POST with a bearer
//! key) and a logging no-op used whenever the provider is not fully
//! configured — an unconfigured deployment still accepts contact
//! submissions, it just records them in the server log.

use serde::Serialize;
use tracing::{info, warn};

use crate::config::MailConfig;
use crate::errors::MailError;

/// A validated contact-form submission.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Request body sent to the HTTP mail provider.
#[derive(Debug, Serialize)]
struct OutboundMail<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: String,
    text: String,
}

pub enum Mailer {
    Http(HttpMailer),
    /// No provider configured; submissions are logged and reported as sent.
    Disabled,
}

pub struct HttpMailer {
    api_url: String,
    api_key: String,
    from: String,
    to: String,
}

impl Mailer {
    /// Select the transport for one submission.
    pub fn from_config(config: &MailConfig) -> Self {
        match (&config.api_url, &config.api_key, &config.from) {
            (Some(api_url), Some(api_key), Some(from)) => Self::Http(HttpMailer {
                api_url: api_url.clone(),
                api_key: api_key.clone(),
                from: from.clone(),
                to: config.contact_email.clone().unwrap_or_else(|| from.clone()),
            }),
            _ => Self::Disabled,
        }
    }

    pub async fn send(&self, msg: &ContactMessage) -> Result<(), MailError> {
        match self {
            Self::Disabled => {
                info!(
                    name = %msg.name,
                    email = %msg.email,
                    "mail transport not configured; contact submission logged only"
                );
                Ok(())
            }
            Self::Http(mailer) => mailer.send(msg).await,
        }
    }
}

impl HttpMailer {
    async fn send(&self, msg: &ContactMessage) -> Result<(), MailError> {
        let body = OutboundMail {
            from: &self.from,
            to: &self.to,
            reply_to: &msg.email,
            subject: format!("Portfolio Contact: {}", msg.name),
            text: format!(
                "New contact form submission\n\nName: {}\nEmail: {}\n\nMessage:\n{}",
                msg.name, msg.email, msg.message
            ),
        };

        // Bounded wait: a stalled provider should fail the submission,
        // not hold the request open.
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;
        let response = client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "mail provider rejected submission");
            return Err(MailError::Provider {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(())
    }
}

/// Log the transport status once at startup so a missing configuration is
/// visible before the first submission fails silently into the log.
pub fn log_transport_status(config: &MailConfig) {
    if config.is_configured() {
        info!(
            from = config.from.as_deref().unwrap_or_default(),
            "mail transport configured"
        );
    } else {
        warn!(
            "mail transport NOT configured; contact submissions will be logged only. \
             Set MAIL_API_URL, MAIL_API_KEY and MAIL_FROM to enable delivery."
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello there".into(),
        }
    }

    #[tokio::test]
    async fn test_unconfigured_transport_reports_success() {
        let mailer = Mailer::from_config(&MailConfig::default());
        assert!(matches!(mailer, Mailer::Disabled));
        assert!(mailer.send(&message()).await.is_ok());
    }

    #[test]
    fn test_partial_config_selects_noop() {
        let config = MailConfig {
            api_url: Some("https://mail.example.com/send".into()),
            api_key: None,
            from: Some("site@example.com".into()),
            contact_email: None,
        };
        assert!(matches!(Mailer::from_config(&config), Mailer::Disabled));
    }

    #[test]
    fn test_recipient_falls_back_to_sender() {
        let config = MailConfig {
            api_url: Some("https://mail.example.com/send".into()),
            api_key: Some("key".into()),
            from: Some("site@example.com".into()),
            contact_email: None,
        };
        match Mailer::from_config(&config) {
            Mailer::Http(m) => assert_eq!(m.to, "site@example.com"),
            Mailer::Disabled => panic!("expected http transport"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_an_error() {
        let config = MailConfig {
            // Reserved TEST-NET-1 address; connections fail fast.
            api_url: Some("http://192.0.2.1:9/send".into()),
            api_key: Some("key".into()),
            from: Some("site@example.com".into()),
            contact_email: Some("owner@example.com".into()),
        };
        let mailer = Mailer::from_config(&config);
        assert!(mailer.send(&message()).await.is_err());
    }
}
