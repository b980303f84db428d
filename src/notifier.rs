//! Order notification delivery.
//!
//! DESIGN
//! ======
//! Handlers only see the [`Notifier`] trait. Production uses
//! [`WebhookNotifier`], which relays the message to a messaging gateway over
//! HTTP; without a configured webhook the server falls back to
//! [`LogNotifier`] so orders still show up in the logs.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::config::NotifyConfig;

const CONNECT_TIMEOUT_SECS: u64 = 5;
/// Longest gateway reply kept in a [`NotifyError::Rejected`].
pub const BODY_EXCERPT_CHARS: usize = 200;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors produced while delivering a notification.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The HTTP request to the gateway failed.
    #[error("webhook request failed: {0}")]
    Request(String),

    /// The gateway answered with a non-success status. `body` holds at most
    /// [`BODY_EXCERPT_CHARS`] characters of its reply.
    #[error("webhook responded with status {status}{}", body_suffix(.body))]
    Rejected { status: u16, body: String },

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

// =============================================================================
// NOTIFIER TRAIT
// =============================================================================

/// Delivers a plain-text message to a phone number. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    /// Send `message` to `target`.
    ///
    /// # Errors
    ///
    /// Returns a [`NotifyError`] if the message could not be delivered.
    async fn send(&self, target: &str, message: &str) -> Result<(), NotifyError>;
}

/// Pick the notifier for `config`.
///
/// # Errors
///
/// Returns [`NotifyError::ClientBuild`] if the webhook HTTP client cannot be
/// constructed.
pub fn from_config(config: &NotifyConfig) -> Result<Arc<dyn Notifier>, NotifyError> {
    match &config.webhook_url {
        Some(url) => Ok(Arc::new(WebhookNotifier::new(url.clone(), config.timeout)?)),
        None => {
            tracing::warn!("NOTIFY_WEBHOOK_URL not set; order notifications are only logged");
            Ok(Arc::new(LogNotifier))
        }
    }
}

// =============================================================================
// LOG NOTIFIER
// =============================================================================

/// Writes messages to the log instead of sending them.
pub struct LogNotifier;

#[async_trait::async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, target: &str, message: &str) -> Result<(), NotifyError> {
        tracing::info!(recipient = %target, "order notification (log only):\n{message}");
        Ok(())
    }
}

// =============================================================================
// WEBHOOK NOTIFIER
// =============================================================================

/// Posts `{"to": ..., "message": ...}` to a messaging gateway.
pub struct WebhookNotifier {
    http: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct WebhookBody<'a> {
    to: &'a str,
    message: &'a str,
}

impl WebhookNotifier {
    /// # Errors
    ///
    /// Returns [`NotifyError::ClientBuild`] if the HTTP client fails to build.
    pub fn new(url: String, timeout: Duration) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS).min(timeout))
            .build()
            .map_err(|e| NotifyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, url })
    }
}

#[async_trait::async_trait]
impl Notifier for WebhookNotifier {
    async fn send(&self, target: &str, message: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(&self.url)
            .json(&WebhookBody {
                to: target,
                message,
            })
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Rejected {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }
        Ok(())
    }
}

fn excerpt(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(BODY_EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_owned(),
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(": {body}")
    }
}

#[cfg(test)]
#[path = "notifier_test.rs"]
mod tests;
