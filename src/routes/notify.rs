//! `POST /notify`: checkout order notifications.
//!
//! The body is read leniently: anything that is not a JSON object becomes an
//! empty notice, and missing fields take their defaults, so the page always
//! gets a JSON answer.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use cart::CheckoutNotice;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NotifyResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl NotifyResponse {
    fn ok() -> Self {
        Self {
            status: "ok",
            detail: None,
        }
    }

    fn error(detail: String) -> Self {
        Self {
            status: "error",
            detail: Some(detail),
        }
    }
}

pub(crate) fn parse_notice(body: &[u8]) -> CheckoutNotice {
    serde_json::from_slice(body).unwrap_or_else(|e| {
        if !body.is_empty() {
            tracing::debug!(error = %e, "notify body unreadable; using defaults");
        }
        CheckoutNotice::default()
    })
}

pub async fn notify(
    State(state): State<AppState>,
    body: Bytes,
) -> (StatusCode, Json<NotifyResponse>) {
    let notice = parse_notice(&body);
    let recipient = state.config.target.as_str();
    tracing::info!(
        customer = notice.customer(),
        total = %notice.total_price(),
        %recipient,
        "order received"
    );

    let message = notice.message();
    let _guard = state.send_lock.lock().await;
    match state.notifier.send(recipient, &message).await {
        Ok(()) => {
            tracing::info!(customer = notice.customer(), "order notification sent");
            (StatusCode::OK, Json(NotifyResponse::ok()))
        }
        Err(e) => {
            tracing::error!(error = %e, "order notification failed");
            let body = NotifyResponse::error(e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
        }
    }
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
