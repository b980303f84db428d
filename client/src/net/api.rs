//! HTTP calls to the storefront server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since checkout only happens
//! in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Err(String)` for the checkout page to display; the
//! cart is left untouched so the customer can retry.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use cart::CheckoutNotice;

/// Notification endpoint used unless `CYBERDUCK_NOTIFY_URL` was set at build
/// time.
pub const DEFAULT_NOTIFY_URL: &str = "/notify";

pub fn notify_url() -> &'static str {
    option_env!("CYBERDUCK_NOTIFY_URL").unwrap_or(DEFAULT_NOTIFY_URL)
}

#[cfg(any(test, feature = "hydrate"))]
fn notify_failed_message(status: u16) -> String {
    format!("notify failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn rejected_message(detail: Option<&str>) -> String {
    match detail {
        Some(detail) if !detail.is_empty() => format!("notify rejected: {detail}"),
        _ => "notify rejected".to_owned(),
    }
}

/// Post `notice` to the checkout notification endpoint.
///
/// # Errors
///
/// Returns an error string if the request fails, the server responds with a
/// non-OK status, or the body does not report `"status": "ok"`.
pub async fn notify_checkout(notice: &CheckoutNotice) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct NotifyResponse {
            status: String,
            detail: Option<String>,
        }

        let resp = gloo_net::http::Request::post(notify_url())
            .json(notice)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(notify_failed_message(resp.status()));
        }
        let body: NotifyResponse = resp.json().await.map_err(|e| e.to_string())?;
        if body.status != "ok" {
            return Err(rejected_message(body.detail.as_deref()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notice;
        Err("not available on server".to_owned())
    }
}
