use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::config::NotifyConfig;
use crate::notifier::{Notifier, NotifyError};

#[derive(Default)]
struct RecordingNotifier {
    sent: Mutex<Vec<(String, String)>>,
}

#[async_trait::async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, target: &str, message: &str) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .unwrap()
            .push((target.to_owned(), message.to_owned()));
        Ok(())
    }
}

struct FailingNotifier;

#[async_trait::async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _target: &str, _message: &str) -> Result<(), NotifyError> {
        Err(NotifyError::Request("gateway down".into()))
    }
}

fn test_config() -> NotifyConfig {
    NotifyConfig {
        host: "127.0.0.1".into(),
        port: 5001,
        target: "+573001234567".into(),
        webhook_url: None,
        timeout: Duration::from_secs(1),
    }
}

fn state_with(notifier: Arc<dyn Notifier>) -> AppState {
    AppState::new(test_config(), notifier)
}

#[tokio::test]
async fn notify_sends_formatted_message_to_target() {
    let recorder = Arc::new(RecordingNotifier::default());
    let body = r#"{"name":"Ana","email":"ana@example.com","phone":"3001234567","total":115000,
        "items":[{"name":"Buzo Cyberduck","price":"85.000"},
                 {"name":"Gorra Pato","price":"30.000"}]}"#;

    let state = state_with(recorder.clone());
    let (status, Json(resp)) = notify(State(state), Bytes::from(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(resp, NotifyResponse::ok());
    let sent = recorder.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "+573001234567");
    assert_eq!(
        sent[0].1,
        "Nuevo pedido en Cyberduck\nNombre: Ana\nCorreo: ana@example.com\nCelular: 3001234567\n\
         Total: $115.000\nProductos:\n- Buzo Cyberduck — 85.000\n- Gorra Pato — 30.000"
    );
}

#[tokio::test]
async fn notify_accepts_missing_body() {
    let recorder = Arc::new(RecordingNotifier::default());

    let state = state_with(recorder.clone());
    let (status, _) = notify(State(state), Bytes::new()).await;

    assert_eq!(status, StatusCode::OK);
    let sent = recorder.sent.lock().unwrap();
    let header = "Nuevo pedido en Cyberduck\nNombre: Cliente\n";
    assert!(sent[0].1.starts_with(header));
    assert!(sent[0].1.ends_with("Total: $0\nProductos:"));
}

#[tokio::test]
async fn notify_reports_delivery_failure() {
    let state = state_with(Arc::new(FailingNotifier));
    let body = Bytes::from(r#"{"name":"Ana"}"#);
    let (status, Json(resp)) = notify(State(state), body).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.status, "error");
    assert_eq!(
        resp.detail.as_deref(),
        Some("webhook request failed: gateway down")
    );
}

#[test]
fn parse_notice_falls_back_to_defaults() {
    assert_eq!(parse_notice(b"not json"), CheckoutNotice::default());
    assert_eq!(parse_notice(b"[1,2]"), CheckoutNotice::default());
}

#[test]
fn parse_notice_reads_string_total() {
    let notice = parse_notice(br#"{"total":"115.000"}"#);
    assert_eq!(notice.total_price(), cart::Price::from_pesos(115_000));
}

#[test]
fn response_omits_detail_on_success() {
    let json = serde_json::to_string(&NotifyResponse::ok()).unwrap();
    assert_eq!(json, r#"{"status":"ok"}"#);
}

#[tokio::test]
async fn notify_keeps_order_when_items_is_null() {
    let recorder = Arc::new(RecordingNotifier::default());
    let body = r#"{"name":"Ana","phone":"300","total":5000,"items":null}"#;

    let state = state_with(recorder.clone());
    let (status, _) = notify(State(state), Bytes::from(body)).await;

    assert_eq!(status, StatusCode::OK);
    let sent = recorder.sent.lock().unwrap();
    assert!(sent[0].1.contains("Nombre: Ana\n"));
    assert!(sent[0].1.ends_with("Total: $5.000\nProductos:"));
}
