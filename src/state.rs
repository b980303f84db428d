//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! send lock serializes deliveries so two checkouts never interleave on the
//! gateway.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::NotifyConfig;
use crate::notifier::Notifier;

/// Shared application state. Clone is required by Axum; every field is
/// Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<NotifyConfig>,
    pub notifier: Arc<dyn Notifier>,
    pub send_lock: Arc<Mutex<()>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: NotifyConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            config: Arc::new(config),
            notifier,
            send_lock: Arc::new(Mutex::new(())),
        }
    }
}
