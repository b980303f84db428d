#![recursion_limit = "256"]

mod config;
mod notifier;
mod routes;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let dotenv = dotenvy::dotenv();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    let config = config::NotifyConfig::from_env()
        .expect("invalid configuration");
    let notifier = notifier::from_config(&config)
        .expect("notifier init failed");
    let addr = config.bind_addr();
    tracing::info!(recipient = %config.target, "order notifications enabled");

    let state = state::AppState::new(config, notifier);

    // Storefront rendering is optional: without Leptos config only the API runs.
    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "storefront disabled; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    tracing::info!(%addr, "cyberduck listening");
    axum::serve(listener, app).await.expect("server failed");
}
