//! Native `window.alert` wrapper; logs instead when rendering on the server.

pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        log::info!("alert suppressed outside the browser: {message}");
    }
}
