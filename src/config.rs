//! Server configuration parsed from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5001;
/// Placeholder destination used when `WHATS_TARGET` is unset.
pub const DEFAULT_TARGET: &str = "+570000000000";
pub const DEFAULT_NOTIFY_TIMEOUT_SECS: u64 = 15;

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub host: String,
    pub port: u16,
    /// Phone number, in international format, that receives order messages.
    pub target: String,
    /// Webhook that relays messages; log-only delivery when absent.
    pub webhook_url: Option<String>,
    pub timeout: Duration,
}

impl NotifyConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `HOST`: default `127.0.0.1`
    /// - `PORT`: default 5001
    /// - `WHATS_TARGET`: default placeholder number
    /// - `NOTIFY_WEBHOOK_URL`: unset means messages are only logged
    /// - `NOTIFY_TIMEOUT_SECS`: default 15
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when `PORT` or `NOTIFY_TIMEOUT_SECS`
    /// is set but not a number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`NotifyConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_owned())
                .filter(|v| !v.is_empty())
        };

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
        let target = get("WHATS_TARGET")
            .unwrap_or_else(|| DEFAULT_TARGET.to_owned());
        let webhook_url = get("NOTIFY_WEBHOOK_URL");
        let timeout_secs = parse_or(
            "NOTIFY_TIMEOUT_SECS",
            get("NOTIFY_TIMEOUT_SECS"),
            DEFAULT_NOTIFY_TIMEOUT_SECS,
        )?;

        Ok(Self {
            host,
            port,
            target,
            webhook_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Socket address to bind, falling back to the default host when `HOST`
    /// is not an IP literal.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        let ip = self.host.parse().unwrap_or_else(|_| {
            tracing::warn!(host = %self.host, "HOST is not an IP address; using {DEFAULT_HOST}");
            std::net::Ipv4Addr::LOCALHOST.into()
        });
        SocketAddr::new(ip, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    var: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
