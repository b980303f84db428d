use std::collections::HashMap;

use super::*;

fn config_from(vars: &[(&str, &str)]) -> Result<NotifyConfig, ConfigError> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    NotifyConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.target, DEFAULT_TARGET);
    assert_eq!(cfg.webhook_url, None);
    assert_eq!(
        cfg.timeout,
        Duration::from_secs(DEFAULT_NOTIFY_TIMEOUT_SECS)
    );
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:5001");
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("HOST", "0.0.0.0"),
        ("PORT", "8080"),
        ("WHATS_TARGET", "+573001234567"),
        ("NOTIFY_WEBHOOK_URL", "https://hooks.example.test/whatsapp"),
        ("NOTIFY_TIMEOUT_SECS", "3"),
    ])
    .unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "0.0.0.0:8080");
    assert_eq!(cfg.target, "+573001234567");
    assert_eq!(
        cfg.webhook_url.as_deref(),
        Some("https://hooks.example.test/whatsapp")
    );
    assert_eq!(cfg.timeout, Duration::from_secs(3));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let vars = [("PORT", "  "), ("NOTIFY_WEBHOOK_URL", "")];
    let cfg = config_from(&vars).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.webhook_url, None);
}

#[test]
fn invalid_port_is_rejected() {
    assert_eq!(
        config_from(&[("PORT", "web")]),
        Err(ConfigError::Invalid {
            var: "PORT",
            value: "web".to_owned(),
        })
    );
}

#[test]
fn invalid_timeout_is_rejected() {
    assert!(matches!(
        config_from(&[("NOTIFY_TIMEOUT_SECS", "-1")]),
        Err(ConfigError::Invalid { var: "NOTIFY_TIMEOUT_SECS", .. })
    ));
}

#[test]
fn non_ip_host_binds_localhost() {
    let cfg = config_from(&[("HOST", "localhost")]).unwrap();
    assert_eq!(cfg.bind_addr().to_string(), "127.0.0.1:5001");
}
