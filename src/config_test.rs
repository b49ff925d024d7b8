use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_yields_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/v2/"),
        ("PROXY_TIMEOUT_SECS", "5"),
        ("MAX_UPLOAD_BYTES", "1024"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url, "https://api.example.test/v2");
    assert_eq!(cfg.proxy_timeout_secs, 5);
    assert_eq!(cfg.max_upload_bytes, 1024);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".into() });
}

#[test]
fn port_out_of_range_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn blank_backend_url_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BACKEND_URL", "   ")])).unwrap();
    assert_eq!(cfg.backend_url, DEFAULT_BACKEND_URL);
}

#[test]
fn backend_url_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BACKEND_URL", "localhost:5000/api")])).unwrap_err();
    assert_eq!(err, ConfigError::BackendScheme("localhost:5000/api".into()));
}

// =============================================================================
// from_env — uses the real process environment; only reads unset defaults.
// =============================================================================

#[test]
fn from_env_succeeds_when_nothing_is_overridden() {
    if std::env::var("PORT").is_ok() || std::env::var("BACKEND_URL").is_ok() {
        return;
    }
    assert!(ServerConfig::from_env().is_ok());
}
