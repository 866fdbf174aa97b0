use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults() {
    let cfg = Config::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(
        cfg,
        Config {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("PORT", " 8000 "),
        ("API_BASE_URL", "https://api.example.test/v1/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.api_base_url, "https://api.example.test/v1");
    assert_eq!(cfg.proxy_timeout_secs, 5);
}

#[test]
fn from_lookup_rejects_bad_port() {
    assert_eq!(
        Config::from_lookup(lookup_from(&[("PORT", "http")])),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    assert_eq!(
        Config::from_lookup(lookup_from(&[("API_BASE_URL", "localhost:8080")])),
        Err(ConfigError::InvalidApiBaseUrl("localhost:8080".to_owned()))
    );
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    assert_eq!(
        Config::from_lookup(lookup_from(&[("PROXY_TIMEOUT_SECS", "0")])),
        Err(ConfigError::InvalidTimeout("0".to_owned()))
    );
}

