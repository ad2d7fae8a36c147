use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.storage_namespace, DEFAULT_STORAGE_NAMESPACE);
    assert_eq!(cfg.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_API_BASE_URL", "https://api.example.test/")]))
        .unwrap();
    assert_eq!(cfg.api_base_url, "https://api.example.test");
}

#[test]
fn from_lookup_rejects_url_without_scheme() {
    let err = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_API_BASE_URL", "localhost:3000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidBaseUrl("localhost:3000".to_owned()));
}

#[test]
fn from_lookup_rejects_url_without_host() {
    let err = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_API_BASE_URL", "http://")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
}

#[test]
fn from_lookup_rejects_blank_namespace() {
    let err = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_STORAGE_NAMESPACE", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::EmptyNamespace);
}

#[test]
fn from_lookup_parses_toast_duration() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_TOAST_MS", "1200")])).unwrap();
    assert_eq!(cfg.toast_duration_ms, 1200);
}

#[test]
fn from_lookup_ignores_garbage_toast_duration() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("AUTHDASH_TOAST_MS", "soon")])).unwrap();
    assert_eq!(cfg.toast_duration_ms, DEFAULT_TOAST_DURATION_MS);
}

#[test]
fn from_build_env_without_overrides_is_valid() {
    let cfg = AppConfig::from_build_env();
    assert!(cfg.api_base_url.starts_with("http"));
    assert!(!cfg.storage_namespace.is_empty());
}
