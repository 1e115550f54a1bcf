use fiskaly_client::application::config::{Config, Credentials, RestApiConfig};
use fiskaly_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MANAGEMENT_BASE_URL};
use std::time::Duration;

#[test]
fn test_with_credentials_uses_default_endpoints() {
    let config = Config::with_credentials("key", "secret");

    assert_eq!(config.credentials, Credentials::new("key", "secret"));
    assert_eq!(config.rest_api, RestApiConfig::default());
    assert_eq!(config.rest_api.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.rest_api.management_base_url, MANAGEMENT_BASE_URL);
    assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    assert!(config.rest_api.verify_tls);
    assert!(config.management_credentials.is_none());
    assert!(config.organization_id.is_none());
}

#[test]
fn test_builders_override_defaults() {
    let config = Config::with_credentials("key", "secret")
        .with_base_url("http://localhost:1234/api/v1")
        .with_management_base_url("http://localhost:1234/api/v0")
        .with_timeout(5)
        .with_verify_tls(false)
        .with_management_credentials("mkey", "msecret")
        .with_organization_id("org-1");

    assert_eq!(config.rest_api.base_url, "http://localhost:1234/api/v1");
    assert_eq!(
        config.rest_api.management_base_url,
        "http://localhost:1234/api/v0"
    );
    assert_eq!(config.timeout(), Duration::from_secs(5));
    assert!(!config.rest_api.verify_tls);
    assert_eq!(
        config.management_credentials,
        Some(Credentials::new("mkey", "msecret"))
    );
    assert_eq!(config.organization_id.as_deref(), Some("org-1"));
}

#[test]
fn test_credentials_debug_hides_secret() {
    let credentials = Credentials::new("public-key", "very-secret");
    let debug = format!("{credentials:?}");
    assert!(debug.contains("public-key"));
    assert!(!debug.contains("very-secret"));

    let config = Config::with_credentials("public-key", "very-secret");
    assert!(!format!("{config:?}").contains("very-secret"));
}

#[test]
fn test_rest_api_config_display_is_json() {
    let display = RestApiConfig::default().to_string();
    let value: serde_json::Value = serde_json::from_str(&display).unwrap();
    assert_eq!(value["timeout"], DEFAULT_TIMEOUT_SECS);
    assert_eq!(value["verify_tls"], true);
}
