use recognize_client::application::config::{
    Config, Credentials, RateLimiterConfig, RestApiConfig,
};
use recognize_client::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use std::env;

#[test]
fn test_rest_api_defaults() {
    let rest = RestApiConfig::default();
    assert_eq!(rest.base_url, DEFAULT_BASE_URL);
    assert_eq!(rest.timeout, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_rate_limiter_defaults() {
    let limits = RateLimiterConfig::default();
    assert_eq!(limits.max_requests, 60);
    assert_eq!(limits.period_seconds, 60);
    assert_eq!(limits.burst_size, 10);
}

#[test]
fn test_with_credentials_and_base_url() {
    let config = Config::with_credentials(Credentials::new("64", "key", "clapi"))
        .base_url("http://localhost:1234");
    assert_eq!(config.credentials.client_id, "64");
    assert_eq!(config.credentials.api_key, "key");
    assert_eq!(config.credentials.clapi_key, "clapi");
    assert_eq!(config.rest_api.base_url, "http://localhost:1234");
}

#[test]
fn test_config_from_environment() {
    unsafe {
        env::set_var("RECOGNIZE_CLIENT_ID", "77");
        env::set_var("RECOGNIZE_API_KEY", "abc");
        env::set_var("RECOGNIZE_CLAPI_KEY", "def");
        env::set_var("RECOGNIZE_TIMEOUT", "5");
        env::set_var("RECOGNIZE_RATE_LIMIT_BURST_SIZE", "3");
    }

    let config = Config::new();
    assert_eq!(config.credentials, Credentials::new("77", "abc", "def"));
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.rate_limiter.burst_size, 3);

    unsafe {
        env::remove_var("RECOGNIZE_CLIENT_ID");
        env::remove_var("RECOGNIZE_API_KEY");
        env::remove_var("RECOGNIZE_CLAPI_KEY");
        env::remove_var("RECOGNIZE_TIMEOUT");
        env::remove_var("RECOGNIZE_RATE_LIMIT_BURST_SIZE");
    }
}

#[test]
fn test_credentials_display_is_json() {
    let credentials = Credentials::new("1", "a", "b");
    let shown = credentials.to_string();
    assert!(shown.contains("\"client_id\":\"1\""));
}
