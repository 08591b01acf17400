use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use crate::utils::config::{get_credential, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
/// Credentials for the recognize.im API, available at http://www.recognize.im/user/profile
pub struct Credentials {
    /// Numeric client identifier
    pub client_id: String,
    /// Key used to sign recognition requests
    pub api_key: String,
    /// Key used to open SOAP sessions
    pub clapi_key: String,
}

impl Credentials {
    /// Creates credentials from their three parts
    pub fn new(
        client_id: impl Into<String>,
        api_key: impl Into<String>,
        clapi_key: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            api_key: api_key.into(),
            clapi_key: clapi_key.into(),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the recognize.im client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// Endpoint configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the HTTP endpoints
pub struct RestApiConfig {
    /// Base URL shared by the SOAP and recognition endpoints
    pub base_url: String,
    /// Timeout in seconds for requests
    pub timeout: u64,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: 60,
            period_seconds: 60,
            burst_size: 10,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// | variable | default |
    /// |----------|---------|
    /// | `RECOGNIZE_CLIENT_ID` | – |
    /// | `RECOGNIZE_API_KEY` | – |
    /// | `RECOGNIZE_CLAPI_KEY` | – |
    /// | `RECOGNIZE_BASE_URL` | `http://clapi.itraff.pl` |
    /// | `RECOGNIZE_TIMEOUT` | `30` |
    /// | `RECOGNIZE_RATE_LIMIT_MAX_REQUESTS` | `60` |
    /// | `RECOGNIZE_RATE_LIMIT_PERIOD_SECONDS` | `60` |
    /// | `RECOGNIZE_RATE_LIMIT_BURST_SIZE` | `10` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let limits = RateLimiterConfig::default();

        Config {
            credentials: Credentials {
                client_id: get_credential("RECOGNIZE_CLIENT_ID"),
                api_key: get_credential("RECOGNIZE_API_KEY"),
                clapi_key: get_credential("RECOGNIZE_CLAPI_KEY"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("RECOGNIZE_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("RECOGNIZE_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "RECOGNIZE_RATE_LIMIT_MAX_REQUESTS",
                    limits.max_requests,
                ),
                period_seconds: get_env_or_default(
                    "RECOGNIZE_RATE_LIMIT_PERIOD_SECONDS",
                    limits.period_seconds,
                ),
                burst_size: get_env_or_default("RECOGNIZE_RATE_LIMIT_BURST_SIZE", limits.burst_size),
            },
        }
    }

    /// Configuration with explicit credentials and default endpoints
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
            rate_limiter: RateLimiterConfig::default(),
        }
    }

    /// Replaces the base URL, e.g. to target a staging host
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
