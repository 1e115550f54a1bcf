use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS, MANAGEMENT_BASE_URL};
use crate::utils::config::{get_env_credentials, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::{debug, error};

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
/// A key/secret pair issued by fiskaly
pub struct Credentials {
    /// API key
    pub api_key: String,
    /// API secret
    pub api_secret: String,
}

impl Credentials {
    /// Creates a new credential pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Configuration for the REST endpoints
pub struct RestApiConfig {
    /// Base URL of the signing/invoicing API
    pub base_url: String,
    /// Base URL of the management (dashboard) API
    pub management_base_url: String,
    /// Timeout in seconds for every request
    pub timeout: u64,
    /// Whether TLS certificates are verified
    pub verify_tls: bool,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            management_base_url: MANAGEMENT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            verify_tls: true,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
/// Main configuration for the fiskaly client
///
/// Read-only once the client is built. Values that change at runtime
/// (tokens, organization id, rotated keys) live in the session.
pub struct Config {
    /// Credentials for the signing API
    pub credentials: Credentials,
    /// Credentials for the management API
    pub management_credentials: Option<Credentials>,
    /// Organization the management calls act on, if known up front
    pub organization_id: Option<String>,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment
    ///
    /// Loads a `.env` file when present and reads:
    /// `FISKALY_API_KEY`, `FISKALY_API_SECRET`, `FISKALY_BASE_URL`,
    /// `FISKALY_MANAGEMENT_BASE_URL`, `FISKALY_TIMEOUT`, `FISKALY_VERIFY_TLS`,
    /// `FISKALY_MANAGEMENT_API_KEY`, `FISKALY_MANAGEMENT_API_SECRET` and
    /// `FISKALY_ORGANIZATION_ID`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("FISKALY_API_KEY", String::from("default_api_key"));
        let api_secret =
            get_env_or_default("FISKALY_API_SECRET", String::from("default_api_secret"));

        if api_key == "default_api_key" {
            error!("FISKALY_API_KEY not found in environment variables or .env file");
        }
        if api_secret == "default_api_secret" {
            error!("FISKALY_API_SECRET not found in environment variables or .env file");
        }

        let management_credentials = get_env_credentials(
            "FISKALY_MANAGEMENT_API_KEY",
            "FISKALY_MANAGEMENT_API_SECRET",
        );

        Config {
            credentials: Credentials::new(api_key, api_secret),
            management_credentials,
            organization_id: get_env_or_none("FISKALY_ORGANIZATION_ID"),
            rest_api: RestApiConfig {
                base_url: get_env_or_default("FISKALY_BASE_URL", DEFAULT_BASE_URL.to_string()),
                management_base_url: get_env_or_default(
                    "FISKALY_MANAGEMENT_BASE_URL",
                    MANAGEMENT_BASE_URL.to_string(),
                ),
                timeout: get_env_or_default("FISKALY_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                verify_tls: get_env_or_default("FISKALY_VERIFY_TLS", true),
            },
        }
    }

    /// Creates a configuration with explicit credentials and default endpoints
    pub fn with_credentials(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Config {
            credentials: Credentials::new(api_key, api_secret),
            management_credentials: None,
            organization_id: None,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Sets the signing API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }

    /// Sets the management API base URL
    #[must_use]
    pub fn with_management_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.management_base_url = base_url.into();
        self
    }

    /// Sets the request timeout in seconds
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.rest_api.timeout = seconds;
        self
    }

    /// Enables or disables TLS certificate verification
    #[must_use]
    pub fn with_verify_tls(mut self, verify: bool) -> Self {
        self.rest_api.verify_tls = verify;
        self
    }

    /// Sets the management API credentials
    #[must_use]
    pub fn with_management_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.management_credentials = Some(Credentials::new(api_key, api_secret));
        self
    }

    /// Sets the organization id used by management calls
    #[must_use]
    pub fn with_organization_id(mut self, organization_id: impl Into<String>) -> Self {
        self.organization_id = Some(organization_id.into());
        self
    }

    /// Request timeout as a [`Duration`]
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.rest_api.timeout)
    }
}
