//! Client configuration.
//!
//! Provides configuration options for the broker client.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

use super::error::ClientError;

/// Default `X-Broker-API-Version` header value.
pub const DEFAULT_API_VERSION: &str = "2.10";

/// Environment variable holding the broker base URL.
pub const ENV_BROKER_URL: &str = "OSBAPI_BROKER_URL";

/// Environment variable holding the basic-auth username.
pub const ENV_USERNAME: &str = "OSBAPI_USERNAME";

/// Environment variable holding the basic-auth password.
pub const ENV_PASSWORD: &str = "OSBAPI_PASSWORD";

/// Environment variable holding the API version.
pub const ENV_API_VERSION: &str = "OSBAPI_API_VERSION";

/// Client configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the broker, e.g. `http://127.0.0.1:3000`.
    pub base_url: String,

    /// Basic-auth username.
    #[serde(default)]
    pub username: String,

    /// Basic-auth password.
    #[serde(default)]
    pub password: String,

    /// Value sent in the `X-Broker-API-Version` header.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_user_agent() -> String {
    format!("osbapi-sdk/{}", env!("CARGO_PKG_VERSION"))
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    ///
    /// Credentials default to empty and the API version to
    /// [`DEFAULT_API_VERSION`].
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            username: String::new(),
            password: String::new(),
            api_version: default_api_version(),
            user_agent: default_user_agent(),
        }
    }

    /// Loads the configuration from `OSBAPI_*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `OSBAPI_BROKER_URL` is unset.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = env::var(ENV_BROKER_URL)
            .map_err(|_| ClientError::InvalidConfig(format!("{ENV_BROKER_URL} is not set")))?;

        let mut config = Self::new(base_url);
        if let Ok(username) = env::var(ENV_USERNAME) {
            config.username = username;
        }
        if let Ok(password) = env::var(ENV_PASSWORD) {
            config.password = password;
        }
        if let Ok(api_version) = env::var(ENV_API_VERSION) {
            config.api_version = api_version;
        }
        Ok(config)
    }

    /// Sets the basic-auth credentials.
    #[must_use]
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.username = username.into();
        self.password = password.into();
        self
    }

    /// Sets the API version header value.
    #[must_use]
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("base_url is not a valid URL: {e}")))?;

        if self.api_version.is_empty() {
            return Err(ClientError::InvalidConfig(
                "api_version cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("api_version", &self.api_version)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
