//! Client configuration.

use std::time::Duration;

use url::Url;

use crate::error::{Error, Result};

/// Environment variable holding the backend base URL.
pub const API_URL_ENV: &str = "LUXE_API_URL";

/// Environment variable holding the request timeout in seconds.
pub const API_TIMEOUT_ENV: &str = "LUXE_API_TIMEOUT_SECS";

/// Base URL used when nothing is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Storefront API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, always ending with `/`.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or cannot carry paths.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        Self::builder(base_url).build()
    }

    /// Creates a configuration builder.
    #[must_use]
    pub fn builder(base_url: impl AsRef<str>) -> ClientConfigBuilder {
        ClientConfigBuilder::new(base_url)
    }

    /// Reads the configuration from `LUXE_API_URL` and `LUXE_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the timeout is not a number.
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(API_URL_ENV).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let mut builder = Self::builder(url);

        if let Ok(raw) = std::env::var(API_TIMEOUT_ENV) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::InvalidConfig(format!("{API_TIMEOUT_ENV} must be whole seconds, got {raw:?}"))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Resolves an endpoint path against the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the joined URL is invalid.
    pub fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// Builder for client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfigBuilder {
    base_url: String,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfigBuilder {
    /// Creates a new builder with the given base URL.
    #[must_use]
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: concat!("luxe/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or cannot carry paths.
    pub fn build(self) -> Result<ClientConfig> {
        let mut raw = self.base_url;
        if !raw.ends_with('/') {
            raw.push('/');
        }

        let base_url = Url::parse(&raw)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::InvalidConfig(format!("{raw} cannot be used as a base URL")));
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig("timeout must be greater than zero".into()));
        }

        Ok(ClientConfig {
            base_url,
            timeout: self.timeout,
            user_agent: self.user_agent,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = ClientConfig::new("https://shop.example.com/api").unwrap();
        assert_eq!(config.base_url.as_str(), "https://shop.example.com/api/");
    }

    #[test]
    fn test_endpoint_joins_under_api_prefix() {
        let config = ClientConfig::new("https://shop.example.com/api").unwrap();
        assert_eq!(
            config.endpoint("/cart/abc").unwrap().as_str(),
            "https://shop.example.com/api/cart/abc"
        );
        assert_eq!(
            config.endpoint("wishlist").unwrap().as_str(),
            "https://shop.example.com/api/wishlist"
        );
    }

    #[test]
    fn test_builder_timeout() {
        let config = ClientConfig::builder(DEFAULT_API_URL)
            .timeout(Duration::from_secs(5))
            .user_agent("tests")
            .build()
            .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = ClientConfig::builder(DEFAULT_API_URL)
            .timeout(Duration::ZERO)
            .build();
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_url_rejected() {
        assert!(matches!(ClientConfig::new("not a url"), Err(Error::Url(_))));
        assert!(matches!(
            ClientConfig::new("mailto:shop@example.com"),
            Err(Error::InvalidConfig(_))
        ));
    }
}
