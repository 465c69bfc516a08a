//! HTTP client for the storefront REST backend.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::token::SessionToken;
use crate::types::{Envelope, ErrorBody};

/// Storefront API client.
///
/// Cheap to clone: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: ClientConfig,
    http_client: Client,
}

impl ApiClient {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization fails).
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Creates a client configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment holds an invalid configuration.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Starts a request, attaching the bearer token when one is given.
    pub(crate) fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&SessionToken>,
    ) -> Result<RequestBuilder> {
        let url = self.config.endpoint(path)?;
        debug!(%method, %url, authenticated = token.is_some(), "API request");

        let mut builder = self.http_client.request(method, url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token.as_str());
        }
        Ok(builder)
    }

    /// Sends a request and decodes the JSON body.
    pub(crate) async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = check_status(builder.send().await?).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Sends a request and unwraps a `{ "data": ... }` body.
    pub(crate) async fn send_data<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let envelope: Envelope<T> = self.send(builder).await?;
        Ok(envelope.data)
    }

    /// Sends a request whose success body is irrelevant.
    pub(crate) async fn send_empty(&self, builder: RequestBuilder) -> Result<()> {
        check_status(builder.send().await?).await?;
        Ok(())
    }
}

/// Maps non-2xx responses to [`Error::Api`], keeping any `message` field.
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // An unreadable or non-JSON error body still yields a status-only error.
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|body| body.message);

    debug!(%status, ?message, "API request rejected");
    Err(Error::api(status, message))
}
