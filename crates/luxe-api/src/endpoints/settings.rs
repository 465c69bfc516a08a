//! Public storefront settings.

use reqwest::Method;

use crate::client::ApiClient;
use crate::error::Result;
use crate::types::StoreSettings;

impl ApiClient {
    /// Fetches public settings (`GET /settings`). No token is sent.
    ///
    /// The settings body is not wrapped in `{ "data": ... }`.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn store_settings(&self) -> Result<StoreSettings> {
        let builder = self.request(Method::GET, "settings", None)?;
        self.send(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_support::serve_once;

    #[tokio::test]
    async fn test_store_settings() {
        let (client, server) = serve_once(200, r#"{"storeName": "Maison Noir"}"#).await;

        let settings = client.store_settings().await.unwrap();
        server.await.unwrap();

        assert_eq!(settings.store_name.as_deref(), Some("Maison Noir"));
    }
}
