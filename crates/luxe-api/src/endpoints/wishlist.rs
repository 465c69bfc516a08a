//! Wishlist endpoints.

use reqwest::Method;

use super::segment;
use crate::client::ApiClient;
use crate::error::Result;
use crate::token::SessionToken;
use crate::types::{ProductId, Wishlist};

impl ApiClient {
    /// Fetches the shopper's wishlist (`GET /wishlist`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get_wishlist(&self, token: &SessionToken) -> Result<Wishlist> {
        let builder = self.request(Method::GET, "wishlist", Some(token))?;
        self.send_data(builder).await
    }

    /// Saves a product (`POST /wishlist/{productId}`) and returns the
    /// updated wishlist.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn add_to_wishlist(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> Result<Wishlist> {
        let path = format!("wishlist/{}", segment(product_id.as_str()));
        let builder = self
            .request(Method::POST, &path, Some(token))?
            .json(&serde_json::json!({}));
        self.send_data(builder).await
    }

    /// Removes a saved product (`DELETE /wishlist/{productId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn remove_from_wishlist(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> Result<Wishlist> {
        let path = format!("wishlist/{}", segment(product_id.as_str()));
        let builder = self.request(Method::DELETE, &path, Some(token))?;
        self.send_data(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_support::serve_once;
    use crate::token::SessionToken;
    use crate::types::ProductId;

    #[tokio::test]
    async fn test_add_to_wishlist_posts_empty_object() {
        let (client, server) =
            serve_once(201, r#"{"data": {"products": [{"product": {"_id": "p1"}}]}}"#).await;

        let wishlist = client
            .add_to_wishlist(&SessionToken::new("t"), &ProductId::new("p1"))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/wishlist/p1");
        assert_eq!(request.json(), serde_json::json!({}));
        assert!(wishlist.contains(&ProductId::new("p1")));
    }

    #[tokio::test]
    async fn test_get_wishlist() {
        let (client, server) = serve_once(200, r#"{"data": {"products": []}}"#).await;

        let wishlist = client.get_wishlist(&SessionToken::new("t")).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.path, "/api/wishlist");
        assert!(wishlist.is_empty());
    }
}
