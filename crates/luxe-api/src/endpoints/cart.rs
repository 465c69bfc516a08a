//! Cart endpoints.

use reqwest::Method;
use serde::Serialize;

use super::segment;
use crate::client::ApiClient;
use crate::error::Result;
use crate::token::SessionToken;
use crate::types::{Cart, ProductId};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddToCart<'a> {
    product_id: &'a ProductId,
    quantity: u32,
}

#[derive(Serialize)]
struct UpdateQuantity {
    quantity: u32,
}

impl ApiClient {
    /// Fetches the shopper's cart (`GET /cart`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn get_cart(&self, token: &SessionToken) -> Result<Cart> {
        let builder = self.request(Method::GET, "cart", Some(token))?;
        self.send_data(builder).await
    }

    /// Adds units of a product (`POST /cart`) and returns the updated cart.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn add_to_cart(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart> {
        let builder = self
            .request(Method::POST, "cart", Some(token))?
            .json(&AddToCart {
                product_id,
                quantity,
            });
        self.send_data(builder).await
    }

    /// Sets the quantity of a cart line (`PUT /cart/{productId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn update_cart_item(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
        quantity: u32,
    ) -> Result<Cart> {
        let path = format!("cart/{}", segment(product_id.as_str()));
        let builder = self
            .request(Method::PUT, &path, Some(token))?
            .json(&UpdateQuantity { quantity });
        self.send_data(builder).await
    }

    /// Removes a cart line (`DELETE /cart/{productId}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn remove_cart_item(
        &self,
        token: &SessionToken,
        product_id: &ProductId,
    ) -> Result<Cart> {
        let path = format!("cart/{}", segment(product_id.as_str()));
        let builder = self.request(Method::DELETE, &path, Some(token))?;
        self.send_data(builder).await
    }

    /// Empties the cart (`DELETE /cart`). The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn clear_cart(&self, token: &SessionToken) -> Result<()> {
        let builder = self.request(Method::DELETE, "cart", Some(token))?;
        self.send_empty(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_support::serve_once;
    use crate::token::SessionToken;
    use crate::types::ProductId;

    const CART: &str = r#"{"data": {"items": [{"product": {"_id": "abc", "price": 40}, "quantity": 3}]}}"#;

    #[tokio::test]
    async fn test_add_to_cart_request_shape() {
        let (client, server) = serve_once(200, CART).await;
        let token = SessionToken::new("t");

        let cart = client
            .add_to_cart(&token, &ProductId::new("abc"), 3)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/cart");
        assert_eq!(
            request.json(),
            serde_json::json!({"productId": "abc", "quantity": 3})
        );
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 3);
    }

    #[tokio::test]
    async fn test_update_cart_item_request_shape() {
        let (client, server) = serve_once(200, CART).await;

        client
            .update_cart_item(&SessionToken::new("t"), &ProductId::new("abc"), 5)
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "PUT");
        assert_eq!(request.path, "/api/cart/abc");
        assert_eq!(request.json(), serde_json::json!({"quantity": 5}));
    }

    #[tokio::test]
    async fn test_remove_cart_item_request_shape() {
        let (client, server) = serve_once(200, r#"{"data": {"items": []}}"#).await;

        let cart = client
            .remove_cart_item(&SessionToken::new("t"), &ProductId::new("abc"))
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/api/cart/abc");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_clear_cart_ignores_body() {
        let (client, server) = serve_once(200, r#"{"success": true, "message": "Cart cleared"}"#).await;

        client.clear_cart(&SessionToken::new("t")).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/api/cart");
    }

    #[tokio::test]
    async fn test_get_cart_rejected() {
        let (client, server) = serve_once(401, r#"{"message": "Not authorized, token failed"}"#).await;

        let err = client.get_cart(&SessionToken::new("expired")).await.unwrap_err();
        server.await.unwrap();

        assert!(err.is_unauthorized());
        assert_eq!(err.server_message(), Some("Not authorized, token failed"));
    }
}
