//! Order endpoints.

use reqwest::Method;

use super::segment;
use crate::client::ApiClient;
use crate::error::Result;
use crate::token::SessionToken;
use crate::types::{NewOrder, Order};

impl ApiClient {
    /// Places an order (`POST /orders`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn create_order(&self, token: &SessionToken, order: &NewOrder) -> Result<Order> {
        let builder = self
            .request(Method::POST, "orders", Some(token))?
            .json(order);
        self.send_data(builder).await
    }

    /// Fetches one order (`GET /orders/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn order(&self, token: &SessionToken, id: &str) -> Result<Order> {
        let path = format!("orders/{}", segment(id));
        let builder = self.request(Method::GET, &path, Some(token))?;
        self.send_data(builder).await
    }

    /// Lists the shopper's orders (`GET /orders/myorders`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn my_orders(&self, token: &SessionToken) -> Result<Vec<Order>> {
        let builder = self.request(Method::GET, "orders/myorders", Some(token))?;
        self.send_data(builder).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::client::test_support::serve_once;
    use crate::token::SessionToken;
    use crate::types::OrderStatus;

    #[tokio::test]
    async fn test_my_orders() {
        let (client, server) = serve_once(
            200,
            r#"{"data": [{"_id": "o1", "status": "Shipped", "totalPrice": 120.5, "isPaid": true}]}"#,
        )
        .await;

        let orders = client.my_orders(&SessionToken::new("t")).await.unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.path, "/api/orders/myorders");
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].status, OrderStatus::Shipped);
        assert!(orders[0].is_paid);
    }

    #[tokio::test]
    async fn test_order_by_id() {
        let (client, server) = serve_once(
            200,
            r#"{"data": {"_id": "65f0c0ffee12ab34", "status": "Pending", "totalPrice": 236.8}}"#,
        )
        .await;

        let order = client
            .order(&SessionToken::new("t"), "65f0c0ffee12ab34")
            .await
            .unwrap();
        let request = server.await.unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/api/orders/65f0c0ffee12ab34");
        assert_eq!(request.header("authorization"), Some("Bearer t"));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.reference(), "EE12AB34");
    }

    #[tokio::test]
    async fn test_order_not_found() {
        let (client, server) = serve_once(404, r#"{"message": "Order not found"}"#).await;

        let err = client
            .order(&SessionToken::new("t"), "missing")
            .await
            .unwrap_err();
        server.await.unwrap();

        assert_eq!(err.server_message(), Some("Order not found"));
    }
}
