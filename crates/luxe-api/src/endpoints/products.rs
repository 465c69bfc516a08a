//! Catalog endpoints.

use reqwest::Method;

use super::segment;
use crate::client::ApiClient;
use crate::error::Result;
use crate::types::{Product, ProductId, ProductQuery};

impl ApiClient {
    /// Lists catalog products matching the filters (`GET /products`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let mut builder = self.request(Method::GET, "products", None)?;
        if !query.is_empty() {
            builder = builder.query(query);
        }
        self.send_data(builder).await
    }

    /// Fetches one product (`GET /products/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn product(&self, id: &ProductId) -> Result<Product> {
        let path = format!("products/{}", segment(id.as_str()));
        let builder = self.request(Method::GET, &path, None)?;
        self.send_data(builder).await
    }
}
