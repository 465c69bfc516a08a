//! Review endpoints.

use reqwest::Method;

use super::segment;
use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::token::SessionToken;
use crate::types::{NewReview, ProductId, Review};

impl ApiClient {
    /// Lists reviews of a product (`GET /reviews/product/{id}`).
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn product_reviews(&self, product_id: &ProductId) -> Result<Vec<Review>> {
        let path = format!("reviews/product/{}", segment(product_id.as_str()));
        let builder = self.request(Method::GET, &path, None)?;
        self.send_data(builder).await
    }

    /// Submits a review (`POST /reviews`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a rating outside 1..=5 without
    /// calling the server, otherwise transport or server errors.
    pub async fn create_review(&self, token: &SessionToken, review: &NewReview) -> Result<()> {
        if !review.has_valid_rating() {
            return Err(Error::InvalidConfig(format!(
                "rating must be between {} and {}",
                NewReview::MIN_RATING,
                NewReview::MAX_RATING
            )));
        }

        let builder = self
            .request(Method::POST, "reviews", Some(token))?
            .json(review);
        self.send_empty(builder).await
    }
}
