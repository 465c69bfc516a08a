//! Product review types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::product::ProductId;

/// A published review.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Review identifier.
    #[serde(rename = "_id")]
    pub id: String,
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Headline.
    #[serde(default)]
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub comment: String,
    /// Display name of the author.
    #[serde(default)]
    pub name: Option<String>,
    /// Publication time.
    pub created_at: Option<DateTime<Utc>>,
}

/// A review to submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReview {
    /// Stars, 1 to 5.
    pub rating: u8,
    /// Headline.
    pub title: String,
    /// Body text.
    pub comment: String,
    /// Reviewed product.
    pub product: ProductId,
}

impl NewReview {
    /// Lowest accepted rating.
    pub const MIN_RATING: u8 = 1;
    /// Highest accepted rating.
    pub const MAX_RATING: u8 = 5;

    /// Returns true if the rating is within 1..=5.
    #[must_use]
    pub const fn has_valid_rating(&self) -> bool {
        self.rating >= Self::MIN_RATING && self.rating <= Self::MAX_RATING
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        let mut review = NewReview {
            rating: 5,
            title: "Lovely".into(),
            comment: "Lasts all day".into(),
            product: ProductId::new("p1"),
        };
        assert!(review.has_valid_rating());
        review.rating = 0;
        assert!(!review.has_valid_rating());
        review.rating = 6;
        assert!(!review.has_valid_rating());
    }
}
