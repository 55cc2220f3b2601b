//! Service record — a photography offering sourced from the catalog backend.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ServiceId;
use crate::price::Price;

/// Category shown when a record carries none.
pub const DEFAULT_CATEGORY: &str = "General";

/// Highest rating a record may carry.
pub const MAX_RATING: f32 = 5.0;

/// A photography offering with price, duration, and descriptive metadata.
///
/// The JSON shape follows the catalog backend: the identifier lives under
/// `_id` (plain `id` is accepted too), `duration` is in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: ServiceId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub price: Price,
    /// Session length in minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}

impl ServiceRecord {
    /// Create a builder for constructing a [`ServiceRecord`].
    #[must_use]
    pub fn builder() -> ServiceRecordBuilder {
        ServiceRecordBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyTitle`] for a blank title and
    /// [`ValidationError::RatingOutOfRange`] for a rating outside `0..=5`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if let Some(rating) = self.rating
            && !(0.0..=MAX_RATING).contains(&rating)
        {
            return Err(ValidationError::RatingOutOfRange);
        }
        Ok(())
    }

    /// Category label, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_label(&self) -> &str {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
    }

    /// Rating worth displaying; a missing or zero rating hides the row.
    #[must_use]
    pub fn shown_rating(&self) -> Option<f32> {
        self.rating.filter(|rating| *rating > 0.0)
    }

    /// Number of filled stars (0–5), or `None` when no rating is shown.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn filled_stars(&self) -> Option<u8> {
        self.shown_rating()
            .map(|rating| rating.clamp(0.0, MAX_RATING).floor() as u8)
    }

    /// Text next to the stars, e.g. `4.8 (120 reviews)`.
    #[must_use]
    pub fn rating_label(&self) -> Option<String> {
        self.shown_rating()
            .map(|rating| format!("{rating} ({} reviews)", self.review_count()))
    }

    /// Review count, `0` when the backend does not report one.
    #[must_use]
    pub fn review_count(&self) -> u32 {
        self.reviews.unwrap_or(0)
    }

    /// Amount charged when booking.
    #[must_use]
    pub fn upfront_deposit(&self) -> Price {
        self.price.upfront_deposit()
    }
}

/// Step-by-step builder for [`ServiceRecord`].
#[derive(Debug, Default)]
pub struct ServiceRecordBuilder {
    id: Option<ServiceId>,
    title: Option<String>,
    description: String,
    category: Option<String>,
    price: Price,
    duration: u32,
    rating: Option<f32>,
    reviews: Option<u32>,
}

impl ServiceRecordBuilder {
    #[must_use]
    pub fn id(mut self, id: ServiceId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: Price) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn duration(mut self, minutes: u32) -> Self {
        self.duration = minutes;
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: f32, reviews: u32) -> Self {
        self.rating = Some(rating);
        self.reviews = Some(reviews);
        self
    }

    /// Consume the builder, validate, and return a [`ServiceRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyId`] when no id was given, or any
    /// error from [`ServiceRecord::validate`].
    pub fn build(self) -> Result<ServiceRecord, ValidationError> {
        let record = ServiceRecord {
            id: self.id.ok_or(ValidationError::EmptyId)?,
            title: self.title.unwrap_or_default(),
            description: self.description,
            category: self.category,
            price: self.price,
            duration: self.duration,
            rating: self.rating,
            reviews: self.reviews,
        };
        record.validate()?;
        Ok(record)
    }
}
