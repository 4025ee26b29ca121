//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or configuring catalog data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Feed could not be parsed.
    #[error("Invalid catalog feed: {0}")]
    InvalidFeed(String),

    /// Unknown ISO currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Not one of `default`, `on-sale`, `new-release`.
    #[error("Unknown variant: {0}")]
    UnknownVariant(String),

    /// Timestamp outside the representable range.
    #[error("Invalid release date timestamp: {0}")]
    InvalidTimestamp(i64),

    /// Recency window must be a positive number of days.
    #[error("Invalid recency window: {0} days")]
    InvalidRecencyWindow(i64),

    /// Two items in a feed share a slug.
    #[error("Duplicate slug in feed: {0}")]
    DuplicateSlug(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::InvalidFeed(e.to_string())
    }
}
