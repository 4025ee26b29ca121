//! Catalog domain types for the shoe listing.
//!
//! This crate owns everything a shoe card needs to know before it is drawn:
//!
//! - **Items**: [`CatalogItem`] records and JSON feed loading
//! - **Money**: minor-unit [`Money`] values and price formatting
//! - **Variants**: [`Variant`] classification and [`BannerSpec`] selection
//! - **Design system**: the shared [`Palette`] and [`Weights`] constants
//!
//! # Example
//!
//! ```rust
//! use chrono::{Duration, Utc};
//! use shoe_catalog::prelude::*;
//!
//! let now = Utc::now();
//! let item = CatalogItem::new("tail-spin", "Tail Spin", Money::new(16500, Currency::USD))
//!     .with_release_date(now - Duration::days(3));
//!
//! let variant = item.variant_at(now, RecencyWindow::default());
//! assert_eq!(variant, Variant::NewRelease);
//!
//! let banner = select_banner(variant, &Palette::default()).unwrap();
//! assert_eq!(banner.message, "Just Released!");
//! ```

pub mod error;
pub mod format;
pub mod item;
pub mod money;
pub mod recency;
pub mod theme;
pub mod variant;

pub use error::CatalogError;
pub use format::{format_price, pluralize};
pub use item::{load_feed, CatalogItem};
pub use money::{Currency, Money};
pub use recency::RecencyWindow;
pub use theme::{Palette, Weights};
pub use variant::{classify, select_banner, BannerSpec, Variant};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::format::{format_price, pluralize};
    pub use crate::item::{load_feed, CatalogItem};
    pub use crate::money::{Currency, Money};
    pub use crate::recency::RecencyWindow;
    pub use crate::theme::{Palette, Weights};
    pub use crate::variant::{classify, select_banner, BannerSpec, Variant};
}
