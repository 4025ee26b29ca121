//! Catalog items and feed loading.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::recency::RecencyWindow;
use crate::variant::{classify, Variant};

/// A shoe listed in the catalog.
///
/// Serializes to the feed entry shape read by [`load_feed`]: prices as
/// minor-unit integers, the release date as RFC 3339 text.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// URL-friendly unique identifier.
    pub slug: String,
    /// Display name.
    pub name: String,
    /// Product image location.
    pub image_src: String,
    /// Base price.
    pub price: Money,
    /// Discounted price. Presence marks the item as on sale.
    pub sale_price: Option<Money>,
    /// When the shoe was released.
    pub release_date: DateTime<Utc>,
    /// Number of color options.
    pub num_of_colors: u32,
}

impl CatalogItem {
    /// Create an item with one color, released now, with no image or sale.
    pub fn new(slug: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        let slug = slug.into();
        Self {
            image_src: format!("/assets/{}.jpg", slug),
            slug,
            name: name.into(),
            price,
            sale_price: None,
            release_date: Utc::now(),
            num_of_colors: 1,
        }
    }

    pub fn with_image(mut self, image_src: impl Into<String>) -> Self {
        self.image_src = image_src.into();
        self
    }

    pub fn with_sale_price(mut self, sale_price: Money) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_release_date(mut self, release_date: DateTime<Utc>) -> Self {
        self.release_date = release_date;
        self
    }

    pub fn with_colors(mut self, num_of_colors: u32) -> Self {
        self.num_of_colors = num_of_colors;
        self
    }

    /// Link target for this item's detail page.
    pub fn href(&self) -> String {
        format!("/shoe/{}", self.slug)
    }

    /// Display variant at the given instant.
    pub fn variant_at(&self, now: DateTime<Utc>, window: RecencyWindow) -> Variant {
        classify(self.sale_price, self.release_date, now, window)
    }
}

/// Release date as it appears in feeds: RFC 3339 text or epoch milliseconds.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedDate {
    Millis(i64),
    Text(DateTime<Utc>),
}

impl FeedDate {
    fn resolve(self) -> Result<DateTime<Utc>, CatalogError> {
        match self {
            FeedDate::Text(date) => Ok(date),
            FeedDate::Millis(ms) => {
                DateTime::from_timestamp_millis(ms).ok_or(CatalogError::InvalidTimestamp(ms))
            }
        }
    }
}

/// Price as it appears in feeds.
///
/// JSON integers are minor units (`16500`), JSON floats are major units
/// (`165.5`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FeedPrice {
    Minor(i64),
    Decimal(f64),
}

impl FeedPrice {
    fn resolve(self, currency: Currency) -> Money {
        match self {
            FeedPrice::Minor(cents) => Money::new(cents, currency),
            FeedPrice::Decimal(amount) => Money::from_decimal(amount, currency),
        }
    }
}

/// One entry of a catalog feed, priced in the feed currency.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FeedItem {
    slug: String,
    name: String,
    image_src: String,
    price: FeedPrice,
    #[serde(default)]
    sale_price: Option<FeedPrice>,
    release_date: FeedDate,
    #[serde(default)]
    num_of_colors: u32,
}

impl FeedItem {
    fn into_item(self, currency: Currency) -> Result<CatalogItem, CatalogError> {
        Ok(CatalogItem {
            slug: self.slug,
            name: self.name,
            image_src: self.image_src,
            price: self.price.resolve(currency),
            sale_price: self.sale_price.map(|price| price.resolve(currency)),
            release_date: self.release_date.resolve()?,
            num_of_colors: self.num_of_colors,
        })
    }
}

/// Outgoing feed entry borrowed from a [`CatalogItem`].
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedEntry<'a> {
    slug: &'a str,
    name: &'a str,
    image_src: &'a str,
    price: i64,
    sale_price: Option<i64>,
    release_date: DateTime<Utc>,
    num_of_colors: u32,
}

impl Serialize for CatalogItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeedEntry {
            slug: &self.slug,
            name: &self.name,
            image_src: &self.image_src,
            price: self.price.amount_cents,
            sale_price: self.sale_price.map(|price| price.amount_cents),
            release_date: self.release_date,
            num_of_colors: self.num_of_colors,
        }
        .serialize(serializer)
    }
}

/// Parse a JSON array of catalog items.
///
/// Feed order is preserved. Slugs must be unique.
pub fn load_feed(json: &str, currency: Currency) -> Result<Vec<CatalogItem>, CatalogError> {
    let raw: Vec<FeedItem> = serde_json::from_str(json)?;
    let mut seen = HashSet::with_capacity(raw.len());
    let mut items = Vec::with_capacity(raw.len());

    for entry in raw {
        if !seen.insert(entry.slug.clone()) {
            return Err(CatalogError::DuplicateSlug(entry.slug));
        }
        items.push(entry.into_item(currency)?);
    }

    tracing::debug!(count = items.len(), currency = %currency, "loaded catalog feed");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_item_builder() {
        let item = CatalogItem::new("tail-spin", "Tail Spin", Money::usd(16500))
            .with_image("/assets/tail-spin.jpg")
            .with_sale_price(Money::usd(11000))
            .with_colors(3);

        assert_eq!(item.href(), "/shoe/tail-spin");
        assert_eq!(item.sale_price, Some(Money::usd(11000)));
        assert_eq!(item.num_of_colors, 3);
    }

    #[test]
    fn test_variant_at() {
        let now = Utc::now();
        let item = CatalogItem::new("a", "A", Money::usd(100))
            .with_release_date(now - Duration::days(3650));
        assert_eq!(item.variant_at(now, RecencyWindow::default()), Variant::Default);

        let item = item.with_sale_price(Money::usd(50));
        assert_eq!(item.variant_at(now, RecencyWindow::default()), Variant::OnSale);
    }

    #[test]
    fn test_load_feed() {
        let json = r#"[
            {
                "slug": "tail-spin",
                "name": "Tail Spin",
                "imageSrc": "/assets/tail-spin.jpg",
                "price": 16500,
                "salePrice": null,
                "releaseDate": 1718452800000,
                "numOfColors": 2
            },
            {
                "slug": "react-infinity",
                "name": "React Infinity",
                "imageSrc": "/assets/react-infinity.jpg",
                "price": 16000,
                "salePrice": 14500,
                "releaseDate": "2024-06-01T00:00:00Z",
                "numOfColors": 1
            },
            {
                "slug": "air-force",
                "name": "Air Force 1",
                "imageSrc": "/assets/air-force.jpg",
                "price": 11000,
                "releaseDate": "2019-01-10T08:30:00+02:00",
                "numOfColors": 4
            }
        ]"#;

        let items = load_feed(json, Currency::USD).unwrap();
        assert_eq!(items.len(), 3);

        assert_eq!(items[0].slug, "tail-spin");
        assert_eq!(items[0].sale_price, None);
        assert_eq!(
            items[0].release_date,
            DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z").unwrap()
        );

        assert_eq!(items[1].sale_price, Some(Money::usd(14500)));
        assert_eq!(items[2].sale_price, None);
        assert_eq!(items[2].num_of_colors, 4);
    }

    #[test]
    fn test_load_feed_decimal_prices() {
        let json = r#"[{"slug":"a","name":"A","imageSrc":"a.jpg","price":165.5,"salePrice":110,"releaseDate":0}]"#;
        let items = load_feed(json, Currency::USD).unwrap();
        assert_eq!(items[0].price, Money::usd(16550));
        assert_eq!(items[0].sale_price, Some(Money::usd(110)));

        let json = r#"[{"slug":"a","name":"A","imageSrc":"a.jpg","price":120.0,"salePrice":99.99,"releaseDate":0}]"#;
        let items = load_feed(json, Currency::USD).unwrap();
        assert_eq!(items[0].price, Money::usd(12000));
        assert_eq!(items[0].sale_price, Some(Money::usd(9999)));
    }

    #[test]
    fn test_serialized_items_reload_as_feed() {
        let released = DateTime::parse_from_rfc3339("2024-06-01T08:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let items = vec![
            CatalogItem::new("a", "A", Money::usd(16500)).with_release_date(released),
            CatalogItem::new("b", "B \"quoted\"", Money::usd(9000))
                .with_sale_price(Money::usd(7500))
                .with_release_date(released)
                .with_colors(4),
        ];

        let json = serde_json::to_string(&items).unwrap();
        assert!(json.contains(r#""price":16500"#));
        assert!(json.contains(r#""salePrice":null"#));
        assert!(json.contains(r#""imageSrc":"/assets/a.jpg""#));

        assert_eq!(load_feed(&json, Currency::USD).unwrap(), items);
    }

    #[test]
    fn test_load_feed_uses_currency() {
        let json = r#"[{"slug":"a","name":"A","imageSrc":"a.jpg","price":9000,"releaseDate":0}]"#;
        let items = load_feed(json, Currency::EUR).unwrap();
        assert_eq!(items[0].price, Money::new(9000, Currency::EUR));
    }

    #[test]
    fn test_load_feed_rejects_duplicates() {
        let json = r#"[
            {"slug":"a","name":"A","imageSrc":"a.jpg","price":1,"releaseDate":0},
            {"slug":"a","name":"B","imageSrc":"b.jpg","price":2,"releaseDate":0}
        ]"#;
        let err = load_feed(json, Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSlug(slug) if slug == "a"));
    }

    #[test]
    fn test_load_feed_invalid_json() {
        let err = load_feed("{not json", Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidFeed(_)));
    }

    #[test]
    fn test_load_feed_out_of_range_timestamp() {
        let json = format!(
            r#"[{{"slug":"a","name":"A","imageSrc":"a.jpg","price":1,"releaseDate":{}}}]"#,
            i64::MAX
        );
        let err = load_feed(&json, Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidTimestamp(_)));
    }
}
