//! Display variants and their corner banners.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CatalogError;
use crate::money::Money;
use crate::recency::RecencyWindow;
use crate::theme::Palette;

/// How a catalog item is presented. Exactly one holds at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Regular listing.
    #[default]
    Default,
    /// Item has a sale price.
    OnSale,
    /// Item was released inside the recency window.
    NewRelease,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
        }
    }

}

impl FromStr for Variant {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(Variant::Default),
            "on-sale" => Ok(Variant::OnSale),
            "new-release" => Ok(Variant::NewRelease),
            _ => Err(CatalogError::UnknownVariant(s.to_string())),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify an item from its sale price and release date.
///
/// A sale price wins over recency: a shoe that is both new and discounted
/// shows as on-sale.
pub fn classify(
    sale_price: Option<Money>,
    release_date: DateTime<Utc>,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> Variant {
    match sale_price {
        Some(_) => Variant::OnSale,
        None if window.is_new(release_date, now) => Variant::NewRelease,
        None => Variant::Default,
    }
}

/// Corner banner drawn over a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BannerSpec {
    /// CSS background color.
    pub background_color: String,
    /// Banner text.
    pub message: &'static str,
}

/// Banner text for sale items.
pub const SALE_MESSAGE: &str = "Sale";
/// Banner text for new releases.
pub const NEW_RELEASE_MESSAGE: &str = "Just Released!";

/// Pick the banner for a variant. `Default` has none.
pub fn select_banner(variant: Variant, palette: &Palette) -> Option<BannerSpec> {
    match variant {
        Variant::OnSale => Some(BannerSpec {
            background_color: palette.primary.clone(),
            message: SALE_MESSAGE,
        }),
        Variant::NewRelease => Some(BannerSpec {
            background_color: palette.secondary.clone(),
            message: NEW_RELEASE_MESSAGE,
        }),
        Variant::Default => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_sale_price_wins() {
        let window = RecencyWindow::default();
        let sale = Some(Money::usd(5000));
        assert_eq!(
            classify(sale, now() - Duration::days(3), now(), window),
            Variant::OnSale
        );
        assert_eq!(
            classify(sale, now() - Duration::days(3650), now(), window),
            Variant::OnSale
        );
    }

    #[test]
    fn test_zero_sale_price_is_still_on_sale() {
        let variant = classify(
            Some(Money::usd(0)),
            now() - Duration::days(3650),
            now(),
            RecencyWindow::default(),
        );
        assert_eq!(variant, Variant::OnSale);
    }

    #[test]
    fn test_recent_without_sale_is_new_release() {
        let variant = classify(None, now() - Duration::days(3), now(), RecencyWindow::default());
        assert_eq!(variant, Variant::NewRelease);
    }

    #[test]
    fn test_old_without_sale_is_default() {
        let variant = classify(
            None,
            now() - Duration::days(365 * 5),
            now(),
            RecencyWindow::default(),
        );
        assert_eq!(variant, Variant::Default);
    }

    #[test]
    fn test_banner_lookup() {
        let palette = Palette::default();

        let sale = select_banner(Variant::OnSale, &palette).unwrap();
        assert_eq!(sale.message, "Sale");
        assert_eq!(sale.background_color, palette.primary);

        let new = select_banner(Variant::NewRelease, &palette).unwrap();
        assert_eq!(new.message, "Just Released!");
        assert_eq!(new.background_color, palette.secondary);

        assert!(select_banner(Variant::Default, &palette).is_none());
    }

    #[test]
    fn test_variant_strings() {
        for variant in [Variant::Default, Variant::OnSale, Variant::NewRelease] {
            assert_eq!(variant.as_str().parse::<Variant>().unwrap(), variant);
        }
        assert_eq!("On-Sale".parse::<Variant>().unwrap(), Variant::OnSale);
        assert!(matches!(
            "clearance".parse::<Variant>(),
            Err(CatalogError::UnknownVariant(name)) if name == "clearance"
        ));
        assert_eq!(
            serde_json::to_string(&Variant::NewRelease).unwrap(),
            r#""new-release""#
        );
    }
}
