//! Per-variant style records and the card stylesheet.

use shoe_catalog::{select_banner, BannerSpec, Palette, Variant, Weights};

/// Visual differences between variants, looked up once per card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantStyle {
    /// `text-decoration` of the base price.
    pub price_decoration: &'static str,
    /// `color` of the base price.
    pub price_color: String,
    /// Whether the discounted price is shown next to the color count.
    pub show_sale_price: bool,
    /// Corner banner, if any.
    pub banner: Option<BannerSpec>,
}

impl VariantStyle {
    /// Style record for `variant` under the given palette.
    pub fn for_variant(variant: Variant, palette: &Palette) -> Self {
        let banner = select_banner(variant, palette);
        match variant {
            Variant::OnSale => Self {
                price_decoration: "line-through",
                price_color: palette.gray_700.clone(),
                show_sale_price: true,
                banner,
            },
            Variant::NewRelease | Variant::Default => Self {
                price_decoration: "none",
                price_color: "inherit".to_string(),
                show_sale_price: false,
                banner,
            },
        }
    }

    pub fn is_struck_through(&self) -> bool {
        self.price_decoration == "line-through"
    }
}

/// Stylesheet for the static parts of the card.
///
/// Only variant-dependent values are inlined on the elements themselves.
pub fn card_stylesheet(palette: &Palette, weights: &Weights) -> String {
    format!(
        r#".shoe-card {{
    position: relative;
    text-decoration: none;
    color: inherit;
    isolation: isolate;
}}
.shoe-card__wrapper {{
    position: relative;
}}
.shoe-card__banner {{
    position: absolute;
    top: 0;
    right: 0;
    margin-top: 12px;
    margin-right: -4px;
    padding: 9px;
    border-radius: 2px;
    background-color: var(--background-color);
    color: {white};
    font-weight: {medium};
    font-size: 14px;
}}
.shoe-card__image-wrapper {{
    position: relative;
}}
.shoe-card__image {{
    width: 100%;
    border-radius: 16px 16px 4px 4px;
}}
.shoe-card__row {{
    font-size: 1rem;
    display: flex;
    justify-content: space-between;
}}
.shoe-card__name {{
    font-weight: {medium};
    color: {gray_900};
}}
.shoe-card__color-info {{
    color: {gray_700};
}}
.shoe-card__sale-price {{
    font-weight: {medium};
    color: {primary};
}}
.shoe-grid {{
    display: flex;
    flex-wrap: wrap;
    gap: 32px;
}}
.shoe-grid__cell {{
    flex: 1 1 275px;
}}
"#,
        white = palette.white,
        medium = weights.medium,
        gray_900 = palette.gray_900,
        gray_700 = palette.gray_700,
        primary = palette.primary,
    )
}
