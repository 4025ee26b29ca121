//! Shoe card view assembly.

use chrono::{DateTime, Utc};
use shoe_catalog::{format_price, pluralize, CatalogItem, Palette, RecencyWindow, Variant, Weights};

use crate::node::{Element, Node};
use crate::style::VariantStyle;

/// Gap between the image and the text rows, in pixels.
const IMAGE_GAP_PX: u32 = 12;

/// Everything a card needs besides the item itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Instant used for recency checks.
    pub now: DateTime<Utc>,
    pub window: RecencyWindow,
    pub palette: Palette,
    pub weights: Weights,
}

impl RenderContext {
    /// Context evaluated at a fixed instant with default theme.
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            window: RecencyWindow::default(),
            palette: Palette::default(),
            weights: Weights::default(),
        }
    }

    /// Context evaluated at the current time.
    pub fn current() -> Self {
        Self::at(Utc::now())
    }

    pub fn with_window(mut self, window: RecencyWindow) -> Self {
        self.window = window;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }
}

/// A card bound to one catalog item.
#[derive(Debug, Clone, Copy)]
pub struct ShoeCard<'a> {
    item: &'a CatalogItem,
}

impl<'a> ShoeCard<'a> {
    pub fn new(item: &'a CatalogItem) -> Self {
        Self { item }
    }

    /// Display variant under `ctx`.
    pub fn variant(&self, ctx: &RenderContext) -> Variant {
        self.item.variant_at(ctx.now, ctx.window)
    }

    /// Build the render tree for this card.
    pub fn render(&self, ctx: &RenderContext) -> Node {
        let item = self.item;
        let variant = self.variant(ctx);
        let style = VariantStyle::for_variant(variant, &ctx.palette);

        tracing::debug!(
            slug = %item.slug,
            variant = %variant,
            banner = style.banner.is_some(),
            "assembled shoe card"
        );

        let image = Element::new("div").class("shoe-card__image-wrapper").child(
            Element::new("img")
                .class("shoe-card__image")
                .attr("alt", "")
                .attr("src", &item.image_src),
        );

        let spacer = Element::new("div")
            .class("shoe-card__spacer")
            .style("height", format!("{}px", IMAGE_GAP_PX))
            .style("min-height", format!("{}px", IMAGE_GAP_PX));

        let price = Element::new("span")
            .class("shoe-card__price")
            .style("text-decoration", style.price_decoration)
            .style("color", style.price_color.as_str())
            .text(format_price(item.price));

        let name_row = Element::new("div")
            .class("shoe-card__row")
            .child(Element::new("h3").class("shoe-card__name").text(&item.name))
            .child(price);

        let sale_price = match (style.show_sale_price, item.sale_price) {
            (true, Some(sale_price)) => Some(
                Element::new("span")
                    .class("shoe-card__sale-price")
                    .text(format_price(sale_price)),
            ),
            _ => None,
        };

        let colors_row = Element::new("div")
            .class("shoe-card__row")
            .child(
                Element::new("p")
                    .class("shoe-card__color-info")
                    .text(pluralize("Color", item.num_of_colors)),
            )
            .child_opt(sale_price);

        let wrapper = Element::new("article")
            .class("shoe-card__wrapper")
            .child(image)
            .child(spacer)
            .child(name_row)
            .child(colors_row);

        let banner = style.banner.map(|banner| {
            Element::new("div")
                .class("shoe-card__banner")
                .style("--background-color", banner.background_color)
                .text(banner.message)
        });

        Element::new("a")
            .class("shoe-card")
            .attr("href", item.href())
            .attr("data-variant", variant.as_str())
            .child(wrapper)
            .child_opt(banner)
            .into()
    }
}

/// Build the render tree for one item.
pub fn assemble(item: &CatalogItem, ctx: &RenderContext) -> Node {
    ShoeCard::new(item).render(ctx)
}

/// Build a grid of cards, one cell per item in order.
pub fn assemble_grid(items: &[CatalogItem], ctx: &RenderContext) -> Node {
    let grid = items.iter().fold(Element::new("section").class("shoe-grid"), |grid, item| {
        grid.child(
            Element::new("div")
                .class("shoe-grid__cell")
                .child(assemble(item, ctx)),
        )
    });

    tracing::debug!(cards = items.len(), "assembled shoe grid");
    grid.into()
}
