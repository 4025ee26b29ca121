//! Print the display variant of every item in a feed.

use anyhow::Result;
use serde::Serialize;
use shoe_catalog::{select_banner, CatalogItem, Variant};
use shoe_card::RenderContext;

use super::{read_feed, resolve_now, ClassifyArgs};
use crate::context::Context;
use crate::output::variant_badge;

#[derive(Debug, Serialize)]
struct Classification<'a> {
    slug: &'a str,
    variant: Variant,
    banner: Option<&'static str>,
}

fn classify_item<'a>(item: &'a CatalogItem, render_ctx: &RenderContext) -> Classification<'a> {
    let variant = item.variant_at(render_ctx.now, render_ctx.window);
    Classification {
        slug: &item.slug,
        variant,
        banner: select_banner(variant, &render_ctx.palette).map(|banner| banner.message),
    }
}

/// Classify every item, keeping only rows whose variant matches `only`.
fn classify_items<'a>(
    items: &'a [CatalogItem],
    render_ctx: &RenderContext,
    only: Option<Variant>,
) -> Vec<Classification<'a>> {
    items
        .iter()
        .map(|item| classify_item(item, render_ctx))
        .filter(|row| only.map_or(true, |variant| row.variant == variant))
        .collect()
}

/// Run the classify command.
pub fn run(args: ClassifyArgs, ctx: &Context) -> Result<()> {
    let items = read_feed(&args.feed, ctx)?;
    let render_ctx = ctx.config.render_context(resolve_now(args.now.as_deref())?)?;
    let rows = classify_items(&items, &render_ctx, args.only);

    let slug_width = rows
        .iter()
        .map(|row| row.slug.len())
        .max()
        .unwrap_or(0)
        .max("SLUG".len());

    ctx.output
        .table_row(&["SLUG", "BANNER", "VARIANT"], &[slug_width, 14, 0]);

    for row in &rows {
        if ctx.output.is_json() {
            ctx.output.json_line(&row);
        } else {
            ctx.output.table_row(
                &[row.slug, row.banner.unwrap_or("-"), &variant_badge(row.variant)],
                &[slug_width, 14, 0],
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use shoe_catalog::Money;

    #[test]
    fn test_classification_row() {
        let render_ctx = RenderContext::at(Utc::now());
        let item = CatalogItem::new("tail-spin", "Tail Spin", Money::usd(16500))
            .with_release_date(render_ctx.now - Duration::days(3));

        let row = classify_item(&item, &render_ctx);
        assert_eq!(row.slug, "tail-spin");
        assert_eq!(row.variant, Variant::NewRelease);
        assert_eq!(row.banner, Some("Just Released!"));

        let json = serde_json::to_string(&row).unwrap();
        assert_eq!(
            json,
            r#"{"slug":"tail-spin","variant":"new-release","banner":"Just Released!"}"#
        );
    }

    #[test]
    fn test_default_has_no_banner() {
        let render_ctx = RenderContext::at(Utc::now());
        let item = CatalogItem::new("old", "Old", Money::usd(100))
            .with_release_date(render_ctx.now - Duration::days(900));

        let row = classify_item(&item, &render_ctx);
        assert_eq!(row.variant, Variant::Default);
        assert_eq!(row.banner, None);
    }

    #[test]
    fn test_only_filters_by_variant() {
        let render_ctx = RenderContext::at(Utc::now());
        let items = vec![
            CatalogItem::new("sale", "Sale", Money::usd(100)).with_sale_price(Money::usd(50)),
            CatalogItem::new("fresh", "Fresh", Money::usd(100))
                .with_release_date(render_ctx.now - Duration::days(1)),
            CatalogItem::new("old", "Old", Money::usd(100))
                .with_release_date(render_ctx.now - Duration::days(900)),
            CatalogItem::new("old-sale", "Old Sale", Money::usd(100))
                .with_sale_price(Money::usd(10))
                .with_release_date(render_ctx.now - Duration::days(900)),
        ];

        let only: Variant = "on-sale".parse().unwrap();
        let slugs: Vec<_> = classify_items(&items, &render_ctx, Some(only))
            .iter()
            .map(|row| row.slug)
            .collect();
        assert_eq!(slugs, ["sale", "old-sale"]);

        assert_eq!(classify_items(&items, &render_ctx, None).len(), 4);
    }
}
