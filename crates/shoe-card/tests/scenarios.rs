//! End-to-end card scenarios: classification, banner and markup together.

use chrono::{DateTime, Duration, Utc};
use shoe_card::{assemble, render_page, RenderContext, ShoeCard};
use shoe_catalog::{load_feed, CatalogItem, Currency, Money, Variant};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn shoe(sale_price: Option<i64>, released: Duration) -> CatalogItem {
    let item = CatalogItem::new("stride", "Stride", Money::usd(16500))
        .with_image("/assets/stride.jpg")
        .with_release_date(now() - released)
        .with_colors(3);
    match sale_price {
        Some(cents) => item.with_sale_price(Money::usd(cents)),
        None => item,
    }
}

fn banner_text(item: &CatalogItem, ctx: &RenderContext) -> Option<String> {
    assemble(item, ctx)
        .find_by_class("shoe-card__banner")
        .map(|banner| banner.text_content())
}

#[test]
fn old_shoe_on_sale_shows_sale_banner() {
    let ctx = RenderContext::at(now());
    let item = shoe(Some(11000), Duration::days(365 * 10));

    assert_eq!(ShoeCard::new(&item).variant(&ctx), Variant::OnSale);
    assert_eq!(banner_text(&item, &ctx).as_deref(), Some("Sale"));
}

#[test]
fn recent_shoe_shows_just_released_banner() {
    let ctx = RenderContext::at(now());
    let item = shoe(None, Duration::days(3));

    assert_eq!(ShoeCard::new(&item).variant(&ctx), Variant::NewRelease);
    assert_eq!(banner_text(&item, &ctx).as_deref(), Some("Just Released!"));
}

#[test]
fn old_shoe_without_sale_has_no_banner() {
    let ctx = RenderContext::at(now());
    let item = shoe(None, Duration::days(365 * 5));

    assert_eq!(ShoeCard::new(&item).variant(&ctx), Variant::Default);
    assert_eq!(banner_text(&item, &ctx), None);
}

#[test]
fn sale_takes_precedence_over_recency() {
    let ctx = RenderContext::at(now());
    let item = shoe(Some(5000), Duration::days(3));

    assert_eq!(ShoeCard::new(&item).variant(&ctx), Variant::OnSale);
    assert_eq!(banner_text(&item, &ctx).as_deref(), Some("Sale"));
}

#[test]
fn color_count_is_pluralized() {
    let ctx = RenderContext::at(now());

    let one = shoe(None, Duration::days(400)).with_colors(1);
    let three = shoe(None, Duration::days(400)).with_colors(3);

    let label = |item: &CatalogItem| {
        assemble(item, &ctx)
            .find_by_class("shoe-card__color-info")
            .map(|el| el.text_content())
    };
    assert_eq!(label(&one).as_deref(), Some("1 Color"));
    assert_eq!(label(&three).as_deref(), Some("3 Colors"));
}

#[test]
fn price_struck_through_only_when_on_sale() {
    let ctx = RenderContext::at(now());
    let cases = [
        (shoe(Some(9000), Duration::days(400)), true),
        (shoe(None, Duration::days(3)), false),
        (shoe(None, Duration::days(400)), false),
    ];

    for (item, struck) in cases {
        let tree = assemble(&item, &ctx);
        let price = tree.find_by_class("shoe-card__price").unwrap();
        assert_eq!(
            price.get_style("text-decoration") == Some("line-through"),
            struck,
            "variant {}",
            ShoeCard::new(&item).variant(&ctx)
        );
    }
}

#[test]
fn markup_escapes_item_fields() {
    let ctx = RenderContext::at(now());
    let item = CatalogItem::new("a-b", "Tom & <Jerry>", Money::usd(100))
        .with_image("/img?a=1&b=\"2\"")
        .with_release_date(now() - Duration::days(400));

    let html = assemble(&item, &ctx).to_html();
    assert!(html.contains("Tom &amp; &lt;Jerry&gt;"));
    assert!(html.contains(r#"src="/img?a=1&amp;b=&quot;2&quot;""#));
}

#[test]
fn feed_renders_to_full_page() {
    let feed = r#"[
        {"slug":"sale","name":"Sale Shoe","imageSrc":"/s.jpg","price":16500,"salePrice":11000,"releaseDate":"2014-06-15T12:00:00Z","numOfColors":1},
        {"slug":"fresh","name":"Fresh Shoe","imageSrc":"/f.jpg","price":12000,"salePrice":null,"releaseDate":"2024-06-12T12:00:00Z","numOfColors":2},
        {"slug":"plain","name":"Plain Shoe","imageSrc":"/p.jpg","price":9000,"releaseDate":"2019-06-15T12:00:00Z","numOfColors":3}
    ]"#;
    let items = load_feed(feed, Currency::USD).unwrap();
    let html = render_page("Running", &items, &RenderContext::at(now()));

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Running</title>"));
    assert!(html.contains(".shoe-card__banner {"));

    let sale = html.find(r#"href="/shoe/sale""#).unwrap();
    let fresh = html.find(r#"href="/shoe/fresh""#).unwrap();
    let plain = html.find(r#"href="/shoe/plain""#).unwrap();
    assert!(sale < fresh && fresh < plain);

    assert_eq!(html.matches(">Sale</div>").count(), 1);
    assert_eq!(html.matches(">Just Released!</div>").count(), 1);
    assert!(html.contains(r#"<span class="shoe-card__sale-price">$110.00</span>"#));
}
