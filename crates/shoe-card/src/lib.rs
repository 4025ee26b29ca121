//! Shoe card view assembly.
//!
//! Turns a [`CatalogItem`](shoe_catalog::CatalogItem) into a declarative
//! render tree and serializes it to HTML:
//!
//! - `card` - classify the item, pick its style record, build the tree
//! - `style` - per-variant style table and the static card stylesheet
//! - `node` / `html` - the render tree and its HTML serializer
//! - `page` - document shell for full-page output
//!
//! ```rust
//! use chrono::Utc;
//! use shoe_card::{assemble, RenderContext};
//! use shoe_catalog::{CatalogItem, Money};
//!
//! let item = CatalogItem::new("tail-spin", "Tail Spin", Money::usd(16500))
//!     .with_sale_price(Money::usd(11000));
//! let html = assemble(&item, &RenderContext::at(Utc::now())).to_html();
//! assert!(html.contains(r#"href="/shoe/tail-spin""#));
//! assert!(html.contains(">Sale</div>"));
//! ```

mod card;
mod html;
mod node;
mod page;
mod style;

pub use card::{assemble, assemble_grid, RenderContext, ShoeCard};
pub use html::html_escape;
pub use node::{Element, Node};
pub use page::{HeadContent, Page};
pub use style::{card_stylesheet, VariantStyle};

/// Render a list of items as a complete HTML page.
pub fn render_page(title: &str, items: &[shoe_catalog::CatalogItem], ctx: &RenderContext) -> String {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_style(card_stylesheet(&ctx.palette, &ctx.weights));

    Page::new(head).render(&assemble_grid(items, ctx).to_html())
}
