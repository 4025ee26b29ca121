//! Render a feed to HTML.

use std::fs;

use anyhow::{Context as _, Result};
use shoe_card::{assemble_grid, render_page, RenderContext};
use shoe_catalog::CatalogItem;

use super::{read_feed, resolve_now, RenderArgs};
use crate::context::Context;

/// What the render command produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Full HTML document.
    Page,
    /// Card grid markup only.
    Fragment,
    /// Render tree of the grid as JSON.
    TreeJson,
}

impl RenderMode {
    fn from_args(args: &RenderArgs) -> Self {
        if args.tree_json {
            RenderMode::TreeJson
        } else if args.fragment {
            RenderMode::Fragment
        } else {
            RenderMode::Page
        }
    }
}

/// Produce the command output for `items` without touching the filesystem.
pub fn render_output(
    items: &[CatalogItem],
    render_ctx: &RenderContext,
    title: &str,
    mode: RenderMode,
) -> Result<String> {
    let output = match mode {
        RenderMode::Page => render_page(title, items, render_ctx),
        RenderMode::Fragment => assemble_grid(items, render_ctx).to_html(),
        RenderMode::TreeJson => serde_json::to_string_pretty(&assemble_grid(items, render_ctx))
            .context("Failed to serialize render tree")?,
    };
    Ok(output)
}

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let mode = RenderMode::from_args(&args);
    let items = read_feed(&args.feed, ctx)?;
    let render_ctx = ctx.config.render_context(resolve_now(args.now.as_deref())?)?;

    let output = render_output(&items, &render_ctx, &ctx.config.page.title, mode)?;

    tracing::info!(cards = items.len(), mode = ?mode, "rendered catalog");

    match args.out {
        Some(out) => {
            let path = ctx.resolve_path(&out);
            fs::write(&path, &output)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            ctx.output.success(&format!(
                "Rendered {} card(s) to {}",
                items.len(),
                path.display()
            ));
        }
        None => println!("{}", output),
    }

    Ok(())
}
