//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use shoe_catalog::{load_feed, CatalogItem, Variant};

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Path to a JSON feed of catalog items.
    pub feed: String,

    /// Write HTML to this file instead of stdout.
    #[arg(short, long)]
    pub out: Option<String>,

    /// Emit only the card grid, without the page shell.
    #[arg(long)]
    pub fragment: bool,

    /// Emit the grid's render tree as JSON instead of HTML.
    #[arg(long, conflicts_with = "fragment")]
    pub tree_json: bool,

    /// Evaluate recency at this RFC 3339 instant instead of now.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Path to a JSON feed of catalog items.
    pub feed: String,

    /// Only list items with this variant (default, on-sale, new-release).
    #[arg(long)]
    pub only: Option<Variant>,

    /// Evaluate recency at this RFC 3339 instant instead of now.
    #[arg(long)]
    pub now: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default config file.
    Init {
        /// Where to write it.
        #[arg(long, default_value = "shoecard.toml")]
        path: String,

        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Check that config values are usable.
    Validate,
}

/// Parse `--now`, defaulting to the current time.
fn resolve_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now timestamp: {}", raw)),
        None => Ok(Utc::now()),
    }
}

/// Read and parse a feed file using the configured currency.
fn read_feed(path: &str, ctx: &Context) -> Result<Vec<CatalogItem>> {
    let full_path = ctx.resolve_path(path);
    let content = std::fs::read_to_string(&full_path)
        .with_context(|| format!("Failed to read feed: {}", full_path.display()))?;
    let items = load_feed(&content, ctx.config.currency()?)
        .with_context(|| format!("Failed to load feed: {}", full_path.display()))?;
    ctx.output
        .debug(&format!("Loaded {} item(s) from {}", items.len(), full_path.display()));
    Ok(items)
}
