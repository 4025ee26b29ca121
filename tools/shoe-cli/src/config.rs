//! CLI configuration.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shoe_card::RenderContext;
use shoe_catalog::{Currency, Palette, RecencyWindow, Weights};

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["shoecard.toml", ".shoecard.toml", "shoecard.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Feed interpretation.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page output.
    #[serde(default)]
    pub page: PageConfig,

    /// Color overrides.
    #[serde(default)]
    pub palette: Palette,

    /// Font weight overrides.
    #[serde(default)]
    pub weights: Weights,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Feed currency.
    pub fn currency(&self) -> Result<Currency> {
        self.catalog
            .currency
            .parse::<Currency>()
            .context("Invalid catalog.currency")
    }

    /// Recency window for new releases.
    pub fn recency_window(&self) -> Result<RecencyWindow> {
        RecencyWindow::days(self.catalog.recency_days).context("Invalid catalog.recency_days")
    }

    /// Build a render context evaluated at `now`.
    pub fn render_context(&self, now: DateTime<Utc>) -> Result<RenderContext> {
        Ok(RenderContext::at(now)
            .with_window(self.recency_window()?)
            .with_palette(self.palette.clone())
            .with_weights(self.weights))
    }
}

/// How catalog feeds are read and classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// ISO currency code of feed prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Days a release counts as new.
    #[serde(default = "default_recency_days")]
    pub recency_days: i64,
}

fn default_currency() -> String {
    Currency::default().code().to_string()
}

fn default_recency_days() -> i64 {
    RecencyWindow::default().len_days()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            recency_days: default_recency_days(),
        }
    }
}

/// Rendered page settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Shoe Catalog".to_string()
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

/// Generate a default shoecard.toml config file.
pub fn generate_default_config() -> String {
    let palette = Palette::default();
    format!(
        r#"# Shoe card configuration

[catalog]
currency = "USD"
recency_days = 30

[page]
title = "Shoe Catalog"

[palette]
# primary = "{primary}"
# secondary = "{secondary}"

[weights]
# medium = 600
"#,
        primary = palette.primary,
        secondary = palette.secondary,
    )
}
