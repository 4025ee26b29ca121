//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { path, force } => init_config(&path, force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
        None => ctx.output.info("No config file found, using defaults"),
    }

    let config = &ctx.config;
    println!("[catalog]");
    ctx.output.kv("currency", &config.catalog.currency);
    ctx.output.kv("recency_days", &config.catalog.recency_days.to_string());

    println!("[page]");
    ctx.output.kv("title", &config.page.title);

    println!("[palette]");
    ctx.output.kv("primary", &config.palette.primary);
    ctx.output.kv("secondary", &config.palette.secondary);
    ctx.output.kv("gray_700", &config.palette.gray_700);
    ctx.output.kv("gray_900", &config.palette.gray_900);

    println!("[weights]");
    ctx.output.kv("medium", &config.weights.medium.to_string());

    Ok(())
}

fn init_config(path: &str, force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.resolve_path(path);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.currency() {
        errors.push(format!("{:#}", e));
    }
    if let Err(e) = ctx.config.recency_window() {
        errors.push(format!("{:#}", e));
    }
    if ctx.config.page.title.trim().is_empty() {
        errors.push("page.title must not be empty".to_string());
    }

    if errors.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }
    bail!("Configuration has {} error(s)", errors.len())
}
