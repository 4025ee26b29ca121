//! Shoe card CLI - render catalog feeds as product cards.
//!
//! Commands:
//! - `shoecard render` - Render a feed to an HTML page or fragment
//! - `shoecard classify` - Show each item's display variant and banner
//! - `shoecard config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{ClassifyArgs, ConfigArgs, ConfigCommand, RenderArgs};

/// Shoe card CLI - render and inspect catalog product cards
#[derive(Parser)]
#[command(name = "shoecard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a catalog feed to HTML
    Render(RenderArgs),

    /// Print the display variant of every item
    Classify(ClassifyArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: bool, json: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "shoecard={lvl},shoe_card={lvl},shoe_catalog={lvl}",
            lvl = default_level
        )
        .into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config. `config init` must still run when the current file is broken.
    let lenient = matches!(
        &cli.command,
        Commands::Config(ConfigArgs {
            command: ConfigCommand::Init { .. }
        })
    );
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone(), lenient) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Classify(args) => commands::classify::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
