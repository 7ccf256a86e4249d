//! ShopMall CLI - Browse the catalog and fill a cart from the terminal.
//!
//! Commands:
//! - `shopmall products` - List the catalog
//! - `shopmall shop` - Interactive shopping session
//! - `shopmall login` - Validate login details
//! - `shopmall config` - Manage configuration

mod commands;
mod config;
mod context;
mod login;
mod output;
mod pages;
mod telemetry;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, LoginArgs, ProductsArgs, ShopArgs};

/// ShopMall CLI - Browse products and manage a shopping cart
#[derive(Parser)]
#[command(name = "shopmall")]
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
    /// List the product catalog
    Products(ProductsArgs),

    /// Start an interactive shopping session
    Shop(ShopArgs),

    /// Validate login details
    Login(LoginArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    telemetry::init(&ctx.config.logging, cli.verbose, cli.json);
    tracing::debug!(config = ?ctx.config_path, "context loaded");

    let result = match cli.command {
        Commands::Products(args) => commands::products::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Login(args) => commands::login::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
