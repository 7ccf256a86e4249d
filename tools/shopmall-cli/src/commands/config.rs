//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[storefront]");
    ctx.output.kv("name", &ctx.config.storefront.name);

    ctx.output.info("[pricing]");
    ctx.output.kv("symbol", &ctx.config.pricing.symbol);
    ctx.output
        .kv("decimal_places", &ctx.config.pricing.decimal_places.to_string());
    ctx.output.kv(
        "thousands_separator",
        &format!("{:?}", ctx.config.pricing.thousands_separator),
    );

    ctx.output.info("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(built-in sample)"),
    }

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output
        .kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created {}", config_path.display()));

    Ok(())
}
