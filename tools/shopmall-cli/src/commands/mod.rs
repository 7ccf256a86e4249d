//! CLI command implementations.

pub mod config;
pub mod login;
pub mod products;
pub mod shop;

use clap::{Args, Subcommand};

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only list discounted products.
    #[arg(long)]
    pub on_sale: bool,
}

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Read session commands from a file instead of stdin.
    #[arg(short, long)]
    pub script: Option<String>,
}

/// Arguments for the login command.
#[derive(Args)]
#[command(group(clap::ArgGroup::new("account").required(true).args(["email", "phone"])))]
pub struct LoginArgs {
    /// Log in with an email address.
    #[arg(long)]
    pub email: Option<String>,

    /// Log in with a mobile number.
    #[arg(long)]
    pub phone: Option<String>,

    /// Account password.
    #[arg(short, long, default_value = "")]
    pub password: String,

    /// Keep the session signed in.
    #[arg(long)]
    pub remember_me: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
