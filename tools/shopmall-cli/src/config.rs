//! CLI configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopmall_commerce::PriceFormat;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ShopConfig {
    /// Storefront branding.
    #[serde(default)]
    pub storefront: StorefrontConfig,

    /// Price display.
    #[serde(default)]
    pub pricing: PriceFormat,

    /// Catalog source.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ShopConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

/// Storefront branding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Name shown in the header.
    #[serde(default = "default_store_name")]
    pub name: String,
}

fn default_store_name() -> String {
    "ShopMall".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
        }
    }
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in sample catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Log output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Default filter directive (e.g. "info", "shopmall_commerce=debug").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate a default shopmall.toml config file.
pub fn generate_default_config() -> String {
    r#"# ShopMall storefront configuration

[storefront]
name = "ShopMall"

[pricing]
symbol = "NT$"
decimal_places = 0
thousands_separator = ","

[catalog]
# JSON array of products; the built-in sample catalog is used when unset.
# path = "catalog.json"

[logging]
# Filter directive; SHOPMALL_LOG overrides it.
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: ShopConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, ShopConfig::default());
    }

    #[test]
    fn test_partial_config() {
        let config: ShopConfig = toml::from_str(
            r#"
            [pricing]
            symbol = "$"
            decimal_places = 2

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.storefront.name, "ShopMall");
        assert_eq!(config.pricing.symbol, "$");
        assert_eq!(config.pricing.thousands_separator, ",");
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_json_and_toml() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("shopmall.toml");
        std::fs::write(&toml_path, "[storefront]\nname = \"Corner Shop\"\n").unwrap();
        let config = ShopConfig::load(toml_path.to_str().unwrap()).unwrap();
        assert_eq!(config.storefront.name, "Corner Shop");

        let json_path = dir.path().join("shopmall.json");
        std::fs::write(&json_path, r#"{"catalog": {"path": "items.json"}}"#).unwrap();
        let config = ShopConfig::load(json_path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog.path, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(ShopConfig::load("/nonexistent/shopmall.toml").is_err());
    }
}
