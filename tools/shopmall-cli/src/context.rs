//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use shopmall_commerce::catalog::{CatalogProvider, StaticCatalog};

use crate::config::ShopConfig;
use crate::output::Output;

/// Config file names searched for, in order, in each directory.
pub const CONFIG_NAMES: [&str; 3] = ["shopmall.toml", ".shopmall.toml", "shopmall.json"];

/// Execution context for CLI commands.
pub struct Context {
    /// Storefront configuration.
    pub config: ShopConfig,
    /// Where the config came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (ShopConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (ShopConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(ShopConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = ShopConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Load the configured catalog, or the built-in sample.
    pub fn catalog(&self) -> Result<StaticCatalog> {
        let Some(path) = &self.config.catalog.path else {
            return Ok(StaticCatalog::sample());
        };

        let path = self.resolve_path(path);
        let catalog = StaticCatalog::load(&path)
            .with_context(|| format!("Failed to load catalog: {}", path.display()))?;
        tracing::debug!(path = %path.display(), products = catalog.products().len(), "catalog loaded");
        Ok(catalog)
    }

    /// Resolve a path relative to the config file, or the working directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone());
        base.join(path)
    }
}
