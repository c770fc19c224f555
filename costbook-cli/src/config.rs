use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Ledger used when no `--ledger` flag is given.
    #[serde(default = "default_ledger_path")]
    pub ledger_path: PathBuf,
    /// Prefix for printed amounts, e.g. "$" or "€".
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Log filter used when RUST_LOG is unset, e.g. "warn" or "costbook=debug".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_ledger_path() -> PathBuf {
    PathBuf::from("costbook-ledger.toml")
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ledger_path: default_ledger_path(),
            currency_symbol: default_currency_symbol(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    pub fn config_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("costbook")
            .join("config.toml"))
    }

    /// Load settings from the config file (if any), overridden by
    /// `COSTBOOK_*` environment variables.
    pub fn load() -> Result<Self> {
        let path = Self::config_path().ok();
        Self::load_from(path.as_deref())
    }

    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix("COSTBOOK").prefix_separator("_"))
            .build()
            .context("Failed to read settings")?;

        settings
            .try_deserialize()
            .context("Failed to parse settings")
    }

    /// Write the default settings file unless one already exists.
    pub fn ensure_config_file() -> Result<PathBuf> {
        let path = Self::config_path()?;
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let raw = toml::to_string_pretty(&Self::default())?;
            std::fs::write(&path, raw)
                .with_context(|| format!("Failed to write config at {}", path.display()))?;
        }
        Ok(path)
    }
}
