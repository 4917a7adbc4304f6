//! Configuration file loading
//!
//! Precedence, lowest first: built-in defaults, `~/.shopdb/config.toml` (or
//! `--config PATH`), environment (`.env` included), command line flags.
//! Environment and flags are resolved by clap; this module covers the first two.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default SQLite database, relative to the working directory
pub const DEFAULT_DATABASE_URL: &str = "sqlite://shopdb.db";

/// Top-level config file layout
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShopConfig {
    pub server: ServerSection,
}

/// `[server]` table
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub database_url: String,
    pub timeout_secs: u64,
    pub max_connections: u32,
    pub cors_permissive: bool,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            timeout_secs: 30,
            max_connections: shopdb_server::db::pool::DEFAULT_MAX_CONNECTIONS,
            cors_permissive: false,
        }
    }
}

impl ShopConfig {
    /// Get config file path: ~/.shopdb/config.toml
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shopdb/config.toml")
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default path is read if
    /// present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    tracing::debug!("no config at {:?}, using defaults", path);
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config = Self::from_toml_str(&content)
            .context(format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!("loaded config from {:?}", path);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid TOML")
    }
}
