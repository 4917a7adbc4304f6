//! HTTP server command
//!
//! Opens the store, creates missing tables and serves until shutdown.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use shopdb_server::{run_server, Gateway, ServerConfig};

use crate::config::ShopConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', env = "SHOPDB_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum pooled store connections
    #[arg(long)]
    pub max_connections: Option<u32>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Fully resolved serve settings
#[derive(Debug)]
pub struct ServeSettings {
    pub server: ServerConfig,
    pub database_url: String,
    pub max_connections: u32,
}

impl ServeArgs {
    /// Layer command line values over the config file.
    pub fn resolve(self, config: ShopConfig) -> ServeSettings {
        let file = config.server;
        ServeSettings {
            server: ServerConfig {
                bind_addr: self.bind.unwrap_or(file.bind),
                cors_permissive: self.cors_permissive || file.cors_permissive,
                request_timeout: Duration::from_secs(self.timeout.unwrap_or(file.timeout_secs)),
            },
            database_url: self.database_url.unwrap_or(file.database_url),
            max_connections: self.max_connections.unwrap_or(file.max_connections),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ShopConfig::load(config_path)?;
    let settings = args.resolve(config);

    tracing::info!(
        database = %settings.database_url,
        "Starting shopdb server on {}",
        settings.server.bind_addr
    );

    let gateway = Gateway::connect(&settings.database_url, settings.max_connections)
        .await
        .context("Failed to open database")?;

    // Run server (blocks until shutdown)
    run_server(gateway, settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
