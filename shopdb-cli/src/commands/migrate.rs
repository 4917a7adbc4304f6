//! Create the shop tables without starting the server

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use shopdb_server::Gateway;

use crate::config::ShopConfig;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_migrate(args: MigrateArgs, config_path: Option<&Path>) -> Result<()> {
    let config = ShopConfig::load(config_path)?;
    let database_url = args.database_url.unwrap_or(config.server.database_url);

    let gateway = Gateway::connect(&database_url, 1)
        .await
        .context(format!("Failed to migrate {}", database_url))?;
    gateway.pool().close().await;

    println!("Schema ready at {}", database_url);
    Ok(())
}
