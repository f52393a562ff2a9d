/*
 *  Copyright 2025-2026 Colliery Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! Clubhouse server - HTTP API for curling club member registration.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use clubhouse::Registry;
use clubhouse_server::config::{ConfigLoader, Environment, Validate};
use clubhouse_server::{build_router, logging, run, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Clubhouse - member registration service for curling clubs
#[derive(Parser)]
#[command(name = "clubhouse-server")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (can also be set via CLUBHOUSE_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deployment mode; production hides internal error details
    #[arg(long, env = "CLUBHOUSE_ENV", value_enum)]
    env: Option<Environment>,

    /// Address to bind
    #[arg(long, env = "CLUBHOUSE_BIND")]
    bind: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "CLUBHOUSE_PORT")]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the resolved configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = ConfigLoader::new()
        .load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;

    if let Some(environment) = cli.env {
        config.environment = environment;
    }
    if let Some(bind) = cli.bind {
        config.server.bind_address = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    config.validate().context("Invalid configuration")?;

    if cli.print_config {
        let output =
            toml::to_string_pretty(&config).context("Failed to serialize configuration as TOML")?;
        println!("{}", output);
        return Ok(());
    }

    logging::init_tracing(&config.logging, cli.verbose)?;
    info!(environment = ?config.environment, "Starting clubhouse server");

    let registry = Arc::new(
        Registry::seeded(&config.seed_users).context("Failed to load seed users")?,
    );

    let listener = TcpListener::bind(config.server.listen_address())
        .await
        .with_context(|| format!("Failed to bind {}", config.server.listen_address()))?;

    let drain_timeout = Duration::from_secs(config.server.graceful_shutdown_timeout_secs);
    let state = AppState::new(registry, config.server, config.environment);

    run(listener, build_router(state), drain_timeout).await
}
