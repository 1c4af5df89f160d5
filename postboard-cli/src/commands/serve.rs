//! HTTP server command
//!
//! Resolves settings (flag > env > config file > default), prepares the
//! store, and runs the API until shutdown.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::db::{create_pool, migrations, seed_sample_posts};
use postboard_server::http::{run_server, ServerConfig};

use crate::config::PostboardConfig;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:5000)
    #[arg(long, short = 'b', env = "POSTBOARD_BIND")]
    pub bind: Option<SocketAddr>,

    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Origins allowed by CORS; repeat for several (replaces the configured list)
    #[arg(long = "cors-origin", value_name = "ORIGIN")]
    pub cors_origins: Vec<String>,

    /// Directory with the single-page client to serve
    #[arg(long, env = "POSTBOARD_CLIENT_DIR")]
    pub client_dir: Option<PathBuf>,

    /// Insert sample posts if the store is empty
    #[arg(long)]
    pub seed: bool,
}

/// Fully resolved serve settings
#[derive(Debug, Clone)]
pub struct ServeSettings {
    pub database_url: String,
    pub seed: bool,
    pub server: ServerConfig,
}

impl ServeSettings {
    pub fn resolve(args: ServeArgs, file: &PostboardConfig) -> Self {
        let defaults = ServerConfig::default();
        let section = &file.server;

        let cors_origins = if args.cors_origins.is_empty() {
            section
                .cors_origins
                .clone()
                .unwrap_or(defaults.cors_origins)
        } else {
            args.cors_origins
        };

        Self {
            database_url: args
                .database_url
                .unwrap_or_else(|| file.database_url().to_owned()),
            seed: args.seed || section.seed.unwrap_or(false),
            server: ServerConfig {
                bind_addr: args.bind.or(section.bind).unwrap_or(defaults.bind_addr),
                cors_origins,
                client_dir: args.client_dir.or_else(|| section.client_dir.clone()),
            },
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs, file: &PostboardConfig) -> Result<()> {
    let settings = ServeSettings::resolve(args, file);

    tracing::info!(database = %settings.database_url, "Starting postboard server on {}", settings.server.bind_addr);

    let pool = create_pool(&settings.database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare posts table")?;

    if settings.seed {
        seed_sample_posts(&pool)
            .await
            .context("Failed to seed sample posts")?;
    }

    // Blocks until shutdown
    run_server(pool, settings.server)
        .await
        .context("Server error")?;

    Ok(())
}
