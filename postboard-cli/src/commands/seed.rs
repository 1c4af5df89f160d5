//! Seed command: insert the sample posts into an empty store

use anyhow::{Context, Result};
use clap::Parser;

use postboard_server::db::{create_pool, migrations, seed_sample_posts};

use crate::config::PostboardConfig;

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Database URL (overrides config file)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

pub async fn run_seed(args: SeedArgs, file: &PostboardConfig) -> Result<()> {
    let database_url = args
        .database_url
        .unwrap_or_else(|| file.database_url().to_owned());

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare posts table")?;

    let inserted = seed_sample_posts(&pool)
        .await
        .context("Failed to seed sample posts")?;

    println!("Seeded {} posts", inserted);
    Ok(())
}
