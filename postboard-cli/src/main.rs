//! postboard CLI - runs and maintains the posts API
//!
//! - `serve`: HTTP API over the SQLite posts table (optionally hosting the client)
//! - `seed`: insert sample posts into an empty store
//! - `config`: inspect or create `~/.postboard/config.toml`
//! - `completions`: shell completion scripts

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

use config::PostboardConfig;
use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "postboard",
    author,
    version,
    about = "CRUD API server for posts backed by SQLite"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Insert sample posts if the store is empty
    Seed(commands::seed::SeedArgs),
    /// Manage postboard configuration (init, show, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap reads env-backed flags
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // `config` must work even when the file is broken
    match cli.command {
        Commands::Config(args) => config::run_config(args),
        command => run(command, cli.debug).await,
    }
}

async fn run(command: Commands, debug: bool) -> Result<()> {
    let file_config = PostboardConfig::load()?;

    tracing_setup::init(&TracingConfig {
        debug,
        level: file_config.log_level.clone(),
    })
    .ok();

    match command {
        Commands::Serve(args) => commands::run_serve(args, &file_config).await,
        Commands::Seed(args) => commands::run_seed(args, &file_config).await,
        Commands::Completions(args) => run_completions(args),
        Commands::Config(args) => config::run_config(args),
    }
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());
    Ok(())
}
