//! Config file handling and the `config` subcommand
//!
//! The config file is optional: a missing file means defaults. A file that
//! exists but does not parse is an error.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

/// Database used when nothing else is configured
pub const DEFAULT_DATABASE_URL: &str = "sqlite://postboard.db";

/// Environment variable overriding the config file location
pub const CONFIG_PATH_ENV: &str = "POSTBOARD_CONFIG";

/// Contents of `~/.postboard/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PostboardConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub server: ServerSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<SocketAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_origins: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<bool>,
}

impl PostboardConfig {
    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load from `path`, falling back to defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;

        toml::from_str(&content).context(format!("Failed to parse config file (invalid TOML): {:?}", path))
    }

    /// Config file path: $POSTBOARD_CONFIG or ~/.postboard/config.toml
    pub fn config_path() -> PathBuf {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".postboard/config.toml")
    }

    /// Database URL from the file, or the default.
    pub fn database_url(&self) -> &str {
        self.server
            .database_url
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_URL)
    }
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a commented config template
    Init(InitArgs),
    /// Print the config file contents as loaded
    Show,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = PostboardConfig::config_path();

    if config_path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {:?}\n\nUse --force to overwrite",
            config_path
        );
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .context(format!("Failed to create config directory: {:?}", parent))?;
    }

    let template = include_str!("../../.postboard-config.template.toml");
    std::fs::write(&config_path, template)
        .context(format!("Failed to write config file: {:?}", config_path))?;

    println!("Created config at: {}", config_path.display());
    Ok(())
}

fn run_show() -> Result<()> {
    let config = PostboardConfig::load()?;

    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", PostboardConfig::config_path().display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = PostboardConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, PostboardConfig::default());
        assert_eq!(config.database_url(), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn template_parses() {
        let config: PostboardConfig =
            toml::from_str(include_str!("../../.postboard-config.template.toml")).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert_eq!(config.server.bind, Some("127.0.0.1:5000".parse().unwrap()));
        assert_eq!(config.server.cors_origins.as_ref().map(Vec::len), Some(2));
        assert_eq!(config.server.seed, Some(false));
        assert!(config.server.client_dir.is_none());
    }

    #[test]
    fn partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\ndatabase_url = \"sqlite://other.db\"\n").unwrap();

        let config = PostboardConfig::load_from(&path).unwrap();
        assert_eq!(config.database_url(), "sqlite://other.db");
        assert!(config.server.bind.is_none());
        assert!(config.log_level.is_none());
    }

    #[test]
    fn invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nbind = \"not an address\"\n").unwrap();

        assert!(PostboardConfig::load_from(&path).is_err());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nprot = 5000\n").unwrap();

        assert!(PostboardConfig::load_from(&path).is_err());
    }

    #[test]
    fn serializes_only_set_keys() {
        let config = PostboardConfig {
            log_level: Some("debug".into()),
            ..PostboardConfig::default()
        };
        let out = toml::to_string_pretty(&config).unwrap();
        assert!(out.contains("log_level = \"debug\""));
        assert!(!out.contains("database_url"));
    }
}
