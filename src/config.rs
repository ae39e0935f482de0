//! Server configuration.
//!
//! Values come from built-in defaults, then an optional YAML file, then
//! command-line flags or their environment variables. Later layers win.
//!
//! ```yaml
//! listen_addr: "localhost:4221"
//! directory: /tmp/files
//! dispatch: spawn
//! ```

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use serde::Deserialize;

use crate::server::dispatch::DispatchMode;

pub const DEFAULT_LISTEN_ADDR: &str = "localhost:4221";

/// Command-line surface.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "tinyhttpd", version, about = "Minimal HTTP/1.1 server")]
pub struct Cli {
    /// YAML file with server settings
    #[arg(long, env = "TINYHTTPD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "LISTEN")]
    pub listen: Option<String>,

    /// Directory served under /files/
    #[arg(long, env = "DIRECTORY")]
    pub directory: Option<PathBuf>,

    /// How accepted connections are handled
    #[arg(long, env = "DISPATCH", value_enum)]
    pub dispatch: Option<DispatchMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub listen_addr: String,
    pub directory: Option<PathBuf>,
    pub dispatch: DispatchMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            directory: None,
            dispatch: DispatchMode::default(),
        }
    }
}

impl Config {
    /// Builds the configuration from the process arguments.
    pub fn load() -> anyhow::Result<Self> {
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> anyhow::Result<Self> {
        let mut cfg = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(listen) = cli.listen {
            cfg.listen_addr = listen;
        }
        if let Some(directory) = cli.directory {
            cfg.directory = Some(directory);
        }
        if let Some(dispatch) = cli.dispatch {
            cfg.dispatch = dispatch;
        }

        Ok(cfg)
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml_str(raw: &str) -> anyhow::Result<Self> {
        let cfg = serde_yaml::from_str(raw).context("failed to parse YAML")?;
        Ok(cfg)
    }
}
