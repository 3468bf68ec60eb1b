//! Command-line flags.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "transit-pass", version, about = "Transit ticket screen for the terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Store file for name, journey and photo (overrides config)
    #[arg(long, value_name = "PATH", conflicts_with = "ephemeral")]
    pub store: Option<PathBuf>,

    /// Keep everything in memory; nothing survives exit
    #[arg(long)]
    pub ephemeral: bool,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Fold flag overrides into a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.store {
            config.store.path = Some(path.clone());
        }
        if self.no_splash {
            config.display.splash_ms = 0;
        }
    }
}
