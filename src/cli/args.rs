//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;

use crate::cache::{RetentionPolicy, default_cache_dir};
use crate::config::Config;

use super::commands::Commands;

#[derive(Debug, Parser)]
#[command(name = "claudeflow")]
#[command(about = "Status line for Claude Code showing the last workflow command", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// Directory holding the per-session command cache (default: system temp dir)
    #[arg(long, global = true, env = "CLAUDEFLOW_CACHE_DIR", value_name = "DIR")]
    pub(crate) cache_dir: Option<PathBuf>,

    /// Config file to use instead of the default locations
    #[arg(long, global = true, env = "CLAUDEFLOW_CONFIG", value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Output as JSON (cache list)
    #[arg(short, long, global = true)]
    pub(crate) json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub(crate) no_color: bool,

    /// Write debug diagnostics to stderr
    #[arg(long, global = true)]
    pub(crate) debug: bool,

    /// Append the model name to the status line
    #[arg(long, global = true)]
    pub(crate) show_model: bool,

    /// Append the git branch to the status line
    #[arg(long, global = true)]
    pub(crate) show_branch: bool,

    #[arg(skip)]
    pub(crate) retention: RetentionPolicy,

    #[arg(skip = true)]
    pub(crate) auto_prune: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // Boolean flags: config only applies if CLI left them unset
        if !self.debug && config.debug {
            self.debug = true;
        }
        if !self.show_model && config.show_model {
            self.show_model = true;
        }
        if !self.show_branch && config.show_branch {
            self.show_branch = true;
        }

        if self.cache_dir.is_none() {
            self.cache_dir = config.cache_dir.clone();
        }

        // Zero disables a limit rather than expiring everything
        if let Some(n) = config.retention_days {
            self.retention.set_max_age_days(n);
        }
        if let Some(n) = config.max_entries {
            self.retention.set_max_entries(n);
        }
        if let Some(auto_prune) = config.auto_prune {
            self.auto_prune = auto_prune;
        }

        self
    }

    pub(crate) fn cache_dir(&self) -> PathBuf {
        self.cache_dir.clone().unwrap_or_else(default_cache_dir)
    }

    pub(crate) fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}
