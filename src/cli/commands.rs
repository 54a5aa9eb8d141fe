//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Read the session JSON on stdin and print the status line (default)
    Statusline,
    /// Inspect or clean the per-session command cache
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

/// Cache maintenance subcommands
#[derive(Debug, Subcommand)]
pub(crate) enum CacheCommands {
    /// List cached commands, newest first
    List,
    /// Remove entries outside the retention policy
    ///
    /// Only files named `statusline-*.txt` directly in the cache directory are
    /// considered. With the default `/tmp` directory this includes files other
    /// status line scripts write under the same names; pass `--cache-dir` to
    /// limit pruning to a directory claudeflow owns. A limit of 0 disables it.
    Prune {
        /// Remove entries not updated for this many days (overrides config)
        #[arg(long, value_name = "DAYS")]
        older_than_days: Option<u64>,

        /// Keep at most this many entries (overrides config)
        #[arg(long, value_name = "N")]
        max_entries: Option<usize>,

        /// Show what would be removed without deleting anything
        #[arg(long)]
        dry_run: bool,
    },
}
