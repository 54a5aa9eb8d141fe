use std::io::{Read, Write};

use tracing::debug;

use crate::cache::FileStore;
use crate::cli::{CacheCommands, Cli, Commands};
use crate::consts::FALLBACK_STATUS;
use crate::error::AppError;
use crate::output::{
    IconTable, StatusLineOptions, format_status_line, output_cache_json, print_cache_table,
    print_prune_report,
};
use crate::session::SessionDescriptor;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) icons: &'a IconTable,
}

impl CommandContext<'_> {
    fn store(&self) -> FileStore {
        let store = FileStore::new(self.cli.cache_dir());
        if self.cli.auto_prune {
            store.with_auto_prune(self.cli.retention)
        } else {
            store
        }
    }
}

/// Read the session descriptor from `input` and build the status line
fn render_status_line(
    input: &mut dyn Read,
    ctx: &CommandContext<'_>,
) -> Result<String, AppError> {
    let mut raw = Vec::new();
    input.read_to_end(&mut raw).map_err(AppError::Stdin)?;

    // Invalid UTF-8 ends up as invalid JSON, i.e. an empty descriptor
    let descriptor = SessionDescriptor::parse(&String::from_utf8_lossy(&raw));
    debug!("Session: {:?}", descriptor);

    let mut store = ctx.store();
    let options = StatusLineOptions {
        icons: ctx.icons,
        show_model: ctx.cli.show_model,
        show_branch: ctx.cli.show_branch,
        git_dir: None,
    };
    Ok(format_status_line(&descriptor, &mut store, &options))
}

/// Always prints exactly one line, whatever goes wrong
fn handle_statusline(ctx: &CommandContext<'_>) {
    let line = match render_status_line(&mut std::io::stdin().lock(), ctx) {
        Ok(line) => line,
        Err(err) => {
            debug!("Status line failed: {}", err);
            FALLBACK_STATUS.to_string()
        }
    };
    // The host may close the pipe early; nothing useful is left to do then
    let _ = writeln!(std::io::stdout().lock(), "{line}");
}

fn handle_cache_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let store = ctx.store();
    let entries = store.entries()?;
    if ctx.cli.json {
        println!("{}", output_cache_json(&entries)?);
    } else if entries.is_empty() {
        println!("No cached commands in {}.", store.dir().display());
    } else {
        print_cache_table(&entries, ctx.cli.use_color());
    }
    Ok(())
}

fn handle_cache_prune(
    ctx: &CommandContext<'_>,
    older_than_days: Option<u64>,
    max_entries: Option<usize>,
    dry_run: bool,
) -> Result<(), AppError> {
    let mut policy = ctx.cli.retention;
    if let Some(n) = older_than_days {
        policy.set_max_age_days(n);
    }
    if let Some(n) = max_entries {
        policy.set_max_entries(n);
    }

    let report = ctx.store().prune(&policy, dry_run)?;
    print_prune_report(&report, dry_run);
    Ok(())
}

/// Dispatch the parsed command; returns the process exit code
pub(crate) fn run(ctx: &CommandContext<'_>) -> i32 {
    let result = match &ctx.cli.command {
        None | Some(Commands::Statusline) => {
            handle_statusline(ctx);
            Ok(())
        }
        Some(Commands::Cache { command }) => match command {
            CacheCommands::List => handle_cache_list(ctx),
            CacheCommands::Prune {
                older_than_days,
                max_entries,
                dry_run,
            } => handle_cache_prune(ctx, *older_than_days, *max_entries, *dry_run),
        },
    };

    match result {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}
