use std::path::Path;

use tracing::debug;

use crate::cache::CommandStore;
use crate::consts::{DEFAULT_MODEL_NAME, READY_STATUS, STATUS_LABEL};
use crate::output::icons::IconTable;
use crate::session::SessionDescriptor;
use crate::transcript::{extract_last_command, get_cached_command};
use crate::utils::current_branch;

pub(crate) struct StatusLineOptions<'a> {
    pub(crate) icons: &'a IconTable,
    /// Append the model name
    pub(crate) show_model: bool,
    /// Append the git branch of `git_dir` (current directory when `None`)
    pub(crate) show_branch: bool,
    pub(crate) git_dir: Option<&'a Path>,
}

/// Build the single status line for one render
/// Format: "Claudeflow: 💡 /ideate my task" or "Claudeflow: ✓ Ready to start"
pub(crate) fn format_status_line(
    descriptor: &SessionDescriptor,
    store: &mut dyn CommandStore,
    options: &StatusLineOptions<'_>,
) -> String {
    let transcript = descriptor.transcript();
    let command = extract_last_command(transcript, store)
        .or_else(|| get_cached_command(transcript, store));

    let mut parts = vec![match command {
        Some(cmd) => format!("{STATUS_LABEL}: {} {cmd}", options.icons.icon_for(&cmd)),
        None => READY_STATUS.to_string(),
    }];

    if options.show_model {
        parts.push(
            descriptor
                .model_name
                .as_deref()
                .unwrap_or(DEFAULT_MODEL_NAME)
                .to_string(),
        );
    }

    if options.show_branch {
        match current_branch(options.git_dir) {
            Ok(Some(branch)) => parts.push(branch),
            Ok(None) => {}
            Err(err) => debug!("No git branch: {}", err),
        }
    }

    parts.join(" | ")
}
