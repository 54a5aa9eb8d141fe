/// Longest command shown before truncation, in characters
pub(crate) const MAX_COMMAND_LENGTH: usize = 60;

/// Marker appended to a truncated command
pub(crate) const ELLIPSIS: char = '…';

/// Only this many trailing transcript lines are scanned
pub(crate) const TRANSCRIPT_TAIL_LINES: usize = 200;

/// Cache directory when none is configured
#[cfg(unix)]
pub(crate) const DEFAULT_CACHE_DIR: &str = "/tmp";

/// Prefix and suffix of every cache file name: "statusline-<session>.txt"
pub(crate) const CACHE_FILE_PREFIX: &str = "statusline-";
pub(crate) const CACHE_FILE_SUFFIX: &str = ".txt";

/// Cache entry shared by all sessions that arrive without a transcript path
pub(crate) const FALLBACK_CACHE_FILE: &str = "statusline-last-command.txt";

/// Model label when the host does not send one
pub(crate) const DEFAULT_MODEL_NAME: &str = "Claude";

/// Label printed before the command icon
pub(crate) const STATUS_LABEL: &str = "Claudeflow";

pub(crate) const READY_STATUS: &str = "Claudeflow: ✓ Ready to start";

/// Printed when rendering fails outright
pub(crate) const FALLBACK_STATUS: &str = "✓ Claude Code";

pub(crate) const UNKNOWN_ICON: &str = "❓";

pub(crate) const DEFAULT_RETENTION_DAYS: u64 = 30;
pub(crate) const DEFAULT_MAX_ENTRIES: usize = 500;
