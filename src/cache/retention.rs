use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use crate::consts::{DEFAULT_MAX_ENTRIES, DEFAULT_RETENTION_DAYS};

const SECONDS_PER_DAY: u64 = 86_400;

/// Limits applied to cache entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RetentionPolicy {
    /// Entries not modified for longer than this are removed
    pub(crate) max_age: Option<Duration>,
    /// Only the most recently modified entries up to this count are kept
    pub(crate) max_entries: Option<usize>,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            max_age: Some(days(DEFAULT_RETENTION_DAYS)),
            max_entries: Some(DEFAULT_MAX_ENTRIES),
        }
    }
}

fn days(n: u64) -> Duration {
    Duration::from_secs(n.saturating_mul(SECONDS_PER_DAY))
}

impl RetentionPolicy {
    /// Set the age limit in days; 0 means no age limit
    pub(crate) fn set_max_age_days(&mut self, n: u64) {
        self.max_age = (n > 0).then(|| days(n));
    }

    /// Set the entry cap; 0 means no cap
    pub(crate) fn set_max_entries(&mut self, n: usize) {
        self.max_entries = (n > 0).then_some(n);
    }
}

#[derive(Debug, Default)]
pub(crate) struct PruneReport {
    pub(crate) scanned: usize,
    pub(crate) removed: Vec<PathBuf>,
}

/// Pick the files `policy` no longer allows, oldest last-modified first.
/// `keep` is never selected and counts toward the entry cap.
pub(super) fn select_expired(
    mut files: Vec<(PathBuf, SystemTime)>,
    policy: &RetentionPolicy,
    now: SystemTime,
    keep: Option<&Path>,
) -> Vec<PathBuf> {
    if let Some(keep) = keep
        && let Some(pos) = files.iter().position(|(p, _)| p == keep)
    {
        files.remove(pos);
        // The kept entry takes one slot of the cap
        let cap = policy.max_entries.map(|max| max.saturating_sub(1));
        let policy = RetentionPolicy {
            max_entries: cap,
            ..*policy
        };
        return select_expired(files, &policy, now, None);
    }

    // Newest first so the count limit keeps the head
    files.sort_by(|a, b| b.1.cmp(&a.1));

    let mut expired = Vec::new();
    let mut kept = 0usize;
    for (path, modified) in files {
        // Timestamps in the future count as fresh
        let age = now.duration_since(modified).unwrap_or_default();
        let too_old = policy.max_age.is_some_and(|max| age > max);
        let over_cap = policy.max_entries.is_some_and(|max| kept >= max);
        if too_old || over_cap {
            expired.push(path);
        } else {
            kept += 1;
        }
    }
    expired.reverse();
    expired
}
