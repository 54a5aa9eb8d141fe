//! Session command store
//!
//! Remembers the last command extracted for each session so a render that
//! finds nothing new in the transcript can still show it.

mod file;
#[cfg(test)]
mod memory;
mod retention;

use std::path::Path;

use crate::error::CacheError;

pub(crate) use file::{CacheEntry, FileStore, default_cache_dir};
#[cfg(test)]
pub(crate) use memory::MemoryStore;
pub(crate) use retention::{PruneReport, RetentionPolicy};

/// Identifies one cache entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum SessionKey {
    /// Transcript file stem, e.g. "session-abc123" for "session-abc123.jsonl"
    Session(String),
    /// Shared slot for hosts that send no transcript path
    Fallback,
}

impl SessionKey {
    pub(crate) fn from_transcript(transcript: Option<&Path>) -> Self {
        transcript
            .filter(|p| !p.as_os_str().is_empty())
            .and_then(Path::file_stem)
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .map(|s| SessionKey::Session(s.to_string()))
            .unwrap_or(SessionKey::Fallback)
    }

    /// Short label used in `cache list`
    pub(crate) fn label(&self) -> &str {
        match self {
            SessionKey::Session(id) => id,
            SessionKey::Fallback => "(no transcript)",
        }
    }
}

/// Key-value storage for the last command of each session
pub(crate) trait CommandStore {
    fn get(&self, key: &SessionKey) -> Result<Option<String>, CacheError>;

    fn put(&mut self, key: &SessionKey, command: &str) -> Result<(), CacheError>;
}
