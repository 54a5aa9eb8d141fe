use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tracing::debug;

#[cfg(unix)]
use crate::consts::DEFAULT_CACHE_DIR;
use crate::consts::{CACHE_FILE_PREFIX, CACHE_FILE_SUFFIX, FALLBACK_CACHE_FILE};
use crate::error::CacheError;

use super::retention::{PruneReport, RetentionPolicy, select_expired};
use super::{CommandStore, SessionKey};

/// `/tmp` on unix, the system temp dir elsewhere
#[cfg(unix)]
pub(crate) fn default_cache_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CACHE_DIR)
}

#[cfg(not(unix))]
pub(crate) fn default_cache_dir() -> PathBuf {
    std::env::temp_dir()
}

/// One cached command on disk
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    pub(crate) key: SessionKey,
    pub(crate) path: PathBuf,
    pub(crate) command: String,
    pub(crate) modified: SystemTime,
}

/// Stores each session's command in `<dir>/statusline-<session>.txt`
#[derive(Debug, Clone)]
pub(crate) struct FileStore {
    dir: PathBuf,
    auto_prune: Option<RetentionPolicy>,
}

impl FileStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            auto_prune: None,
        }
    }

    /// Prune with `policy` whenever a put creates a new session entry
    pub(crate) fn with_auto_prune(mut self, policy: RetentionPolicy) -> Self {
        self.auto_prune = Some(policy);
        self
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    pub(crate) fn path_for(&self, key: &SessionKey) -> PathBuf {
        match key {
            SessionKey::Session(id) => self
                .dir
                .join(format!("{CACHE_FILE_PREFIX}{id}{CACHE_FILE_SUFFIX}")),
            SessionKey::Fallback => self.dir.join(FALLBACK_CACHE_FILE),
        }
    }

    fn key_for_file_name(name: &str) -> Option<SessionKey> {
        if name == FALLBACK_CACHE_FILE {
            return Some(SessionKey::Fallback);
        }
        name.strip_prefix(CACHE_FILE_PREFIX)
            .and_then(|rest| rest.strip_suffix(CACHE_FILE_SUFFIX))
            .filter(|id| !id.is_empty())
            .map(|id| SessionKey::Session(id.to_string()))
    }

    /// Paths and modification times of every cache file in the directory
    fn scan(&self) -> Result<Vec<(PathBuf, SystemTime)>, CacheError> {
        let pattern = format!(
            "{}/{CACHE_FILE_PREFIX}*{CACHE_FILE_SUFFIX}",
            glob::Pattern::escape(&self.dir.to_string_lossy())
        );

        let mut files = Vec::new();
        for path in glob::glob(&pattern)?.flatten() {
            let modified = match fs::metadata(&path).and_then(|m| m.modified()) {
                Ok(modified) => modified,
                Err(err) => {
                    debug!("Skipping {}: {}", path.display(), err);
                    continue;
                }
            };
            files.push((path, modified));
        }
        Ok(files)
    }

    /// All readable entries, newest first
    pub(crate) fn entries(&self) -> Result<Vec<CacheEntry>, CacheError> {
        let mut entries: Vec<CacheEntry> = self
            .scan()?
            .into_iter()
            .filter_map(|(path, modified)| {
                let key = path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .and_then(Self::key_for_file_name)?;
                let command = fs::read_to_string(&path).ok()?.trim().to_string();
                Some(CacheEntry {
                    key,
                    path,
                    command,
                    modified,
                })
            })
            .collect();
        entries.sort_by(|a, b| b.modified.cmp(&a.modified));
        Ok(entries)
    }

    /// Remove entries that fall outside `policy`
    pub(crate) fn prune(
        &self,
        policy: &RetentionPolicy,
        dry_run: bool,
    ) -> Result<PruneReport, CacheError> {
        self.prune_keeping(policy, dry_run, None)
    }

    fn prune_keeping(
        &self,
        policy: &RetentionPolicy,
        dry_run: bool,
        keep: Option<&Path>,
    ) -> Result<PruneReport, CacheError> {
        let files = self.scan()?;
        let scanned = files.len();
        let expired = select_expired(files, policy, SystemTime::now(), keep);

        if dry_run {
            return Ok(PruneReport {
                scanned,
                removed: expired,
            });
        }

        let mut removed = Vec::with_capacity(expired.len());
        for path in expired {
            match fs::remove_file(&path) {
                Ok(()) => removed.push(path),
                // Another invocation may have pruned it first
                Err(err) => debug!("Failed to remove {}: {}", path.display(), err),
            }
        }
        Ok(PruneReport { scanned, removed })
    }
}

impl CommandStore for FileStore {
    fn get(&self, key: &SessionKey) -> Result<Option<String>, CacheError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => {
                let command = content.trim();
                Ok((!command.is_empty()).then(|| command.to_string()))
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CacheError::io(path, err)),
        }
    }

    fn put(&mut self, key: &SessionKey, command: &str) -> Result<(), CacheError> {
        let path = self.path_for(key);
        let is_new = !path.exists();

        fs::create_dir_all(&self.dir).map_err(|e| CacheError::io(&self.dir, e))?;
        fs::write(&path, command).map_err(|e| CacheError::io(&path, e))?;

        if is_new && let Some(policy) = &self.auto_prune {
            // The entry just written always survives its own prune
            match self.prune_keeping(policy, false, Some(&path)) {
                Ok(report) if !report.removed.is_empty() => {
                    debug!("Pruned {} stale cache entries", report.removed.len());
                }
                Ok(_) => {}
                Err(err) => debug!("Cache prune failed: {}", err),
            }
        }
        Ok(())
    }
}
