use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Cache(#[from] CacheError),
}

#[derive(Debug, Error)]
pub(crate) enum CacheError {
    #[error("Cache I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid cache file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
}

impl CacheError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CacheError::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum GitError {
    #[error("git not found in PATH")]
    NotFound,

    #[error("Failed to run git: {0}")]
    Spawn(std::io::Error),

    #[error("Invalid UTF-8 from git: {0}")]
    Utf8(std::string::FromUtf8Error),

    #[error("git error: {0}")]
    Failed(String),
}
