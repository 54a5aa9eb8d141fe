use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::GitError;

/// Name of the checked-out branch in `dir`, `None` on a detached HEAD
pub(crate) fn current_branch(dir: Option<&Path>) -> Result<Option<String>, GitError> {
    let mut cmd = Command::new("git");
    cmd.args(["branch", "--show-current"])
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let output = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GitError::NotFound
        } else {
            GitError::Spawn(e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::Failed(stderr.trim().to_string()));
    }

    let branch = String::from_utf8(output.stdout).map_err(GitError::Utf8)?;
    let branch = branch.trim();
    Ok((!branch.is_empty()).then(|| branch.to_string()))
}
