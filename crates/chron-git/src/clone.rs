use std::path::{Path, PathBuf};
use std::time::Duration;

use chron_core::CommitHash;
use tempfile::TempDir;
use tokio::process::Command;
use tokio::time::timeout;

use crate::ancestor::fork_point;
use crate::error::GitError;

const CLONE_TIMEOUT: Duration = Duration::from_secs(600);
const COMMAND_TIMEOUT: Duration = Duration::from_secs(120);

/// A throwaway clone. The directory is removed when this value drops.
#[derive(Debug)]
pub struct ClonedRepo {
    _dir: TempDir,
    path: PathBuf,
}

impl ClonedRepo {
    /// Clone `source` (URL or local path) without checking out a work tree or
    /// fetching blobs; only the commit graph is needed.
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if the temp directory cannot be created, `git`
    /// cannot be spawned, times out, or exits non-zero.
    pub async fn clone_from(source: &str) -> Result<Self, GitError> {
        let dir = TempDir::new()?;
        let path = dir.path().join("repo");
        tracing::info!(source, path = %path.display(), "cloning repository for ancestor search");

        let mut cmd = Command::new("git");
        cmd.args(["clone", "--quiet", "--no-checkout", "--filter=blob:none", source])
            .arg(&path);
        run(cmd, "clone", CLONE_TIMEOUT).await?;

        Ok(Self { _dir: dir, path })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// First-parent history of `rev`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitError`] if `git rev-list` fails or prints something that
    /// is not a commit hash.
    pub async fn first_parent_history(&self, rev: &str) -> Result<Vec<CommitHash>, GitError> {
        let mut cmd = Command::new("git");
        cmd.args(["rev-list", "--first-parent", rev]).current_dir(&self.path);
        let stdout = run(cmd, "rev-list", COMMAND_TIMEOUT).await?;

        stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                CommitHash::parse(line).map_err(|_| GitError::MalformedOutput(line.to_string()))
            })
            .collect()
    }

    /// Fork point of `target` and the remote branch `previous_branch`.
    ///
    /// # Errors
    ///
    /// Returns [`GitError::NoCommonAncestor`] when the first-parent histories
    /// share no commit, or any error from listing them.
    pub async fn common_ancestor(
        &self,
        target: &str,
        previous_branch: &str,
    ) -> Result<CommitHash, GitError> {
        let previous = format!("origin/{previous_branch}");
        let target_history = self.first_parent_history(target).await?;
        let previous_history = self.first_parent_history(&previous).await?;
        tracing::debug!(
            target,
            previous = previous.as_str(),
            target_len = target_history.len(),
            previous_len = previous_history.len(),
            "comparing first-parent histories"
        );

        fork_point(&target_history, &previous_history).ok_or_else(|| GitError::NoCommonAncestor {
            target: target.to_string(),
            previous,
        })
    }
}

async fn run(mut cmd: Command, name: &str, limit: Duration) -> Result<String, GitError> {
    cmd.kill_on_drop(true);
    let output = timeout(limit, cmd.output())
        .await
        .map_err(|_| GitError::Timeout {
            command: name.to_string(),
            secs: limit.as_secs(),
        })??;

    if !output.status.success() {
        return Err(GitError::Command {
            command: name.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
