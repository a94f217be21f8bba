//! Commit lookup and history listing.

use chron_core::{CommitHash, CommitRecord};
use serde::Deserialize;

use crate::{GitHubClient, PER_PAGE, encode_ref, error::GitHubError};

#[derive(Deserialize)]
struct CommitResponse {
    sha: CommitHash,
    commit: CommitDetail,
    #[serde(default)]
    parents: Vec<ParentRef>,
}

#[derive(Deserialize)]
struct CommitDetail {
    message: String,
}

#[derive(Deserialize)]
struct ParentRef {
    sha: CommitHash,
}

/// A commit as returned by the API, reduced to what the walk needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub sha: CommitHash,
    /// Full commit message.
    pub message: String,
    /// Parent hashes; the first entry is the first parent.
    pub parents: Vec<CommitHash>,
}

impl Commit {
    #[must_use]
    pub fn first_parent(&self) -> Option<&CommitHash> {
        self.parents.first()
    }

    /// Hash plus first message line.
    #[must_use]
    pub fn record(&self) -> CommitRecord {
        CommitRecord::from_message(self.sha.clone(), &self.message)
    }
}

impl From<CommitResponse> for Commit {
    fn from(c: CommitResponse) -> Self {
        Self {
            sha: c.sha,
            message: c.commit.message,
            parents: c.parents.into_iter().map(|p| p.sha).collect(),
        }
    }
}

impl GitHubClient {
    /// Resolve any reference (hash, tag, branch) to its commit.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails or the reference is
    /// unknown (`Api { status: 404 | 422 }`).
    pub async fn get_commit(&self, reference: &str) -> Result<Commit, GitHubError> {
        let url = self.repo_endpoint(&format!("/commits/{}", encode_ref(reference)));
        let commit: CommitResponse = self.get_json(&url).await?;
        Ok(commit.into())
    }

    /// One page (1-based) of history reachable from `from`, newest first.
    ///
    /// A page shorter than [`PER_PAGE`] is the last one.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails.
    pub async fn list_commits(
        &self,
        from: &CommitHash,
        page: u32,
    ) -> Result<Vec<Commit>, GitHubError> {
        let url = self.repo_endpoint(&format!(
            "/commits?sha={from}&per_page={PER_PAGE}&page={page}"
        ));
        let commits: Vec<CommitResponse> = self.get_json(&url).await?;
        Ok(commits.into_iter().map(Commit::from).collect())
    }
}
