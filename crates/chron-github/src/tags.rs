//! Repository tag listing.

use chron_core::CommitHash;
use serde::Deserialize;

use crate::{GitHubClient, PER_PAGE, error::GitHubError};

#[derive(Deserialize)]
struct TagResponse {
    name: String,
    commit: TagCommit,
}

#[derive(Deserialize)]
struct TagCommit {
    sha: CommitHash,
}

/// A tag name and the commit it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub commit: CommitHash,
}

impl GitHubClient {
    /// One page (1-based) of tags, in the order GitHub returns them
    /// (newest release first for conventionally named tags).
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails.
    pub async fn list_tags(&self, page: u32) -> Result<Vec<Tag>, GitHubError> {
        let url = self.repo_endpoint(&format!("/tags?per_page={PER_PAGE}&page={page}"));
        let tags: Vec<TagResponse> = self.get_json(&url).await?;
        Ok(tags
            .into_iter()
            .map(|t| Tag {
                name: t.name,
                commit: t.commit.sha,
            })
            .collect())
    }
}
