//! Pull request lookup, by number and by commit.

use chron_core::{CommitHash, PrState, PullRequestInfo};
use serde::Deserialize;

use crate::{GitHubClient, error::GitHubError};

#[derive(Deserialize)]
struct PullResponse {
    number: u64,
    title: String,
    html_url: String,
    state: PrState,
    #[serde(default)]
    labels: Vec<LabelResponse>,
}

#[derive(Deserialize)]
struct LabelResponse {
    name: String,
}

impl From<PullResponse> for PullRequestInfo {
    fn from(p: PullResponse) -> Self {
        Self {
            number: p.number,
            title: p.title,
            url: p.html_url,
            labels: p.labels.into_iter().map(|l| l.name).collect(),
            state: p.state,
        }
    }
}

impl GitHubClient {
    /// Fetch one pull request by number.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails; a number that is not a
    /// pull request yields an error for which
    /// [`GitHubError::is_not_found`] is true.
    pub async fn get_pull(&self, number: u64) -> Result<PullRequestInfo, GitHubError> {
        let url = self.repo_endpoint(&format!("/pulls/{number}"));
        let pull: PullResponse = self.get_json(&url).await?;
        Ok(pull.into())
    }

    /// Pull requests associated with a commit, in API order.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails.
    pub async fn pulls_for_commit(
        &self,
        sha: &CommitHash,
    ) -> Result<Vec<PullRequestInfo>, GitHubError> {
        let url = self.repo_endpoint(&format!("/commits/{sha}/pulls"));
        let pulls: Vec<PullResponse> = self.get_json(&url).await?;
        Ok(pulls.into_iter().map(PullRequestInfo::from).collect())
    }
}
