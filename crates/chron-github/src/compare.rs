//! Two-reference comparison.

use serde::Deserialize;

use crate::{GitHubClient, encode_ref, error::GitHubError};

/// How `head` relates to `base`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareStatus {
    /// `base` is an ancestor of `head`.
    Ahead,
    /// `head` is an ancestor of `base`.
    Behind,
    Identical,
    Diverged,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Comparison {
    pub status: CompareStatus,
    pub ahead_by: u64,
    pub behind_by: u64,
}

impl Comparison {
    /// Whether `base` is reachable from `head`.
    #[must_use]
    pub const fn base_is_ancestor(&self) -> bool {
        matches!(self.status, CompareStatus::Ahead | CompareStatus::Identical)
    }
}

impl GitHubClient {
    /// Compare `base...head`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError`] if the request fails or either reference is
    /// unknown.
    pub async fn compare(&self, base: &str, head: &str) -> Result<Comparison, GitHubError> {
        let url = self.repo_endpoint(&format!(
            "/compare/{}...{}",
            encode_ref(base),
            encode_ref(head)
        ));
        self.get_json(&url).await
    }
}
