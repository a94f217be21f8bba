//! # chron-github
//!
//! GitHub REST client covering the hosting operations the changelog needs:
//! - get a commit by reference (hash, tag, or branch)
//! - list commits from a reference, one page at a time
//! - get a pull request by number
//! - list pull requests associated with a commit
//! - list repository tags, one page at a time
//! - compare two references
//!
//! Every call is a single awaited request; callers decide ordering.

pub mod commits;
pub mod compare;
pub mod pulls;
pub mod tags;

mod error;
mod http;

pub use commits::Commit;
pub use compare::{CompareStatus, Comparison};
pub use error::GitHubError;
pub use tags::Tag;

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::check_response;

/// Items requested per page for paginated endpoints (GitHub's maximum).
pub const PER_PAGE: usize = 100;

const API_VERSION: &str = "2022-11-28";

/// Authenticated client bound to one repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    repo: String,
}

impl GitHubClient {
    /// Build a client for `repo` (`org/name`) against `api_url`.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::InvalidToken`] if the token contains characters
    /// that cannot appear in a header, or [`GitHubError::Http`] if the
    /// underlying `reqwest::Client` fails to build.
    pub fn new(
        api_url: &str,
        repo: &str,
        token: &str,
        timeout: Duration,
    ) -> Result<Self, GitHubError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|e| GitHubError::InvalidToken(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert("X-GitHub-Api-Version", HeaderValue::from_static(API_VERSION));

        let http = reqwest::Client::builder()
            .user_agent(concat!("chronicle/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
            repo: repo.to_string(),
        })
    }

    /// The `org/name` this client is bound to.
    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// `{api_url}/repos/{repo}{path}`; `path` starts with `/`.
    fn repo_endpoint(&self, path: &str) -> String {
        format!("{}/repos/{}{path}", self.api_url, self.repo)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        tracing::debug!(url, "github request");
        let resp = check_response(self.http.get(url).send().await?).await?;
        Ok(resp.json().await?)
    }
}

/// Percent-encode a git reference for use in a URL path, keeping `/`
/// separators so branch names like `releases/v25` stay addressable.
fn encode_ref(reference: &str) -> String {
    reference
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::GitHubClient;
    use std::time::Duration;
    use wiremock::MockServer;

    pub const REPO: &str = "owner/repo";

    pub fn client(server: &MockServer) -> GitHubClient {
        GitHubClient::new(&server.uri(), REPO, "ghp_test", Duration::from_secs(5)).unwrap()
    }
}
