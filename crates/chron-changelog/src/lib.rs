//! # chron-changelog
//!
//! The changelog pipeline, run strictly in order:
//!
//! 1. [`request`]: validate reference flags before any network call
//! 2. [`resolve`]: turn the references into a start/end commit range
//! 3. [`walk`]: collect the first-parent history between them
//! 4. [`pulls`]: map commits to pull requests, deduplicating and filtering
//! 5. [`render`]: group into sections and emit markdown
//!
//! [`generate`] runs all five and returns a [`Changelog`] ready to render.

pub mod error;
pub mod pulls;
pub mod render;
pub mod request;
pub mod resolve;
pub mod walk;

pub use error::ChangelogError;
pub use pulls::{Resolution, extract_pr_number, resolve_pulls};
pub use render::{RenderContext, group_sections};
pub use request::{EndRef, RangeRequest, StartRef, ValidatedRange};
pub use resolve::{ResolvedRange, resolve_range};
pub use walk::walk_commits;

use chron_github::GitHubClient;

/// The pipeline's result: the resolved range and every commit's outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Changelog {
    pub range: ResolvedRange,
    pub resolution: Resolution,
}

impl Changelog {
    /// Render the full markdown document.
    #[must_use]
    pub fn render(&self, web_url: &str, repo: &str) -> String {
        render::render(RenderContext { web_url, repo }, &self.range, &self.resolution)
    }
}

/// Run the pipeline for `request`.
///
/// `web_url` locates the clonable repository (`{web_url}/{repo}.git`), which
/// is only fetched when the start is derived across a major version.
///
/// # Errors
///
/// Returns the first [`ChangelogError`] from any stage; nothing is rendered
/// on failure.
pub async fn generate(
    client: &GitHubClient,
    request: &RangeRequest,
    web_url: &str,
) -> Result<Changelog, ChangelogError> {
    let validated = request.validate()?;
    let clone_source = format!("{}/{}.git", web_url.trim_end_matches('/'), client.repo());

    let range = resolve_range(client, &validated, &clone_source).await?;
    let commits = walk_commits(client, &range).await?;
    tracing::info!(commits = commits.len(), "walked first-parent history");

    let resolution = resolve_pulls(client, &commits).await?;
    tracing::info!(
        pulls = resolution.pulls.len(),
        other = resolution.other.len(),
        excluded = resolution.excluded.len(),
        "resolved pull requests"
    );

    Ok(Changelog { range, resolution })
}
