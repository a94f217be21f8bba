//! Commit → pull request resolution.

use std::collections::HashMap;
use std::sync::LazyLock;

use chron_core::{CommitRecord, PullRequestInfo};
use chron_github::GitHubClient;
use regex::Regex;

use crate::error::ChangelogError;

// Greedy prefix: captures the last `#<digits>` that is directly followed by `)`.
static PR_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*#(\d+)\)").expect("PR number pattern is valid"));

/// Pull request number referenced at the end of a commit subject, e.g.
/// `Add foo (#42)` → 42.
#[must_use]
pub fn extract_pr_number(subject: &str) -> Option<u64> {
    PR_NUMBER
        .captures(subject)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// What happened to every walked commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Merged pull requests, one per number, in first-seen walk order.
    pub pulls: Vec<PullRequestInfo>,
    /// Commits with no pull request, or only an open one, in walk order.
    pub other: Vec<CommitRecord>,
    /// Numbers of pull requests dropped by the exclude label.
    pub excluded: Vec<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Disposition {
    Included,
    Excluded,
    Open,
}

/// Resolve each commit to its pull request, deduplicating by number.
///
/// # Errors
///
/// Returns [`ChangelogError::GitHub`] for any API failure other than a 404
/// on a number parsed from a commit subject, which falls back to the
/// commit's associated pulls instead.
pub async fn resolve_pulls(
    client: &GitHubClient,
    commits: &[CommitRecord],
) -> Result<Resolution, ChangelogError> {
    let mut resolver = Resolver::default();

    for commit in commits {
        if let Some(number) = extract_pr_number(&commit.subject) {
            if let Some(&seen) = resolver.seen.get(&number) {
                resolver.apply(seen, commit);
                continue;
            }
            match client.get_pull(number).await {
                Ok(pull) => {
                    resolver.place(commit, pull);
                    continue;
                }
                Err(e) if e.is_not_found() => {
                    tracing::debug!(number, commit = %commit.hash, "no pull request with that number, looking up by commit");
                }
                Err(e) => return Err(e.into()),
            }
        }

        match client.pulls_for_commit(&commit.hash).await?.into_iter().next() {
            Some(pull) => resolver.place(commit, pull),
            None => {
                tracing::info!(commit = %commit.hash, subject = commit.subject.as_str(), "no pull request found");
                resolver.resolution.other.push(commit.clone());
            }
        }
    }

    Ok(resolver.resolution)
}

#[derive(Default)]
struct Resolver {
    seen: HashMap<u64, Disposition>,
    resolution: Resolution,
}

impl Resolver {
    /// Record a freshly fetched pull request for `commit`.
    fn place(&mut self, commit: &CommitRecord, pull: PullRequestInfo) {
        if let Some(&seen) = self.seen.get(&pull.number) {
            self.apply(seen, commit);
            return;
        }

        let disposition = if pull.is_excluded() {
            tracing::info!(number = pull.number, commit = %commit.hash, "excluding pull request from changelog");
            self.resolution.excluded.push(pull.number);
            Disposition::Excluded
        } else if pull.is_open() {
            tracing::info!(number = pull.number, commit = %commit.hash, "pull request still open");
            self.resolution.other.push(commit.clone());
            Disposition::Open
        } else {
            self.resolution.pulls.push(pull.clone());
            Disposition::Included
        };
        self.seen.insert(pull.number, disposition);
    }

    /// Handle another commit for a pull request already decided.
    fn apply(&mut self, disposition: Disposition, commit: &CommitRecord) {
        match disposition {
            Disposition::Included | Disposition::Excluded => {
                tracing::debug!(commit = %commit.hash, "pull request already resolved");
            }
            Disposition::Open => self.resolution.other.push(commit.clone()),
        }
    }
}
