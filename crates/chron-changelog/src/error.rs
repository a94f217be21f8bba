//! Changelog pipeline error types.

use chron_core::{CoreError, Mode};
use chron_git::GitError;
use chron_github::{CompareStatus, GitHubError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Conflicting or missing command-line references.
    #[error("invalid arguments: {0}")]
    InvalidArgument(String),

    /// A reference failed syntactic validation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The end tag is not a release tag for the selected mode.
    #[error("tag '{tag}' is not a {mode} release tag")]
    TagModeMismatch { tag: String, mode: Mode },

    /// A reference could not be resolved to a commit.
    #[error("error finding commit for '{reference}': {source}")]
    Lookup {
        reference: String,
        #[source]
        source: GitHubError,
    },

    /// The end tag is absent from the repository's tag list.
    #[error("tag '{0}' not found in repository tags")]
    TagNotFound(String),

    /// No release tag of the selected mode precedes the end tag.
    #[error("no {mode} release tag precedes '{tag}'")]
    NoPrecedingTag { tag: String, mode: Mode },

    /// The start must be derived across a major version, which needs a
    /// previous release branch.
    #[error(
        "'{tag}' and '{previous}' are on different major versions; \
         pass --previous-branch to locate their common ancestor"
    )]
    MissingPreviousBranch { tag: String, previous: String },

    /// Start is not reachable from end according to the compare API.
    #[error("start {start} is not an ancestor of end {end} (compare status: {status:?})")]
    NotAncestor {
        start: String,
        end: String,
        status: CompareStatus,
    },

    /// The first-parent walk from end never reached start.
    #[error("start commit {start} not found in first-parent history of {end}")]
    StartNotInHistory { start: String, end: String },

    #[error(transparent)]
    GitHub(#[from] GitHubError),

    #[error(transparent)]
    Git(#[from] GitError),
}
