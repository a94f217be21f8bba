//! Records produced while walking history and resolving pull requests.

use serde::{Deserialize, Serialize};

use crate::hash::CommitHash;
use crate::sections::{Classification, classify, is_excluded};

/// One commit on the walked first-parent chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    pub hash: CommitHash,
    /// First line of the commit message.
    pub subject: String,
}

impl CommitRecord {
    /// Build a record from a full commit message, keeping only its first line.
    #[must_use]
    pub fn from_message(hash: CommitHash, message: &str) -> Self {
        Self {
            hash,
            subject: first_line(message).to_string(),
        }
    }
}

/// First line of a commit message, without trailing whitespace.
#[must_use]
pub fn first_line(message: &str) -> &str {
    message.lines().next().unwrap_or_default().trim_end()
}

/// Whether a pull request is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrState {
    Open,
    Closed,
}

/// The subset of pull request data the changelog needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestInfo {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// Label names in the order the API returned them.
    pub labels: Vec<String>,
    pub state: PrState,
}

impl PullRequestInfo {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, PrState::Open)
    }

    #[must_use]
    pub fn is_excluded(&self) -> bool {
        is_excluded(&self.labels)
    }

    #[must_use]
    pub fn classification(&self) -> Classification {
        classify(&self.labels)
    }
}

/// A pull request placed in a section, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub pull: PullRequestInfo,
    pub breaking: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hash() -> CommitHash {
        CommitHash::parse("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa").unwrap()
    }

    #[test]
    fn keeps_only_first_message_line() {
        let record = CommitRecord::from_message(hash(), "Add foo (#42)\n\nLonger body\n");
        assert_eq!(record.subject, "Add foo (#42)");
    }

    #[test]
    fn first_line_of_empty_message() {
        assert_eq!(first_line(""), "");
        assert_eq!(first_line("subject  \r\nbody"), "subject");
    }

    #[test]
    fn pull_request_helpers() {
        let pr = PullRequestInfo {
            number: 7,
            title: "Drop legacy flag".to_string(),
            url: "https://github.com/o/r/pull/7".to_string(),
            labels: vec!["removal".to_string(), "breaking".to_string()],
            state: PrState::Closed,
        };
        assert!(!pr.is_open());
        assert!(!pr.is_excluded());
        let c = pr.classification();
        assert_eq!(c.section, "Deprecation/Removal");
        assert!(c.breaking);
    }

    #[test]
    fn pr_state_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&PrState::Open).unwrap(), "\"open\"");
        let closed: PrState = serde_json::from_str("\"closed\"").unwrap();
        assert_eq!(closed, PrState::Closed);
    }
}
