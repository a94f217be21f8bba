//! Full-length commit hashes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Length of a full SHA-1 commit hash in hex characters.
pub const HASH_LEN: usize = 40;

/// Length of the abbreviated hash used in rendered tables.
pub const SHORT_HASH_LEN: usize = 7;

/// A syntactically valid 40-character hex commit hash, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommitHash(String);

impl CommitHash {
    /// Validate and normalise a commit hash.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidHash`] unless `value` is exactly 40 hex
    /// characters. Surrounding whitespace is not accepted.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if value.len() == HASH_LEN && value.bytes().all(|b| b.is_ascii_hexdigit()) {
            Ok(Self(value.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidHash(value.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First [`SHORT_HASH_LEN`] characters.
    #[must_use]
    pub fn short(&self) -> &str {
        &self.0[..SHORT_HASH_LEN]
    }
}

impl FromStr for CommitHash {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CommitHash {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CommitHash> for String {
    fn from(hash: CommitHash) -> Self {
        hash.0
    }
}

impl AsRef<str> for CommitHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommitHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validate an `org/name` repository identifier.
///
/// # Errors
///
/// Returns [`CoreError::InvalidRepo`] when either half is empty or there is
/// not exactly one `/`.
pub fn validate_repo(repo: &str) -> Result<(), CoreError> {
    match repo.split_once('/') {
        Some((org, name)) if !org.is_empty() && !name.is_empty() && !name.contains('/') => Ok(()),
        _ => Err(CoreError::InvalidRepo(repo.to_string())),
    }
}
