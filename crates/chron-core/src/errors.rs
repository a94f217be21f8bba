//! Cross-cutting error types for chronicle.
//!
//! Errors raised by the HTTP client, git fallback and pipeline live in their
//! own crates. These cover input validation that happens before any request.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A commit hash was not 40 hexadecimal characters.
    #[error("invalid commit hash '{0}': expected 40 hexadecimal characters")]
    InvalidHash(String),

    /// A repository identifier was not of the form `org/name`.
    #[error("invalid repository '{0}': expected <org>/<name>")]
    InvalidRepo(String),

    /// A mode name other than `final` or `beta`.
    #[error("unknown mode '{0}': expected 'final' or 'beta'")]
    UnknownMode(String),
}
