use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("git {command} failed: {stderr}")]
    Command { command: String, stderr: String },
    #[error("git {command} timed out after {secs}s")]
    Timeout { command: String, secs: u64 },
    #[error("git printed a malformed commit hash: {0}")]
    MalformedOutput(String),
    #[error("no common first-parent ancestor between {target} and {previous}")]
    NoCommonAncestor { target: String, previous: String },
}
