//! # chron-core
//!
//! Core types and pure logic shared across chronicle crates:
//! - Commit hash validation ([`CommitHash`])
//! - Release modes and their tag patterns ([`Mode`])
//! - The fixed section table and label classifier ([`sections`])
//! - Commit and pull request records produced by the pipeline
//! - Cross-cutting error types

pub mod errors;
pub mod hash;
pub mod mode;
pub mod sections;
pub mod types;

pub use errors::CoreError;
pub use hash::CommitHash;
pub use mode::Mode;
pub use sections::{Classification, classify};
pub use types::{ChangelogEntry, CommitRecord, PrState, PullRequestInfo};
