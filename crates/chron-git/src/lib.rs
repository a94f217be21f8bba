//! # chron-git
//!
//! Local git operations for the common-ancestor fallback.
//!
//! When two release tags sit on different major lines, tag history alone
//! cannot say where the newer line branched off. This crate clones the
//! repository into a temporary directory with the `git` CLI and compares the
//! first-parent histories of the release commit and the previous release
//! branch to find their fork point.

mod ancestor;
mod clone;
mod error;

pub use ancestor::fork_point;
pub use clone::ClonedRepo;
pub use error::GitError;
