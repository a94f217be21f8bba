use std::collections::HashSet;

use chron_core::CommitHash;

/// Newest commit of `target` (newest-first) that also appears in `previous`.
///
/// Both slices are first-parent histories. Returns `None` when they are
/// disjoint.
#[must_use]
pub fn fork_point(target: &[CommitHash], previous: &[CommitHash]) -> Option<CommitHash> {
    let previous: HashSet<&CommitHash> = previous.iter().collect();
    target.iter().find(|c| previous.contains(c)).cloned()
}
