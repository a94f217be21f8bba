//! First-parent history walk between two resolved commits.

use std::collections::HashMap;

use chron_core::{CommitHash, CommitRecord};
use chron_github::{Commit, GitHubClient, PER_PAGE};

use crate::error::ChangelogError;
use crate::resolve::ResolvedRange;

/// Commits on the first-parent chain from `end` (inclusive) down to `start`
/// (exclusive), newest first.
///
/// The listing API returns every reachable commit; side-branch commits are
/// buffered and skipped, so only `parents[0]` links are followed.
///
/// The chain can hold at most `range.ahead_by` commits (the size of
/// `start..end`); a longer chain means start sits off it, and the walk stops
/// there instead of paging through the rest of the repository.
///
/// # Errors
///
/// Returns [`ChangelogError::StartNotInHistory`] if the chain reaches a root
/// commit, outgrows `ahead_by`, or the listing runs out before `start` is
/// met.
pub async fn walk_commits(
    client: &GitHubClient,
    range: &ResolvedRange,
) -> Result<Vec<CommitRecord>, ChangelogError> {
    let (start, end) = (&range.start, &range.end);
    let limit = usize::try_from(range.ahead_by).unwrap_or(usize::MAX);
    let mut chain = FirstParentChain::new(start.clone(), end.clone(), limit);
    let mut page = 1;
    loop {
        let batch = client.list_commits(end, page).await?;
        let exhausted = batch.len() < PER_PAGE;
        tracing::debug!(page, listed = batch.len(), walked = chain.walked.len(), "walking history");

        match chain.feed(batch) {
            ChainState::ReachedStart => return Ok(chain.walked),
            ChainState::Broken => break,
            ChainState::NeedMore if exhausted => break,
            ChainState::NeedMore => page += 1,
        }
    }

    Err(ChangelogError::StartNotInHistory {
        start: start.to_string(),
        end: end.to_string(),
    })
}

#[derive(Debug, PartialEq, Eq)]
enum ChainState {
    ReachedStart,
    NeedMore,
    /// A root commit was reached, or the chain outgrew its limit, without
    /// meeting start.
    Broken,
}

/// Incremental first-parent chain builder over listing pages.
struct FirstParentChain {
    start: CommitHash,
    next: Option<CommitHash>,
    pending: HashMap<CommitHash, Commit>,
    walked: Vec<CommitRecord>,
    limit: usize,
}

impl FirstParentChain {
    fn new(start: CommitHash, end: CommitHash, limit: usize) -> Self {
        Self {
            start,
            next: Some(end),
            pending: HashMap::new(),
            walked: Vec::new(),
            limit,
        }
    }

    fn feed(&mut self, batch: Vec<Commit>) -> ChainState {
        self.pending
            .extend(batch.into_iter().map(|c| (c.sha.clone(), c)));

        while let Some(next) = self.next.take() {
            if next == self.start {
                return ChainState::ReachedStart;
            }
            if self.walked.len() == self.limit {
                return ChainState::Broken;
            }
            let Some(commit) = self.pending.remove(&next) else {
                self.next = Some(next);
                return ChainState::NeedMore;
            };
            self.next = commit.first_parent().cloned();
            self.walked.push(commit.record());
        }
        ChainState::Broken
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn h(c: char) -> CommitHash {
        CommitHash::parse(&c.to_string().repeat(40)).unwrap()
    }

    fn commit(sha: char, parents: &[char]) -> Commit {
        Commit {
            sha: h(sha),
            message: format!("commit {sha}\n\nbody"),
            parents: parents.iter().copied().map(h).collect(),
        }
    }

    fn subjects(chain: &FirstParentChain) -> Vec<&str> {
        chain.walked.iter().map(|c| c.subject.as_str()).collect()
    }

    #[test]
    fn stops_before_start() {
        let mut chain = FirstParentChain::new(h('a'), h('c'), 10);
        let state = chain.feed(vec![commit('c', &['b']), commit('b', &['a']), commit('a', &[])]);
        assert_eq!(state, ChainState::ReachedStart);
        assert_eq!(subjects(&chain), vec!["commit c", "commit b"]);
    }

    #[test]
    fn start_equal_to_end_walks_nothing() {
        let mut chain = FirstParentChain::new(h('a'), h('a'), 10);
        assert_eq!(chain.feed(vec![]), ChainState::ReachedStart);
        assert!(chain.walked.is_empty());
    }

    #[test]
    fn side_branch_commits_are_skipped() {
        // m merges side s into b; first parent of m is b.
        let mut chain = FirstParentChain::new(h('a'), h('f'), 10);
        let state = chain.feed(vec![
            commit('f', &['b', 'e']),
            commit('e', &['a']),
            commit('b', &['a']),
            commit('a', &[]),
        ]);
        assert_eq!(state, ChainState::ReachedStart);
        assert_eq!(subjects(&chain), vec!["commit f", "commit b"]);
    }

    #[test]
    fn out_of_order_listing_is_buffered() {
        let mut chain = FirstParentChain::new(h('a'), h('c'), 10);
        assert_eq!(chain.feed(vec![commit('b', &['a'])]), ChainState::NeedMore);
        assert!(chain.walked.is_empty());
        assert_eq!(chain.feed(vec![commit('c', &['b'])]), ChainState::ReachedStart);
        assert_eq!(subjects(&chain), vec!["commit c", "commit b"]);
    }

    #[test]
    fn root_without_start_is_broken() {
        let mut chain = FirstParentChain::new(h('9'), h('b'), 10);
        let state = chain.feed(vec![commit('b', &['a']), commit('a', &[])]);
        assert_eq!(state, ChainState::Broken);
    }

    #[test]
    fn start_on_side_branch_is_never_reached() {
        let mut chain = FirstParentChain::new(h('e'), h('f'), 10);
        let state = chain.feed(vec![
            commit('f', &['b', 'e']),
            commit('e', &['a']),
            commit('b', &['a']),
            commit('a', &[]),
        ]);
        assert_eq!(state, ChainState::Broken);
    }

    #[test]
    fn chain_longer_than_range_is_broken() {
        // e..f is {f, b}; `a` is never listed, so without the limit the
        // chain would ask for another page.
        let mut chain = FirstParentChain::new(h('e'), h('f'), 2);
        let state = chain.feed(vec![
            commit('f', &['b', 'e']),
            commit('e', &['a']),
            commit('b', &['a']),
        ]);
        assert_eq!(state, ChainState::Broken);
        assert_eq!(subjects(&chain), vec!["commit f", "commit b"]);
    }

    #[test]
    fn chain_exactly_at_limit_reaches_start() {
        let mut chain = FirstParentChain::new(h('a'), h('c'), 2);
        let state = chain.feed(vec![commit('c', &['b']), commit('b', &['a'])]);
        assert_eq!(state, ChainState::ReachedStart);
        assert_eq!(chain.walked.len(), 2);
    }
}
