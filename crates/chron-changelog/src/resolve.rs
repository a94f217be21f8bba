//! Reference resolution: turn validated flags into a concrete commit range.

use chron_core::mode::same_major;
use chron_core::{CommitHash, Mode};
use chron_git::ClonedRepo;
use chron_github::{GitHubClient, PER_PAGE, Tag};

use crate::error::ChangelogError;
use crate::request::{EndRef, StartRef, ValidatedRange};

/// Start and end commits plus the names shown in the document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRange {
    pub start: CommitHash,
    pub end: CommitHash,
    /// Tag name or hash used in the compare link.
    pub start_label: String,
    /// Tag name or hash used in the release header.
    pub end_label: String,
    /// Commits in `start..end` according to the compare API.
    pub ahead_by: u64,
}

/// Resolve a validated range against the hosting API.
///
/// `clone_source` is only used when the start has to be derived across a
/// major version boundary.
///
/// # Errors
///
/// Returns [`ChangelogError`] for unknown references, missing tags, a
/// missing previous branch when one is needed, a failed local clone, or a
/// start that the compare API does not report as an ancestor of end.
pub async fn resolve_range(
    client: &GitHubClient,
    range: &ValidatedRange,
    clone_source: &str,
) -> Result<ResolvedRange, ChangelogError> {
    let (end_label, end) = match &range.end {
        EndRef::Hash(hash) => (hash.to_string(), lookup(client, hash.as_str()).await?),
        EndRef::Tag(tag) => (tag.clone(), lookup(client, tag).await?),
    };

    let (start_label, start) = match &range.start {
        StartRef::Hash(hash) => (hash.to_string(), lookup(client, hash.as_str()).await?),
        StartRef::Tag(tag) => (tag.clone(), lookup(client, tag).await?),
        StartRef::PrecedingTag => {
            // Validation guarantees a tag end when the start is derived.
            let EndRef::Tag(tag) = &range.end else {
                return Err(ChangelogError::InvalidArgument(
                    "a derived start needs an end tag".to_string(),
                ));
            };
            derive_start(client, range, tag, &end, clone_source).await?
        }
    };
    tracing::info!(
        %start,
        %end,
        start_label = start_label.as_str(),
        end_label = end_label.as_str(),
        "resolved changelog range"
    );

    let comparison = client.compare(start.as_str(), end.as_str()).await?;
    if !comparison.base_is_ancestor() {
        return Err(ChangelogError::NotAncestor {
            start: start_label,
            end: end_label,
            status: comparison.status,
        });
    }
    tracing::debug!(ahead_by = comparison.ahead_by, "start is an ancestor of end");

    Ok(ResolvedRange {
        start,
        end,
        start_label,
        end_label,
        ahead_by: comparison.ahead_by,
    })
}

async fn lookup(client: &GitHubClient, reference: &str) -> Result<CommitHash, ChangelogError> {
    client
        .get_commit(reference)
        .await
        .map(|c| c.sha)
        .map_err(|source| ChangelogError::Lookup {
            reference: reference.to_string(),
            source,
        })
}

async fn derive_start(
    client: &GitHubClient,
    range: &ValidatedRange,
    tag: &str,
    end: &CommitHash,
    clone_source: &str,
) -> Result<(String, CommitHash), ChangelogError> {
    let previous = find_preceding_tag(client, tag, range.mode).await?;
    tracing::debug!(tag, previous = previous.name.as_str(), "found preceding release tag");

    // The tag list already names the commit; looking it up by hash keeps a
    // branch of the same name from shadowing the tag.
    if same_major(tag, &previous.name) {
        let start = lookup(client, previous.commit.as_str()).await?;
        return Ok((previous.name, start));
    }

    let branch = range
        .previous_branch
        .as_deref()
        .ok_or_else(|| ChangelogError::MissingPreviousBranch {
            tag: tag.to_string(),
            previous: previous.name.clone(),
        })?;
    tracing::info!(
        tag,
        previous = previous.name.as_str(),
        branch,
        "major version boundary crossed, searching for common ancestor"
    );

    let clone = ClonedRepo::clone_from(clone_source).await?;
    let ancestor = clone.common_ancestor(end.as_str(), branch).await?;
    let start = lookup(client, ancestor.as_str()).await?;
    Ok((ancestor.to_string(), start))
}

/// Page through tags until `tag` and the next release tag after it are seen.
async fn find_preceding_tag(
    client: &GitHubClient,
    tag: &str,
    mode: Mode,
) -> Result<Tag, ChangelogError> {
    let mut tags = Vec::new();
    let mut page = 1;
    loop {
        let batch = client.list_tags(page).await?;
        let exhausted = batch.len() < PER_PAGE;
        tags.extend(batch);

        match preceding_release(&tags, tag, mode) {
            TagSearch::Found(previous) => return Ok(previous.clone()),
            TagSearch::EndOnly if exhausted => {
                return Err(ChangelogError::NoPrecedingTag {
                    tag: tag.to_string(),
                    mode,
                });
            }
            TagSearch::Missing if exhausted => {
                return Err(ChangelogError::TagNotFound(tag.to_string()));
            }
            TagSearch::EndOnly | TagSearch::Missing => page += 1,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum TagSearch<'a> {
    Found(&'a Tag),
    EndOnly,
    Missing,
}

/// Scan `tags` (newest first) from `tag` onward for the next tag matching
/// `mode`.
fn preceding_release<'a>(tags: &'a [Tag], tag: &str, mode: Mode) -> TagSearch<'a> {
    let Some(pos) = tags.iter().position(|t| t.name == tag) else {
        return TagSearch::Missing;
    };
    tags[pos + 1..]
        .iter()
        .find(|t| mode.matches_tag(&t.name))
        .map_or(TagSearch::EndOnly, TagSearch::Found)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Tag {
                name: (*name).to_string(),
                commit: CommitHash::parse(&format!("{i:040x}")).unwrap(),
            })
            .collect()
    }

    fn found_name(search: TagSearch<'_>) -> Option<&str> {
        match search {
            TagSearch::Found(t) => Some(t.name.as_str()),
            _ => None,
        }
    }

    #[test]
    fn final_mode_skips_prerelease_tags() {
        let list = tags(&["V26.0RC1", "V25.1", "V25.1RC2", "V25.0DB1", "V25.0", "V24.3"]);
        assert_eq!(found_name(preceding_release(&list, "V25.1", Mode::Final)), Some("V25.0"));
    }

    #[test]
    fn beta_mode_accepts_prerelease_tags() {
        let list = tags(&["V26.0RC2", "V26.0RC1", "V25.1"]);
        assert_eq!(
            found_name(preceding_release(&list, "V26.0RC2", Mode::Beta)),
            Some("V26.0RC1")
        );
    }

    #[test]
    fn tags_before_the_end_tag_are_ignored() {
        let list = tags(&["V25.2", "V25.1", "V25.0"]);
        assert_eq!(found_name(preceding_release(&list, "V25.1", Mode::Final)), Some("V25.0"));
    }

    #[test]
    fn non_release_tags_are_skipped() {
        let list = tags(&["V25.1", "nightly", "test-tag", "V25.0"]);
        assert_eq!(found_name(preceding_release(&list, "V25.1", Mode::Final)), Some("V25.0"));
    }

    #[test]
    fn oldest_tag_has_no_predecessor() {
        let list = tags(&["V25.1", "V25.0"]);
        assert_eq!(preceding_release(&list, "V25.0", Mode::Final), TagSearch::EndOnly);
    }

    #[test]
    fn unknown_tag_is_missing() {
        let list = tags(&["V25.1", "V25.0"]);
        assert_eq!(preceding_release(&list, "V9.9", Mode::Final), TagSearch::Missing);
    }
}
