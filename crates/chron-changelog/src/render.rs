//! Markdown rendering.

use chron_core::sections::SECTIONS;
use chron_core::{ChangelogEntry, CommitRecord, PullRequestInfo};

use crate::pulls::Resolution;
use crate::resolve::ResolvedRange;

/// Heading of the trailing table of commits without a merged pull request.
pub const OTHER_COMMITS_HEADING: &str = "Other Commits";

/// Group pull requests into non-empty sections, in section-table order.
///
/// Within a section breaking entries come first; each group keeps the
/// input order.
#[must_use]
pub fn group_sections(pulls: &[PullRequestInfo]) -> Vec<(&'static str, Vec<ChangelogEntry>)> {
    let classified: Vec<_> = pulls
        .iter()
        .map(|pull| (pull.classification(), pull))
        .collect();

    SECTIONS
        .iter()
        .filter_map(|section| {
            let mut entries: Vec<ChangelogEntry> = classified
                .iter()
                .filter(|(c, _)| c.section == section.name)
                .map(|(c, pull)| ChangelogEntry {
                    pull: (*pull).clone(),
                    breaking: c.breaking,
                })
                .collect();
            // Stable: breaking entries first, walk order otherwise.
            entries.sort_by_key(|e| !e.breaking);
            (!entries.is_empty()).then_some((section.name, entries))
        })
        .collect()
}

/// Links and names the document needs beyond the pipeline results.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Web base URL, e.g. `https://github.com`.
    pub web_url: &'a str,
    /// `org/name`.
    pub repo: &'a str,
}

/// Render the complete changelog document.
#[must_use]
pub fn render(ctx: RenderContext<'_>, range: &ResolvedRange, resolution: &Resolution) -> String {
    let base = format!("{}/{}", ctx.web_url.trim_end_matches('/'), ctx.repo);
    let mut lines = vec![
        "# CHANGELOG".to_string(),
        String::new(),
        format!(
            "## **Release** [{end}]({base}/tree/{end})",
            end = range.end_label
        ),
        String::new(),
        format!(
            "[Full Changelog]({base}/compare/{start}...{end})",
            start = range.start_label,
            end = range.end_label
        ),
    ];

    for (section, entries) in group_sections(&resolution.pulls) {
        push_table_header(&mut lines, section, "Pull Request");
        lines.extend(entries.iter().map(pull_row));
    }

    if !resolution.other.is_empty() {
        push_table_header(&mut lines, OTHER_COMMITS_HEADING, "Commit");
        lines.extend(resolution.other.iter().map(|c| commit_row(&base, c)));
    }

    let mut doc = lines.join("\n");
    doc.push('\n');
    doc
}

fn push_table_header(lines: &mut Vec<String>, heading: &str, first_column: &str) {
    lines.extend([
        String::new(),
        "---".to_string(),
        String::new(),
        format!("### {heading}"),
        String::new(),
        format!("|{first_column}|Title|"),
        "|:-:|:--|".to_string(),
    ]);
}

fn pull_row(entry: &ChangelogEntry) -> String {
    let marker = if entry.breaking { "**BREAKING** " } else { "" };
    format!(
        "|[#{}]({})|{marker}{}|",
        entry.pull.number,
        entry.pull.url,
        escape_cell(&entry.pull.title)
    )
}

fn commit_row(base: &str, commit: &CommitRecord) -> String {
    format!(
        "|[{}]({base}/commit/{})|{}|",
        commit.hash.short(),
        commit.hash,
        escape_cell(&commit.subject)
    )
}

/// Keep table cells intact when text contains pipes.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chron_core::{CommitHash, PrState};
    use pretty_assertions::assert_eq;

    fn pull(number: u64, title: &str, labels: &[&str]) -> PullRequestInfo {
        PullRequestInfo {
            number,
            title: title.to_string(),
            url: format!("https://github.com/o/r/pull/{number}"),
            labels: labels.iter().map(ToString::to_string).collect(),
            state: PrState::Closed,
        }
    }

    fn range() -> ResolvedRange {
        ResolvedRange {
            start: CommitHash::parse(&"a".repeat(40)).unwrap(),
            end: CommitHash::parse(&"b".repeat(40)).unwrap(),
            start_label: "V25.0".to_string(),
            end_label: "V25.1".to_string(),
            ahead_by: 2,
        }
    }

    const CTX: RenderContext<'static> = RenderContext {
        web_url: "https://github.com",
        repo: "o/r",
    };

    #[test]
    fn sections_follow_table_order() {
        let pulls = [
            pull(1, "chore", &["routine"]),
            pull(2, "rpc", &["rpc"]),
            pull(3, "misc", &[]),
            pull(4, "major", &["major"]),
        ];
        let names: Vec<_> = group_sections(&pulls).into_iter().map(|(s, _)| s).collect();
        assert_eq!(
            names,
            vec!["Major Changes", "RPC Updates", "Build, Test, Automation, & Chores", "Other"]
        );
    }

    #[test]
    fn breaking_entries_lead_and_order_is_stable() {
        let pulls = [
            pull(1, "a", &["bug"]),
            pull(2, "b", &["bug", "breaking"]),
            pull(3, "c", &["bug"]),
            pull(4, "d", &["breaking", "bug"]),
        ];
        let groups = group_sections(&pulls);
        assert_eq!(groups.len(), 1);
        let numbers: Vec<_> = groups[0].1.iter().map(|e| e.pull.number).collect();
        assert_eq!(numbers, vec![2, 4, 1, 3]);
        assert!(groups[0].1[0].breaking);
        assert!(!groups[0].1[2].breaking);
    }

    #[test]
    fn renders_full_document() {
        let resolution = Resolution {
            pulls: vec![
                pull(42, "Add foo (#42)", &["rpc"]),
                pull(43, "Drop bar", &["rpc", "breaking"]),
            ],
            other: vec![CommitRecord {
                hash: CommitHash::parse("0123456789abcdef0123456789abcdef01234567").unwrap(),
                subject: "Direct push | hotfix".to_string(),
            }],
            excluded: vec![],
        };

        let expected = "\
# CHANGELOG

## **Release** [V25.1](https://github.com/o/r/tree/V25.1)

[Full Changelog](https://github.com/o/r/compare/V25.0...V25.1)

---

### RPC Updates

|Pull Request|Title|
|:-:|:--|
|[#43](https://github.com/o/r/pull/43)|**BREAKING** Drop bar|
|[#42](https://github.com/o/r/pull/42)|Add foo (#42)|

---

### Other Commits

|Commit|Title|
|:-:|:--|
|[0123456](https://github.com/o/r/commit/0123456789abcdef0123456789abcdef01234567)|Direct push \\| hotfix|
";
        assert_eq!(render(CTX, &range(), &resolution), expected);
    }

    #[test]
    fn empty_resolution_renders_header_only() {
        let doc = render(CTX, &range(), &Resolution::default());
        assert!(doc.contains("[Full Changelog]"));
        assert!(!doc.contains("---"));
        assert!(!doc.contains(OTHER_COMMITS_HEADING));
    }

    #[test]
    fn trailing_slash_in_web_url_is_ignored() {
        let ctx = RenderContext {
            web_url: "https://github.com/",
            repo: "o/r",
        };
        let doc = render(ctx, &range(), &Resolution::default());
        assert!(doc.contains("(https://github.com/o/r/tree/V25.1)"));
    }
}
