//! The fixed section table and the label classifier.
//!
//! A pull request lands in the first section (in table order) whose label list
//! shares a label with it, or in [`OTHER_SECTION`] when nothing matches.

/// Fallback section for pull requests with no routed label.
pub const OTHER_SECTION: &str = "Other";

/// Labels that mark a pull request as breaking.
pub const BREAKING_LABELS: &[&str] = &["breaking"];

/// Label that removes a pull request from the changelog entirely.
pub const EXCLUDE_LABEL: &str = "exclude from changelog";

/// A named changelog section and the labels routed to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,
    pub labels: &'static [&'static str],
}

/// Sections in priority order. The last entry is the fallback.
pub const SECTIONS: &[Section] = &[
    Section { name: "Major Changes", labels: &["major"] },
    Section { name: "Protocol Changes", labels: &["protocol change"] },
    Section {
        name: "Node Configuration Updates",
        labels: &["toml", "configuration default change"],
    },
    Section { name: "RPC Updates", labels: &["rpc"] },
    Section { name: "IPC Updates", labels: &["ipc"] },
    Section { name: "Websocket Updates", labels: &["websockets"] },
    Section { name: "CLI Updates", labels: &["cli"] },
    Section { name: "Deprecation/Removal", labels: &["deprecation", "removal"] },
    Section { name: "Developer Wallet", labels: &["qt wallet"] },
    Section { name: "Developer/Debug Options", labels: &["debug", "logging"] },
    Section { name: "Fixed Bugs", labels: &["bug"] },
    Section {
        name: "Implemented Enhancements",
        labels: &[
            "enhancement",
            "functionality quality improvements",
            "non-functional change",
            "performance",
            "quality improvements",
        ],
    },
    Section {
        name: "Build, Test, Automation, & Chores",
        labels: &[
            "build-error",
            "documentation",
            "routine",
            "sanitizers",
            "static-analysis",
            "tool",
            "unit test",
            "universe",
        ],
    },
    Section { name: OTHER_SECTION, labels: &[] },
];

/// Result of classifying one pull request's labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub section: &'static str,
    pub breaking: bool,
}

/// Route a label set to its section and breaking flag.
#[must_use]
pub fn classify<S: AsRef<str>>(labels: &[S]) -> Classification {
    let has = |wanted: &str| labels.iter().any(|l| l.as_ref() == wanted);

    let section = SECTIONS
        .iter()
        .find(|s| s.labels.iter().any(|label| has(label)))
        .map_or(OTHER_SECTION, |s| s.name);
    let breaking = BREAKING_LABELS.iter().any(|label| has(label));

    Classification { section, breaking }
}

/// Whether a label set carries the exclude label.
#[must_use]
pub fn is_excluded<S: AsRef<str>>(labels: &[S]) -> bool {
    labels.iter().any(|l| l.as_ref() == EXCLUDE_LABEL)
}

/// Position of a section in the table, used to order rendered output.
#[must_use]
pub fn section_index(name: &str) -> Option<usize> {
    SECTIONS.iter().position(|s| s.name == name)
}
