//! Changelog range requests and their up-front validation.
//!
//! Validation is pure: everything here runs before the first API request, so
//! bad flag combinations never cost a round trip.

use chron_core::{CommitHash, Mode};

use crate::error::ChangelogError;

/// Raw reference arguments, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeRequest {
    pub mode: Mode,
    /// End commit hash.
    pub end: Option<String>,
    /// End tag.
    pub tag: Option<String>,
    /// Start commit hash.
    pub start: Option<String>,
    /// Start tag.
    pub start_tag: Option<String>,
    /// Branch holding the previous major release line.
    pub previous_branch: Option<String>,
}

/// Where the range ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndRef {
    Hash(CommitHash),
    Tag(String),
}

/// Where the range starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartRef {
    Hash(CommitHash),
    Tag(String),
    /// Derive from the tag preceding the end tag.
    PrecedingTag,
}

/// A request whose flags have been checked for shape and consistency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRange {
    pub mode: Mode,
    pub end: EndRef,
    pub start: StartRef,
    pub previous_branch: Option<String>,
}

impl RangeRequest {
    /// Check flag combinations and hash syntax.
    ///
    /// # Errors
    ///
    /// - [`ChangelogError::InvalidArgument`] for conflicting or missing flags
    /// - [`ChangelogError::Core`] for a malformed hash
    /// - [`ChangelogError::TagModeMismatch`] when the start must be derived
    ///   from an end tag that is not a release tag for `mode`
    pub fn validate(&self) -> Result<ValidatedRange, ChangelogError> {
        if self.end.is_some() && self.tag.is_some() {
            return Err(ChangelogError::InvalidArgument(
                "--end and --tag are mutually exclusive".to_string(),
            ));
        }
        if self.start.is_some() && self.start_tag.is_some() {
            return Err(ChangelogError::InvalidArgument(
                "--start and --start-tag are mutually exclusive".to_string(),
            ));
        }

        let end = match (&self.end, &self.tag) {
            (Some(hash), None) => EndRef::Hash(CommitHash::parse(hash)?),
            (None, Some(tag)) => EndRef::Tag(non_empty(tag, "--tag")?),
            _ => {
                return Err(ChangelogError::InvalidArgument(
                    "an end reference is required: pass --end or --tag".to_string(),
                ));
            }
        };

        let start = match (&self.start, &self.start_tag) {
            (Some(hash), None) => StartRef::Hash(CommitHash::parse(hash)?),
            (None, Some(tag)) => StartRef::Tag(non_empty(tag, "--start-tag")?),
            _ => StartRef::PrecedingTag,
        };

        if start == StartRef::PrecedingTag {
            match &end {
                EndRef::Hash(_) => {
                    return Err(ChangelogError::InvalidArgument(
                        "--end needs --start or --start-tag; \
                         only --tag can derive its start"
                            .to_string(),
                    ));
                }
                EndRef::Tag(tag) if !self.mode.matches_tag(tag) => {
                    return Err(ChangelogError::TagModeMismatch {
                        tag: tag.clone(),
                        mode: self.mode,
                    });
                }
                EndRef::Tag(_) => {}
            }
        }

        Ok(ValidatedRange {
            mode: self.mode,
            end,
            start,
            previous_branch: self
                .previous_branch
                .as_deref()
                .map(str::trim)
                .filter(|b| !b.is_empty())
                .map(ToString::to_string),
        })
    }
}

fn non_empty(value: &str, flag: &str) -> Result<String, ChangelogError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ChangelogError::InvalidArgument(format!("{flag} must not be empty")))
    } else {
        Ok(value.to_string())
    }
}
