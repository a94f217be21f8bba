//! Release modes and the tag naming patterns they accept.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

static FINAL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^V\d+\.\d+$").expect("final tag pattern is valid"));

static BETA_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^V\d+\.\d+((RC|DB)\d+)?$").expect("beta tag pattern is valid")
});

// Leading digits followed by a dot; minor and suffix are ignored.
static MAJOR_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.").expect("major version pattern is valid"));

/// Which release line a changelog is generated for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Final releases only (`V25.0`, `V25.1`).
    #[default]
    Final,
    /// Finals plus release candidates and dev builds (`V26.0RC1`, `V26.0DB3`).
    Beta,
}

impl Mode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::Beta => "beta",
        }
    }

    /// Whether `tag` is a release tag for this mode.
    #[must_use]
    pub fn matches_tag(self, tag: &str) -> bool {
        match self {
            Self::Final => FINAL_TAG.is_match(tag),
            Self::Beta => BETA_TAG.is_match(tag),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "final" => Ok(Self::Final),
            "beta" => Ok(Self::Beta),
            other => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}

/// The major version of a tag: the first run of digits followed by a `.`.
#[must_use]
pub fn major_version(tag: &str) -> Option<&str> {
    MAJOR_VERSION
        .captures(tag)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether two tags belong to the same major release family.
///
/// Tags without a recognisable major version never match.
#[must_use]
pub fn same_major(a: &str, b: &str) -> bool {
    match (major_version(a), major_version(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
