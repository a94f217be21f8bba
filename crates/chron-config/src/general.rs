//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_repo() -> String {
    "nanocurrency/nano-node".to_string()
}

fn default_output() -> String {
    "CHANGELOG.md".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Repository to generate changelogs for, as `org/name`.
    #[serde(default = "default_repo")]
    pub repo: String,

    /// Path the rendered changelog is written to.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            repo: default_repo(),
            output: default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.repo, "nanocurrency/nano-node");
        assert_eq!(config.output, "CHANGELOG.md");
    }
}
