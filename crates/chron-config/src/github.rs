//! GitHub API and web endpoint configuration.

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_web_url() -> String {
    "https://github.com".to_string()
}

/// Default per-request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubConfig {
    /// Personal access token. Usually supplied via `CHRONICLE_GITHUB__TOKEN`
    /// or the `--pat` flag rather than a config file.
    #[serde(default)]
    pub token: String,

    /// REST API base URL, without a trailing slash.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Web base URL used for rendered links and the fallback clone.
    #[serde(default = "default_web_url")]
    pub web_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_url: default_api_url(),
            web_url: default_web_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GitHubConfig {
    /// Returns `true` if a token is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.is_empty()
    }
}
