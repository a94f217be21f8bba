//! # chron-config
//!
//! Layered configuration loading for chronicle using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CHRONICLE_*` prefix, `__` as separator)
//! 2. Project-level `.chronicle/config.toml`
//! 3. User-level `~/.config/chronicle/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CHRONICLE_GITHUB__TOKEN` -> `github.token`,
//! `CHRONICLE_GENERAL__REPO` -> `general.repo`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use chron_config::ChronicleConfig;
//!
//! let config = ChronicleConfig::load_with_dotenv().expect("config");
//! if config.github.is_configured() {
//!     println!("API: {}", config.github.api_url);
//! }
//! ```

mod error;
mod general;
mod github;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use github::GitHubConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".chronicle/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ChronicleConfig {
    #[serde(default)]
    pub github: GitHubConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ChronicleConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current
    /// directory, if one exists.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CHRONICLE_").split("__"))
    }

    /// Reject values that would only fail later, mid-run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when either URL is not
    /// `http://` or `https://`, or for a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("github.api_url", &self.github.api_url),
            ("github.web_url", &self.github.web_url),
        ] {
            if !(value.starts_with("http://") || value.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: format!("'{value}' is not an http(s) URL"),
                });
            }
        }
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "github.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// The access token, or an error naming where to set it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when no token was configured.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        if self.github.is_configured() {
            Ok(&self.github.token)
        } else {
            Err(ConfigError::Missing {
                field: "github.token".to_string(),
                hint: "pass --pat or set CHRONICLE_GITHUB__TOKEN".to_string(),
            })
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("chronicle").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = ChronicleConfig::default();
        assert!(!config.github.is_configured());
        assert_eq!(config.general.repo, "nanocurrency/nano-node");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        let config: ChronicleConfig = ChronicleConfig::figment()
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.general.output, "CHANGELOG.md");
        assert_eq!(config.github.timeout_secs, 30);
    }

    #[test]
    fn missing_token_is_reported() {
        let config = ChronicleConfig::default();
        let err = config.require_token().unwrap_err();
        assert!(matches!(err, ConfigError::Missing { ref field, .. } if field == "github.token"));
    }

    #[test]
    fn rejects_non_http_urls() {
        let mut config = ChronicleConfig::default();
        config.github.api_url = "api.github.com".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "github.api_url"
        ));
    }

    #[test]
    fn rejects_other_schemes_for_web_url() {
        for url in ["", "ftp://github.com", "git@github.com:owner/repo"] {
            let mut config = ChronicleConfig::default();
            config.github.web_url = url.to_string();
            assert!(
                matches!(
                    config.validate(),
                    Err(ConfigError::InvalidValue { ref field, .. }) if field == "github.web_url"
                ),
                "{url:?} accepted"
            );
        }
        assert!(ChronicleConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let mut config = ChronicleConfig::default();
        config.github.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
