use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use chron_config::ChronicleConfig;
use chron_github::GitHubClient;

use crate::cli::Cli;

/// Everything a run needs once config and flags are merged.
#[derive(Debug)]
pub struct Settings {
    pub repo: String,
    pub token: String,
    pub api_url: String,
    pub web_url: String,
    pub timeout: Duration,
    pub output: PathBuf,
}

impl Settings {
    pub fn client(&self) -> anyhow::Result<GitHubClient> {
        GitHubClient::new(&self.api_url, &self.repo, &self.token, self.timeout)
            .context("failed to build GitHub client")
    }
}

pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config = ChronicleConfig::load_with_dotenv().context("failed to load configuration")?;
    merge(config, cli)
}

/// Apply flags on top of loaded configuration.
fn merge(mut config: ChronicleConfig, cli: &Cli) -> anyhow::Result<Settings> {
    if let Some(pat) = &cli.pat {
        config.github.token.clone_from(pat);
    }
    if let Some(repo) = &cli.repo {
        config.general.repo.clone_from(repo);
    }
    if let Some(output) = &cli.output {
        config.general.output.clone_from(output);
    }

    chron_core::hash::validate_repo(&config.general.repo)?;
    let token = config.require_token()?.to_string();

    Ok(Settings {
        repo: config.general.repo,
        token,
        api_url: config.github.api_url,
        web_url: config.github.web_url,
        timeout: Duration::from_secs(config.github.timeout_secs),
        output: PathBuf::from(config.general.output),
    })
}
