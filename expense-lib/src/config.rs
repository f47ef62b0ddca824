use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;
use std::{env, fs};

const DEFAULT_PORT: u16 = 3000;

/// Which [`TransactionRepo`](expense_repo::transaction_repo::TransactionRepo) implementation
/// backs the server. Both keep their data in memory only.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RepoBackend {
    #[default]
    Sqlite,
    Mem,
}

impl FromStr for RepoBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlite" => Ok(RepoBackend::Sqlite),
            "mem" => Ok(RepoBackend::Mem),
            other => Err(anyhow::anyhow!("Unknown repo backend: {}", other)),
        }
    }
}

#[derive(Deserialize, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub repo: RepoBackend,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            repo: RepoBackend::default(),
        }
    }
}

impl Config {
    pub fn from_file(path: PathBuf) -> Result<Config, anyhow::Error> {
        let config = fs::read_to_string(path).context("Unable to read config file")?;
        Config::from_toml(&config)
    }

    pub fn from_toml(config: &str) -> Result<Config, anyhow::Error> {
        let config: Config = toml::from_str(config).context("Unable to parse config")?;
        Ok(config)
    }

    pub fn from_env() -> Result<Config, anyhow::Error> {
        Config::from_vars(|key| env::var(key).ok())
    }

    /// Builds the config from `PORT` and `REPO_BACKEND`, falling back to defaults for unset keys.
    pub fn from_vars<F>(lookup: F) -> Result<Config, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().context("Unable to parse PORT value")?;
        }
        if let Some(repo) = lookup("REPO_BACKEND") {
            config.repo = repo.parse().context("Unable to parse REPO_BACKEND value")?;
        }
        Ok(config)
    }
}
