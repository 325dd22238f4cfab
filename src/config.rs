use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScryError};

pub const DEFAULT_API_BASE: &str = "https://api.scryfall.com";

#[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| ScryError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents).map_err(|e| ScryError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    fn parse(contents: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "scry")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(ScryError::NoConfigDir)
    }

    /// Get the API base URL with env var taking precedence over config file
    pub fn api_base(&self) -> String {
        if let Ok(base) = std::env::var("SCRYFALL_API_BASE") {
            return base;
        }

        self.api_base
            .clone()
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }

    pub fn user_agent(&self) -> String {
        if let Ok(agent) = std::env::var("SCRY_USER_AGENT") {
            return agent;
        }

        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("scry/{}", env!("CARGO_PKG_VERSION")))
    }
}
