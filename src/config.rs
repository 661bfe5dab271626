//! Configuration
//!
//! YAML file looked up at `--config`, then `<config_dir>/polltui/config.yaml`,
//! then `./config.yaml`. Unlike an explicit `--config`, a missing default file
//! is not an error: every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::utils;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Where the session credential is stored (default: `<config_dir>/polltui/token`)
    #[serde(default)]
    pub credential_path: Option<PathBuf>,

    #[serde(default)]
    pub vim_mode: bool,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            credential_path: None,
            vim_mode: false,
        }
    }
}

impl Config {
    /// Load from the first config file found, or defaults when there is none
    pub fn load(cli_path: Option<&Path>) -> Result<Self> {
        match get_config_path(cli_path)? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::from_file(&path)
            }
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&contents)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(contents: &str) -> Result<Self> {
        // An empty file deserializes to null; treat it as all defaults
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Credential file location, configured or default
    pub fn credential_path(&self) -> Result<PathBuf> {
        match &self.credential_path {
            Some(path) => Ok(path.clone()),
            None => utils::default_credential_path(),
        }
    }
}

/// Determine the config file path with fallback logic
pub fn get_config_path(cli_path: Option<&Path>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path.to_path_buf()));
        }
        anyhow::bail!("Config file not found at specified path: {}", path.display());
    }

    // Try <config_dir>/polltui/config.yaml
    if let Some(app_dir) = utils::app_config_dir() {
        let config_path = app_dir.join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = Config::from_yaml("vim_mode: true\n").unwrap();
        assert!(config.vim_mode);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.credential_path, None);
    }

    #[test]
    fn test_full_file() {
        let config = Config::from_yaml(
            "base_url: https://polls.example.com/api\ncredential_path: /tmp/pt/token\n",
        )
        .unwrap();
        assert_eq!(config.base_url, "https://polls.example.com/api");
        assert_eq!(
            config.credential_path().unwrap(),
            PathBuf::from("/tmp/pt/token")
        );
    }

    #[test]
    fn test_missing_cli_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        assert!(get_config_path(Some(&missing)).is_err());
    }

    #[test]
    fn test_cli_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "base_url: http://127.0.0.1:3000/api\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:3000/api");
    }
}
