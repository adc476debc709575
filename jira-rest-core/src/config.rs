//! # Configuration Management
//!
//! Handles the persisted `jira.toml` settings and the XDG style directories
//! they live in.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::keys::ParsingMode;

/// Page size used by searches when nothing else is configured
pub const DEFAULT_MAX_RESULTS: u32 = 50;

/// Persisted Jira connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JiraConfig {
  /// Jira host URL (e.g., https://company.atlassian.net)
  #[serde(default)]
  pub host: Option<String>,

  /// Login to use when no `.netrc` entry exists for the host
  #[serde(default)]
  pub username: Option<String>,

  /// Default page size for issue searches
  #[serde(default = "default_max_results")]
  pub max_results: u32,

  /// How strictly issue keys typed on the command line are validated
  #[serde(default)]
  pub mode: ParsingMode,
}

const fn default_max_results() -> u32 {
  DEFAULT_MAX_RESULTS
}

impl Default for JiraConfig {
  fn default() -> Self {
    Self {
      host: None,
      username: None,
      max_results: DEFAULT_MAX_RESULTS,
      mode: ParsingMode::default(),
    }
  }
}

/// Represents the configuration directories for the jira-rest tool
#[derive(Debug, Clone)]
pub struct ConfigDirs {
  pub config_dir: PathBuf,
}

impl ConfigDirs {
  /// Create a new ConfigDirs instance from the platform conventions
  pub fn new() -> Result<Self> {
    let proj_dirs =
      ProjectDirs::from("dev", "jira-rest", "jira-rest").context("Failed to determine project directories")?;

    Ok(Self {
      config_dir: proj_dirs.config_dir().to_path_buf(),
    })
  }

  /// Create a ConfigDirs instance rooted at an explicit directory
  pub fn from_path(config_dir: PathBuf) -> Self {
    Self { config_dir }
  }

  /// Get the config directory
  pub fn config_dir(&self) -> &PathBuf {
    &self.config_dir
  }

  /// Get the path to the Jira configuration file
  pub fn jira_config_path(&self) -> PathBuf {
    self.config_dir.join("jira.toml")
  }

  /// Load Jira configuration from file or return default
  pub fn load_jira_config(&self) -> Result<JiraConfig> {
    let config_path = self.jira_config_path();

    if !config_path.exists() {
      return Ok(JiraConfig::default());
    }

    let content = fs::read_to_string(&config_path)
      .with_context(|| format!("Failed to read Jira config from {}", config_path.display()))?;

    toml::from_str(&content).with_context(|| format!("Failed to parse Jira config from {}", config_path.display()))
  }

  /// Save Jira configuration to file
  pub fn save_jira_config(&self, config: &JiraConfig) -> Result<()> {
    let config_path = self.jira_config_path();

    if let Some(parent) = config_path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize Jira config to TOML")?;

    fs::write(&config_path, content)
      .with_context(|| format!("Failed to write Jira config to {}", config_path.display()))?;

    Ok(())
  }
}

/// Get the configuration directories
pub fn get_config_dirs() -> Result<ConfigDirs> {
  ConfigDirs::new()
}
