//! # Client Creation
//!
//! Builds the tokio runtime and authenticated Jira client every remote
//! command needs, applying the saved configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::BaseDirs;
use jira_rest_client::JiraClient;
use jira_rest_client::auth::{create_jira_runtime_and_client, get_jira_host};
use jira_rest_core::{IssueKeyParser, JiraConfig, get_config_dirs};
use tokio::runtime::Runtime;
use tracing::debug;

/// Everything a remote command needs to talk to Jira
pub struct JiraSession {
  pub rt: Runtime,
  pub client: JiraClient,
  /// Normalized base URL, used for browse links
  pub host: String,
  pub parser: IssueKeyParser,
}

impl JiraSession {
  /// Validate and normalize an issue key typed by the user
  pub fn issue_key(&self, input: &str) -> Result<String> {
    Ok(self.parser.parse_issue_key(input)?)
  }

  /// Validate and normalize a project key typed by the user
  pub fn project_key(&self, input: &str) -> Result<String> {
    Ok(self.parser.parse_project_key(input)?)
  }

  /// Link to an issue in the Jira web UI
  pub fn browse_url(&self, issue_key: &str) -> String {
    format!("{}/browse/{issue_key}", self.host)
  }
}

/// The user's home directory, where `.netrc` lives
pub fn home_dir() -> Result<PathBuf> {
  let base_dirs = BaseDirs::new().context("Failed to get $HOME directory")?;
  Ok(base_dirs.home_dir().to_path_buf())
}

/// Load the saved configuration, falling back to defaults when absent
pub fn load_jira_config() -> Result<JiraConfig> {
  get_config_dirs()?.load_jira_config()
}

/// Creates a runtime and an authenticated client for the configured host
pub fn create_jira_session() -> Result<JiraSession> {
  let config = load_jira_config()?;
  let host = get_jira_host(None, &config)?;
  debug!(%host, max_results = config.max_results, "Creating Jira session");

  let (rt, client) = create_jira_runtime_and_client(&home_dir()?, &host)?;

  Ok(JiraSession {
    rt,
    client: client.with_max_results(config.max_results),
    host,
    parser: IssueKeyParser::new(config.mode),
  })
}
