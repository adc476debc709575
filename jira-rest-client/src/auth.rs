//! Authentication helpers for the Jira client.
//!
//! These helpers centralize host resolution, credential lookup and runtime
//! construction so that the CLI and any other caller share the same flow
//! when talking to Jira.

use std::path::Path;

use anyhow::{Context, Result};
use jira_rest_core::JiraConfig;
use jira_rest_core::creds::Credentials;
use jira_rest_core::creds::netrc::{get_netrc_path, normalize_host, parse_netrc_file};
pub use jira_rest_core::url::ENV_JIRA_HOST;
use jira_rest_core::url::ensure_url_scheme;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::{JiraClient, create_jira_client};

/// `.netrc` machine consulted when the host itself has no entry
pub const FALLBACK_MACHINE: &str = "atlassian.net";

/// Resolve the Jira base URL with `host_flag` > `$JIRA_HOST` > `config.host`
/// precedence. If the host doesn't include a scheme (http:// or https://),
/// assumes https://.
pub fn get_jira_host(host_flag: Option<&str>, config: &JiraConfig) -> Result<String> {
  choose_jira_host(host_flag, std::env::var(ENV_JIRA_HOST).ok(), config.host.clone())
}

/// Pick the first available host source (explicit flag, environment, saved
/// configuration) and normalize it.
pub fn choose_jira_host(flag: Option<&str>, env: Option<String>, configured: Option<String>) -> Result<String> {
  let raw = flag
    .map(str::to_string)
    .or(env.filter(|value| !value.trim().is_empty()))
    .or(configured)
    .with_context(|| {
      format!("Jira host not configured. Set ${ENV_JIRA_HOST} or run 'jira-rest config --host <url>'.")
    })?;

  ensure_url_scheme(&raw)
}

/// Check if Jira credentials are available for the provided host.
pub fn check_jira_credentials(home: &Path, jira_host: &str) -> Result<bool> {
  Ok(get_jira_credentials(home, jira_host).is_ok())
}

/// Retrieve Jira credentials from `.netrc` in `home`.
pub fn get_jira_credentials(home: &Path, jira_host: &str) -> Result<Credentials> {
  let netrc_path = get_netrc_path(home);

  let normalized_host = normalize_host(jira_host);
  for machine in [normalized_host.as_str(), FALLBACK_MACHINE] {
    if let Some(creds) = parse_netrc_file(&netrc_path, machine)? {
      debug!(machine, "Using .netrc credentials");
      return Ok(creds);
    }
  }

  Err(anyhow::anyhow!(
    "Jira credentials not found in .netrc file. Please add credentials for machine '{normalized_host}' or '{FALLBACK_MACHINE}'."
  ))
}

/// Creates an authenticated Jira client using credentials from .netrc.
pub fn create_jira_client_from_netrc(home: &Path, jira_host: &str) -> Result<JiraClient> {
  let credentials = get_jira_credentials(home, jira_host).context("Failed to get credentials")?;

  create_jira_client(jira_host, &credentials.username, &credentials.password).context("Failed to create Jira client")
}

/// Creates a tokio runtime and an authenticated Jira client.
pub fn create_jira_runtime_and_client(home: &Path, jira_host: &str) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client_from_netrc(home, jira_host)?;
  Ok((rt, client))
}

#[cfg(test)]
mod tests {
  use jira_rest_test_utils::{EnvVarGuard, NetrcGuard};

  use super::*;

  const NETRC: &str = r#"machine custom-jira-host.com
  login custom@example.com
  password custom-token

machine atlassian.com
  login test@example.com
  password test-token

machine atlassian.net
  login net@example.com
  password net-token
"#;

  #[test]
  fn test_get_jira_credentials() {
    let guard = NetrcGuard::new(NETRC);

    let jira_creds = get_jira_credentials(guard.home_dir(), "https://custom-jira-host.com/").unwrap();
    assert_eq!(jira_creds.username, "custom@example.com");
    assert_eq!(jira_creds.password, "custom-token");

    let jira_creds = get_jira_credentials(guard.home_dir(), "nonexistent-host.com").unwrap();
    assert_eq!(jira_creds.username, "net@example.com");
    assert_eq!(jira_creds.password, "net-token");
  }

  #[test]
  fn test_get_jira_credentials_error_messages() {
    let guard = NetrcGuard::new("");

    let error = get_jira_credentials(guard.home_dir(), "custom-jira-host.com")
      .unwrap_err()
      .to_string();
    assert!(error.contains("custom-jira-host.com"));
    assert!(error.contains("atlassian.net"));
    assert!(!error.contains("atlassian.com"));
  }

  #[test]
  fn test_check_jira_credentials() {
    let guard = NetrcGuard::new(NETRC);
    assert!(check_jira_credentials(guard.home_dir(), "custom-jira-host.com").unwrap());
    assert!(check_jira_credentials(guard.home_dir(), "nonexistent-host.com").unwrap());

    let empty = NetrcGuard::empty_home();
    assert!(!check_jira_credentials(empty.home_dir(), "custom-jira-host.com").unwrap());
  }

  #[test]
  fn test_create_jira_client_from_netrc() {
    let guard = NetrcGuard::new(NETRC);

    let client = create_jira_client_from_netrc(guard.home_dir(), "https://custom-jira-host.com").unwrap();
    assert_eq!(client.username(), "custom@example.com");
    assert_eq!(client.base_url(), "https://custom-jira-host.com");

    let empty = NetrcGuard::empty_home();
    let error = create_jira_client_from_netrc(empty.home_dir(), "https://custom-jira-host.com").unwrap_err();
    assert!(format!("{error:#}").contains("Failed to get credentials"));
  }

  #[test]
  fn test_choose_jira_host_precedence() {
    let host = choose_jira_host(
      Some("flag.example.com"),
      Some("env.example.com".to_string()),
      Some("config.example.com".to_string()),
    )
    .unwrap();
    assert_eq!(host, "https://flag.example.com");

    let host = choose_jira_host(None, Some("http://env.example.com/".to_string()), None).unwrap();
    assert_eq!(host, "http://env.example.com");

    let host = choose_jira_host(None, Some("  ".to_string()), Some("config.example.com".to_string())).unwrap();
    assert_eq!(host, "https://config.example.com");

    let error = choose_jira_host(None, None, None).unwrap_err().to_string();
    assert!(error.contains(ENV_JIRA_HOST));
  }

  #[test]
  fn test_get_jira_host_reads_env() {
    let guard = EnvVarGuard::new(ENV_JIRA_HOST);
    let config = JiraConfig {
      host: Some("config.example.com".to_string()),
      ..Default::default()
    };

    guard.set("env.example.com/");
    assert_eq!(get_jira_host(None, &config).unwrap(), "https://env.example.com");
    assert_eq!(
      get_jira_host(Some("http://flag.example.com"), &config).unwrap(),
      "http://flag.example.com"
    );

    guard.remove();
    assert_eq!(get_jira_host(None, &config).unwrap(), "https://config.example.com");
    assert!(get_jira_host(None, &JiraConfig::default()).is_err());
  }
}
