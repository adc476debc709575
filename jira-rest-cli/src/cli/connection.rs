//! # Connection Commands
//!
//! Credential checks and the read-only identity and server queries.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;
use jira_rest_client::JiraClient;
use jira_rest_client::auth::{get_jira_credentials, get_jira_host};
use jira_rest_core::JiraConfig;
use jira_rest_core::creds::netrc::{get_netrc_path, normalize_host, write_netrc_entry};
use jira_rest_core::output::{print_header, print_info, print_success};
use owo_colors::OwoColorize;
use serde_json::json;
use tokio::runtime::Runtime;

use super::{OutputFormat, or_dash, print_json};
use crate::clients::{self, create_jira_session};

/// Arguments for `test-connection`
#[derive(Args, Debug)]
pub struct TestConnectionArgs {
  /// Jira host URL (defaults to $JIRA_HOST, then the saved host)
  #[arg(long)]
  pub host: Option<String>,

  /// Login to test with --password (defaults to the saved username)
  #[arg(long, short = 'u', requires = "password")]
  pub username: Option<String>,

  /// Password or API token to test; without it ~/.netrc is used
  #[arg(long, short = 'p')]
  pub password: Option<String>,

  /// Store the credentials in ~/.netrc when the server accepts them
  #[arg(long, requires = "password")]
  pub save: bool,
}

pub(super) fn handle_test_connection(args: TestConnectionArgs, format: OutputFormat) -> Result<()> {
  let config = clients::load_jira_config()?;
  test_connection_with(args, config, &clients::home_dir()?, format)
}

fn test_connection_with(
  args: TestConnectionArgs,
  config: JiraConfig,
  home: &Path,
  format: OutputFormat,
) -> Result<()> {
  let host = get_jira_host(args.host.as_deref(), &config)?;

  let (username, password) = match args.password {
    Some(password) => {
      let username = args
        .username
        .or(config.username)
        .context("A username is required with --password (use --username or 'jira-rest config --username')")?;
      (username, password)
    }
    None => {
      if let Some(username) = args.username {
        anyhow::bail!("--username '{username}' needs --password; without it both come from ~/.netrc");
      }
      let credentials = get_jira_credentials(home, &host)?;
      (credentials.username, credentials.password)
    }
  };

  let rt = Runtime::new().context("Failed to create async runtime")?;
  let connected = rt.block_on(JiraClient::test_rest_connection(&host, &username, &password))?;

  if format == OutputFormat::Json {
    print_json(&json!({ "host": host, "username": username, "connected": connected }))?;
  } else if connected {
    print_success(&format!("Connected to {} as {}", host.bright_blue(), username.bold()));
  }

  if !connected {
    anyhow::bail!("Jira at {host} did not accept the credentials for '{username}'");
  }

  if args.save {
    let machine = normalize_host(&host);
    write_netrc_entry(&get_netrc_path(home), &machine, &username, &password)?;
    if format == OutputFormat::Text {
      print_info(&format!("Saved credentials for machine '{machine}' to .netrc"));
    }
  }

  Ok(())
}

pub(super) fn handle_whoami(format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;
  let user = session.rt.block_on(session.client.get_logged_in_user())?;

  if format == OutputFormat::Json {
    return print_json(&user);
  }

  print_header(&user.display_name);
  println!("  {}: {}", "Login".bold(), or_dash(user.login()));
  println!("  {}: {}", "Email".bold(), or_dash(user.email_address.as_deref()));
  println!("  {}: {}", "Time zone".bold(), or_dash(user.time_zone.as_deref()));
  println!("  {}: {}", "Active".bold(), if user.active { "yes" } else { "no" });
  Ok(())
}

pub(super) fn handle_server_info(format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;
  let info = session.rt.block_on(session.client.get_server_info())?;

  if format == OutputFormat::Json {
    return print_json(&info);
  }

  print_header(info.server_title.as_deref().unwrap_or("Jira"));
  println!("  {}: {}", "URL".bold(), info.base_url);
  println!("  {}: {}", "Version".bold(), info.version);
  println!("  {}: {}", "Deployment".bold(), or_dash(info.deployment_type.as_deref()));
  if let Some(build) = info.build_number {
    println!("  {}: {build}", "Build".bold());
  }
  Ok(())
}
