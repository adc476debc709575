//! # Config Command
//!
//! Shows and updates the settings persisted in `jira.toml`.

use anyhow::{Context, Result};
use clap::Args;
use jira_rest_core::config::ConfigDirs;
use jira_rest_core::output::{print_info, print_success, print_warning};
use jira_rest_core::url::ensure_url_scheme;
use jira_rest_core::{JiraConfig, ParsingMode, get_config_dirs};

use super::{OutputFormat, print_json};

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
  /// Set the Jira host URL (e.g., https://company.atlassian.net)
  #[arg(long)]
  pub host: Option<String>,

  /// Set the default page size for issue listings and searches
  #[arg(long, value_parser = clap::value_parser!(u32).range(1..=1000))]
  pub max_results: Option<u32>,

  /// Set the login used with --password when testing connections
  #[arg(long)]
  pub username: Option<String>,

  /// Set how strictly issue keys are validated
  #[arg(long, value_enum)]
  pub mode: Option<ParsingModeArg>,

  /// Show the configuration, after applying any changes
  #[arg(long)]
  pub show: bool,
}

impl ConfigArgs {
  fn has_changes(&self) -> bool {
    self.host.is_some() || self.max_results.is_some() || self.username.is_some() || self.mode.is_some()
  }
}

/// Issue key parsing mode argument for CLI
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParsingModeArg {
  /// Strict mode: Only accepts PROJ-1234 format
  Strict,
  /// Flexible mode: Accepts PROJ-1234, PROJ1234, proj1234, etc.
  Flexible,
}

impl From<ParsingModeArg> for ParsingMode {
  fn from(mode: ParsingModeArg) -> Self {
    match mode {
      ParsingModeArg::Strict => ParsingMode::Strict,
      ParsingModeArg::Flexible => ParsingMode::Flexible,
    }
  }
}

/// Apply the requested changes to `config`
fn apply_changes(config: &mut JiraConfig, args: ConfigArgs) -> Result<()> {
  if let Some(host) = args.host {
    config.host = Some(ensure_url_scheme(&host).with_context(|| format!("Invalid Jira host '{host}'"))?);
  }
  if let Some(max_results) = args.max_results {
    config.max_results = max_results;
  }
  if let Some(username) = args.username {
    config.username = Some(username).filter(|u| !u.trim().is_empty());
  }
  if let Some(mode) = args.mode {
    config.mode = mode.into();
  }
  Ok(())
}

fn show_config(dirs: &ConfigDirs, config: &JiraConfig, format: OutputFormat) -> Result<()> {
  if format == OutputFormat::Json {
    return print_json(config);
  }

  print_info(&format!("Current Jira configuration ({}):", dirs.jira_config_path().display()));
  match &config.host {
    Some(host) => println!("  Host: {host}"),
    None => println!("  Host: Not configured"),
  }
  println!("  Username: {}", config.username.as_deref().unwrap_or("Not configured"));
  println!("  Max results: {}", config.max_results);
  println!("  Parsing Mode: {:?}", config.mode);
  Ok(())
}

pub(super) fn handle_config_command(args: ConfigArgs, format: OutputFormat) -> Result<()> {
  let dirs = get_config_dirs()?;
  handle_config_in(&dirs, args, format)
}

fn handle_config_in(dirs: &ConfigDirs, args: ConfigArgs, format: OutputFormat) -> Result<()> {
  let mut config = dirs.load_jira_config()?;
  let show = args.show;
  let changed = args.has_changes();

  if changed {
    apply_changes(&mut config, args)?;
    dirs.save_jira_config(&config)?;
    if format == OutputFormat::Text {
      print_success(&format!("Saved Jira configuration to {}", dirs.jira_config_path().display()));
    }
  } else if !show && format == OutputFormat::Text {
    print_warning("No changes given; use --host, --max-results, --username or --mode to update settings.");
  }

  // JSON output always carries the resulting configuration.
  if show || !changed || format == OutputFormat::Json {
    show_config(dirs, &config, format)?;
  }
  Ok(())
}
