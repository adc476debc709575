//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the jira-rest tool.
//! Each subcommand maps onto one or two Jira REST client operations.

mod config;
mod connection;
mod issue;
mod metadata;
mod project;
mod transition;

use anyhow::{Context, Result};
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};
use jira_rest_core::ColorMode;
use serde::Serialize;

pub use self::config::{ConfigArgs, ParsingModeArg};
pub use self::connection::TestConnectionArgs;
pub use self::issue::{IssueArgs, IssueSubcommands};
pub use self::project::{ProjectArgs, ProjectSubcommands};
pub use self::transition::{TransitionArgs, TransitionSubcommands};

/// Top-level CLI command for the jira-rest tool
#[derive(Parser)]
#[command(name = "jira-rest")]
#[command(about = "Query and update a Jira server through its REST API")]
#[command(
  long_about = "jira-rest talks to a Jira server over the REST API v2.\n\n\
        It lists projects and their metadata, fetches and searches issues,\n\
        reads comments and moves issues through their workflow. The server is\n\
        taken from $JIRA_HOST or the saved configuration and credentials from ~/.netrc."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightBlue.on_default().bold().underline())
    .usage(AnsiColor::Blue.on_default().bold())
    .literal(AnsiColor::BrightBlue.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    global = true,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages (request URLs and status codes)\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Controls when colored output is used
  #[arg(
    long,
    value_enum,
    ignore_case = true,
    global = true,
    default_value_t = ColorMode::Auto,
  )]
  pub colors: ColorMode,

  /// Print the raw Jira records as pretty JSON instead of tables
  #[arg(long, global = true)]
  pub json: bool,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the jira-rest tool
#[derive(Subcommand)]
pub enum Commands {
  /// Check that the server accepts your credentials
  #[command(long_about = "Log in to the Jira server and report whether the credentials were accepted.\n\n\
            Without --password the credentials come from ~/.netrc, looked up for the host\n\
            and then for 'atlassian.net'.")]
  TestConnection(TestConnectionArgs),

  /// Show the user you are logged in as
  Whoami,

  /// Show the server version and deployment type
  ServerInfo,

  /// Projects and their versions, components and statuses
  #[command(alias = "p")]
  Project(ProjectArgs),

  /// Fetch, list and search issues
  #[command(alias = "i")]
  Issue(IssueArgs),

  /// List every issue type defined on the server
  IssueTypes,

  /// List every workflow status defined on the server
  Statuses,

  /// List or apply workflow transitions
  #[command(alias = "t")]
  Transition(TransitionArgs),

  /// Show or change the saved configuration
  #[command(long_about = "Show or change the settings saved in jira.toml.\n\n\
            The host saved here is used when $JIRA_HOST is not set.")]
  Config(ConfigArgs),
}

/// Whether records are rendered for people or machines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OutputFormat {
  Text,
  Json,
}

impl OutputFormat {
  pub(crate) const fn from_flag(json: bool) -> Self {
    if json { Self::Json } else { Self::Text }
  }
}

/// Print `value` as pretty JSON on stdout
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
  let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output as JSON")?;
  println!("{rendered}");
  Ok(())
}

/// Render a missing value in tables
pub(crate) fn or_dash(value: Option<&str>) -> String {
  value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}

pub fn handle_cli(cli: Cli) -> Result<()> {
  cli.colors.apply();
  let format = OutputFormat::from_flag(cli.json);

  match cli.command {
    Commands::TestConnection(args) => connection::handle_test_connection(args, format),
    Commands::Whoami => connection::handle_whoami(format),
    Commands::ServerInfo => connection::handle_server_info(format),
    Commands::Project(project) => project::handle_project_command(project, format),
    Commands::Issue(issue) => issue::handle_issue_command(issue, format),
    Commands::IssueTypes => metadata::handle_issue_types(format),
    Commands::Statuses => metadata::handle_statuses(format),
    Commands::Transition(transition) => transition::handle_transition_command(transition, format),
    Commands::Config(config) => config::handle_config_command(config, format),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_or_dash() {
    assert_eq!(or_dash(Some("value")), "value");
    assert_eq!(or_dash(Some("")), "-");
    assert_eq!(or_dash(None), "-");
  }

  #[test]
  fn test_output_format_from_flag() {
    assert_eq!(OutputFormat::from_flag(true), OutputFormat::Json);
    assert_eq!(OutputFormat::from_flag(false), OutputFormat::Text);
  }
}
