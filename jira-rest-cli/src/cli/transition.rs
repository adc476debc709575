//! # Transition Commands
//!
//! Listing the workflow transitions of an issue and applying one by name
//! or id.

use anyhow::Result;
use clap::{Args, Subcommand};
use jira_rest_client::JiraTransition;
use jira_rest_core::output::{print_info, print_success};
use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{OutputFormat, or_dash, print_json};
use crate::clients::create_jira_session;

/// Command for workflow transitions
#[derive(Args)]
pub struct TransitionArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: TransitionSubcommands,
}

/// Subcommands for the transition command
#[derive(Subcommand)]
pub enum TransitionSubcommands {
  /// List the transitions available on an issue
  #[command(alias = "ls")]
  List {
    /// The Jira issue key (e.g., PROJ-123)
    key: String,
  },

  /// Move an issue through its workflow
  #[command(long_about = "Apply a workflow transition to an issue.\n\n\
                         The transition may be given by id or by name (case-insensitive).")]
  Apply {
    /// The Jira issue key (e.g., PROJ-123)
    key: String,

    /// The transition name or ID
    transition: String,
  },
}

#[derive(Tabled)]
struct TransitionRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "To Status")]
  to: String,
  #[tabled(rename = "Required Fields")]
  required: String,
}

fn transitions_table(transitions: &[JiraTransition]) -> String {
  let rows = transitions.iter().map(|transition| TransitionRow {
    id: transition.id.clone(),
    name: transition.name.clone(),
    to: or_dash(transition.to.as_ref().map(|to| to.name.as_str())),
    required: or_dash(Some(&transition.required_fields().collect::<Vec<_>>().join(", "))),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

/// Find the transition named or numbered `input`, preferring an exact id match
fn find_transition<'a>(transitions: &'a [JiraTransition], input: &str) -> Option<&'a JiraTransition> {
  let input = input.trim();
  transitions
    .iter()
    .find(|t| t.id == input)
    .or_else(|| transitions.iter().find(|t| t.matches(input)))
}

/// Handle the transition command
pub(super) fn handle_transition_command(transition: TransitionArgs, format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;

  match transition.subcommand {
    TransitionSubcommands::List { key } => {
      let key = session.issue_key(&key)?;
      let transitions = session.rt.block_on(session.client.get_transitions(&key))?;
      match format {
        OutputFormat::Json => print_json(&transitions)?,
        OutputFormat::Text if transitions.is_empty() => {
          print_info(&format!("No transitions available for issue {key}."));
        }
        OutputFormat::Text => {
          print_info(&format!("Available transitions for issue {}:", key.bright_blue()));
          println!("{}", transitions_table(&transitions));
        }
      }
      Ok(())
    }
    TransitionSubcommands::Apply { key, transition } => {
      let key = session.issue_key(&key)?;

      session.rt.block_on(async {
        let transitions = session.client.get_transitions(&key).await?;

        let Some(target) = find_transition(&transitions, &transition) else {
          let available: Vec<String> = transitions.iter().map(|t| format!("{} ({})", t.name, t.id)).collect();
          anyhow::bail!(
            "Transition '{transition}' not found for issue {key}. Available: {}",
            or_dash(Some(&available.join(", ")))
          );
        };

        let applied = session.client.transition_issue(&key, &target.id).await?;

        if format == OutputFormat::Json {
          print_json(&json!({ "issue": key, "transition": target, "applied": applied }))?;
        }

        if !applied {
          anyhow::bail!("Jira rejected transition '{}' for issue {key}", target.name);
        }

        if format == OutputFormat::Text {
          print_success(&format!("Transitioned issue {key} with '{}'", target.name));
          let required: Vec<&str> = target.required_fields().collect();
          if !required.is_empty() {
            print_info(&format!("This transition has screen fields: {}", required.join(", ")));
          }
        }
        Ok::<(), anyhow::Error>(())
      })
    }
  }
}
