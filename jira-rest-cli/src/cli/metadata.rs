//! # Metadata Commands
//!
//! Server-wide issue types and workflow statuses.

use anyhow::Result;
use jira_rest_client::{IssueType, JiraIssueStatus};
use jira_rest_core::output::format_status;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{OutputFormat, or_dash, print_json};
use crate::clients::create_jira_session;

#[derive(Tabled)]
struct IssueTypeRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Sub-task")]
  subtask: String,
  #[tabled(rename = "Description")]
  description: String,
}

#[derive(Tabled)]
struct StatusRow {
  #[tabled(rename = "ID")]
  id: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Category")]
  category: String,
}

fn issue_types_table(issue_types: &[IssueType]) -> String {
  let rows = issue_types.iter().map(|issue_type| IssueTypeRow {
    id: issue_type.id.clone(),
    name: issue_type.name.clone(),
    subtask: if issue_type.subtask { "yes" } else { "no" }.to_string(),
    description: or_dash(issue_type.description.as_deref()),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

fn statuses_table(statuses: &[JiraIssueStatus]) -> String {
  let rows = statuses.iter().map(|status| StatusRow {
    id: or_dash(status.id.as_deref()),
    name: format_status(&status.name, status.category_key()),
    category: or_dash(status.status_category.as_ref().map(|c| c.name.as_str())),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

pub(super) fn handle_issue_types(format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;
  let issue_types = session.rt.block_on(session.client.get_issue_types())?;

  match format {
    OutputFormat::Json => print_json(&issue_types),
    OutputFormat::Text => {
      println!("{}", issue_types_table(&issue_types));
      Ok(())
    }
  }
}

pub(super) fn handle_statuses(format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;
  let statuses = session.rt.block_on(session.client.get_statuses())?;

  match format {
    OutputFormat::Json => print_json(&statuses),
    OutputFormat::Text => {
      println!("{}", statuses_table(&statuses));
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_issue_types_table() {
    let issue_types: Vec<IssueType> = serde_json::from_value(json!([
        {"id": "1", "name": "Bug", "subtask": false},
        {"id": "5", "name": "Sub-task", "subtask": true, "description": "Part of a parent"}
    ]))
    .unwrap();

    let table = issue_types_table(&issue_types);
    assert!(table.contains("Bug"));
    assert!(table.contains("Part of a parent"));
  }

  #[test]
  fn test_statuses_table() {
    owo_colors::set_override(false);
    let statuses: Vec<JiraIssueStatus> = serde_json::from_value(json!([
        {"id": "6", "name": "Closed", "statusCategory": {"id": 3, "key": "done", "name": "Done"}},
        {"name": "Legacy"}
    ]))
    .unwrap();

    let table = statuses_table(&statuses);
    assert!(table.contains("Closed"));
    assert!(table.contains("Done"));
    assert!(table.contains("Legacy"));
    owo_colors::unset_override();
  }
}
