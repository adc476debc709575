//! # Project Commands
//!
//! Project listing and per-project versions, components and statuses,
//! rendered as tables.

use anyhow::Result;
use clap::{Args, Subcommand};
use jira_rest_client::{BasicProject, Component, IssueTypeStatuses, Project, Version};
use jira_rest_core::output::{format_status, print_header, print_info};
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{OutputFormat, or_dash, print_json};
use crate::clients::create_jira_session;

/// Command for project queries
#[derive(Args)]
pub struct ProjectArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: ProjectSubcommands,
}

/// Subcommands for the project command
#[derive(Subcommand)]
pub enum ProjectSubcommands {
  /// List every project visible to you
  #[command(alias = "ls")]
  List,

  /// Show a project's details
  Show {
    /// The project key (e.g., PROJ)
    key: String,
  },

  /// List a project's versions
  Versions {
    /// The project key (e.g., PROJ)
    key: String,
  },

  /// List a project's components
  Components {
    /// The project key (e.g., PROJ)
    key: String,
  },

  /// List the workflow statuses of each issue type in a project
  Statuses {
    /// The project key (e.g., PROJ)
    key: String,
  },
}

#[derive(Tabled)]
struct ProjectRow {
  #[tabled(rename = "Key")]
  key: String,
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Type")]
  project_type: String,
  #[tabled(rename = "Category")]
  category: String,
}

#[derive(Tabled)]
struct VersionRow {
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Released")]
  released: String,
  #[tabled(rename = "Release Date")]
  release_date: String,
  #[tabled(rename = "Description")]
  description: String,
}

#[derive(Tabled)]
struct ComponentRow {
  #[tabled(rename = "Name")]
  name: String,
  #[tabled(rename = "Lead")]
  lead: String,
  #[tabled(rename = "Description")]
  description: String,
}

fn projects_table(projects: &[BasicProject]) -> String {
  let rows = projects.iter().map(|project| ProjectRow {
    key: project.key.clone(),
    name: project.name.clone(),
    project_type: or_dash(project.project_type_key.as_deref()),
    category: or_dash(project.project_category.as_ref().map(|c| c.name.as_str())),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

fn versions_table(versions: &[Version]) -> String {
  let rows = versions.iter().map(|version| VersionRow {
    name: version.name.clone(),
    released: match (version.released, version.archived) {
      (_, true) => "archived".to_string(),
      (true, false) => "yes".to_string(),
      (false, false) => "no".to_string(),
    },
    release_date: or_dash(version.release_date.as_deref()),
    description: or_dash(version.description.as_deref()),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

fn components_table(components: &[Component]) -> String {
  let rows = components.iter().map(|component| ComponentRow {
    name: component.name.clone(),
    lead: or_dash(component.lead.as_ref().map(|lead| lead.display_name.as_str())),
    description: or_dash(component.description.as_deref()),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

fn print_project(project: &Project) {
  print_header(&format!("{} ({})", project.name, project.key));
  if let Some(description) = project.description.as_deref().filter(|d| !d.is_empty()) {
    println!("  {description}");
  }
  println!(
    "  {}: {}",
    "Lead".bold(),
    or_dash(project.lead.as_ref().map(|lead| lead.display_name.as_str()))
  );
  println!("  {}: {}", "Type".bold(), or_dash(project.project_type_key.as_deref()));

  let issue_types: Vec<&str> = project.issue_types.iter().map(|t| t.name.as_str()).collect();
  println!("  {}: {}", "Issue types".bold(), or_dash(Some(&issue_types.join(", "))));
  println!("  {}: {}", "Components".bold(), project.components.len());
  println!("  {}: {}", "Versions".bold(), project.versions.len());
}

fn print_project_statuses(statuses: &[IssueTypeStatuses]) {
  for issue_type in statuses {
    print_header(&issue_type.name);
    for status in &issue_type.statuses {
      println!("  • {}", format_status(&status.name, status.category_key()));
    }
  }
}

/// Handle the project command
pub(super) fn handle_project_command(project: ProjectArgs, format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;

  match project.subcommand {
    ProjectSubcommands::List => {
      let projects = session.rt.block_on(session.client.get_all_projects())?;
      match format {
        OutputFormat::Json => print_json(&projects)?,
        OutputFormat::Text if projects.is_empty() => print_info("No projects are visible to you."),
        OutputFormat::Text => println!("{}", projects_table(&projects)),
      }
    }
    ProjectSubcommands::Show { key } => {
      let key = session.project_key(&key)?;
      let project = session.rt.block_on(session.client.get_project_by_key(&key))?;
      match format {
        OutputFormat::Json => print_json(&project)?,
        OutputFormat::Text => print_project(&project),
      }
    }
    ProjectSubcommands::Versions { key } => {
      let key = session.project_key(&key)?;
      let versions = session.rt.block_on(session.client.get_project_versions(&key))?;
      match format {
        OutputFormat::Json => print_json(&versions)?,
        OutputFormat::Text if versions.is_empty() => print_info(&format!("Project {key} has no versions.")),
        OutputFormat::Text => println!("{}", versions_table(&versions)),
      }
    }
    ProjectSubcommands::Components { key } => {
      let key = session.project_key(&key)?;
      let components = session.rt.block_on(session.client.get_project_components(&key))?;
      match format {
        OutputFormat::Json => print_json(&components)?,
        OutputFormat::Text if components.is_empty() => print_info(&format!("Project {key} has no components.")),
        OutputFormat::Text => println!("{}", components_table(&components)),
      }
    }
    ProjectSubcommands::Statuses { key } => {
      let key = session.project_key(&key)?;
      let statuses = session.rt.block_on(session.client.get_project_statuses(&key))?;
      match format {
        OutputFormat::Json => print_json(&statuses)?,
        OutputFormat::Text => print_project_statuses(&statuses),
      }
    }
  }

  Ok(())
}
