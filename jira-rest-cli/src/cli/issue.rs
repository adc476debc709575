//! # Issue Commands
//!
//! Fetching single issues, listing a project's issues, running JQL searches
//! and reading comments.

use anyhow::Result;
use clap::{Args, Subcommand};
use jira_rest_client::{CommentSummary, JiraIssue, JqlSearch, JqlSearchResult};
use jira_rest_core::output::{format_status, print_header, print_info, truncate_string};
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{OutputFormat, or_dash, print_json};
use crate::clients::{JiraSession, create_jira_session};

const SUMMARY_WIDTH: usize = 60;

/// Command for issue queries
#[derive(Args)]
pub struct IssueArgs {
  /// The subcommand to execute
  #[command(subcommand)]
  pub subcommand: IssueSubcommands,
}

/// Subcommands for the issue command
#[derive(Subcommand)]
pub enum IssueSubcommands {
  /// List the first page of issues in a project
  #[command(alias = "ls")]
  List {
    /// The project key (e.g., PROJ)
    project: String,
  },

  /// Show an issue's details
  #[command(alias = "view")]
  Show {
    /// The Jira issue key (e.g., PROJ-123, proj123)
    key: String,
  },

  /// Search issues with JQL
  #[command(long_about = "Run a JQL query and print one page of matching issues.\n\n\
                         Example: jira-rest issue search 'project = PROJ AND status = \"In Progress\"'")]
  Search {
    /// The JQL query
    jql: String,

    /// Index of the first match to return
    #[arg(long, default_value_t = 0)]
    start_at: u32,

    /// Page size (defaults to the configured max_results)
    #[arg(long)]
    max_results: Option<u32>,

    /// Only return these fields, comma separated
    #[arg(long, value_delimiter = ',')]
    fields: Vec<String>,
  },

  /// Show the comments on an issue
  Comments {
    /// The Jira issue key (e.g., PROJ-123, proj123)
    key: String,
  },
}

#[derive(Tabled)]
struct IssueRow {
  #[tabled(rename = "Key")]
  key: String,
  #[tabled(rename = "Type")]
  issue_type: String,
  #[tabled(rename = "Status")]
  status: String,
  #[tabled(rename = "Summary")]
  summary: String,
  #[tabled(rename = "Assignee")]
  assignee: String,
}

fn issues_table(issues: &[JiraIssue]) -> String {
  let rows = issues.iter().map(|issue| IssueRow {
    key: issue.key.clone(),
    issue_type: or_dash(issue.fields.issue_type.as_ref().map(|t| t.name.as_str())),
    status: or_dash(Some(&issue.fields.status.name)),
    summary: truncate_string(&issue.fields.summary, SUMMARY_WIDTH),
    assignee: issue
      .fields
      .assignee
      .as_ref()
      .map_or_else(|| "Unassigned".to_string(), |a| a.display_name.clone()),
  });
  Table::new(rows).with(Style::sharp()).to_string()
}

/// "Showing 51-100 of 230" style footer for a result page
fn page_footer(result: &JqlSearchResult) -> String {
  if result.issues.is_empty() {
    return format!("No issues on this page ({} total)", result.total);
  }
  let first = result.start_at + 1;
  let last = result.start_at + result.issues.len() as u32;
  let mut footer = format!("Showing {first}-{last} of {}", result.total);
  if result.has_more() {
    footer.push_str(&format!(" (next page: --start-at {last})"));
  }
  footer
}

fn print_search_result(result: &JqlSearchResult, format: OutputFormat) -> Result<()> {
  match format {
    OutputFormat::Json => print_json(result)?,
    OutputFormat::Text if result.issues.is_empty() && result.start_at == 0 => print_info("No issues found."),
    OutputFormat::Text => {
      println!("{}", issues_table(&result.issues));
      println!("{}", page_footer(result).dimmed());
    }
  }
  Ok(())
}

fn print_issue(session: &JiraSession, issue: &JiraIssue) {
  let fields = &issue.fields;

  println!("\n{}", "📋 Issue Details".bright_cyan().bold());
  println!("   {}: {}", "Key".bold(), issue.key.bright_blue());
  println!("   {}: {}", "Summary".bold(), fields.summary);
  println!(
    "   {}: {}",
    "Status".bold(),
    format_status(&fields.status.name, fields.status.category_key())
  );
  println!(
    "   {}: {}",
    "Type".bold(),
    or_dash(fields.issue_type.as_ref().map(|t| t.name.as_str()))
  );
  println!(
    "   {}: {}",
    "Priority".bold(),
    or_dash(fields.priority.as_ref().map(|p| p.name.as_str()))
  );

  match &fields.assignee {
    Some(assignee) => println!("   {}: {}", "Assignee".bold(), assignee.display_name),
    None => println!("   {}: {}", "Assignee".bold(), "Unassigned".dimmed()),
  }
  if let Some(reporter) = &fields.reporter {
    println!("   {}: {}", "Reporter".bold(), reporter.display_name);
  }
  if let Some(resolution) = &fields.resolution {
    println!("   {}: {}", "Resolution".bold(), resolution.name);
  }
  if !fields.labels.is_empty() {
    println!("   {}: {}", "Labels".bold(), fields.labels.join(", "));
  }
  if !fields.fix_versions.is_empty() {
    let names: Vec<&str> = fields.fix_versions.iter().map(|v| v.name.as_str()).collect();
    println!("   {}: {}", "Fix versions".bold(), names.join(", "));
  }
  if let Some(created) = &fields.created {
    println!("   {}: {created}", "Created".bold());
  }
  if let Some(updated) = &fields.updated {
    println!("   {}: {updated}", "Updated".bold());
  }

  if let Some(description) = fields.description.as_deref().filter(|d| !d.trim().is_empty()) {
    println!("\n{}", "📝 Description".bright_cyan().bold());
    for line in description.lines() {
      println!("   {line}");
    }
  }

  println!("\n{}: {}", "🔗 URL".bright_cyan().bold(), session.browse_url(&issue.key));
}

fn print_comments(issue_key: &str, summary: &CommentSummary) {
  if summary.comments.is_empty() {
    print_info(&format!("Issue {issue_key} has no comments."));
    return;
  }

  print_header(&format!("{} comment(s) on {issue_key}", summary.total));
  for comment in &summary.comments {
    let author = comment
      .author
      .as_ref()
      .map_or("Anonymous", |author| author.display_name.as_str());
    println!(
      "\n{} {}",
      author.bold(),
      comment.created.as_deref().unwrap_or_default().dimmed()
    );
    for line in comment.body.lines() {
      println!("  {line}");
    }
  }
}

/// Handle the issue command
pub(super) fn handle_issue_command(issue: IssueArgs, format: OutputFormat) -> Result<()> {
  let session = create_jira_session()?;

  match issue.subcommand {
    IssueSubcommands::List { project } => {
      let project = session.project_key(&project)?;
      let result = session.rt.block_on(session.client.get_issues_for_project(&project))?;
      print_search_result(&result, format)?;
    }
    IssueSubcommands::Show { key } => {
      let key = session.issue_key(&key)?;
      let issue = session.rt.block_on(session.client.get_issue(&key))?;
      match format {
        OutputFormat::Json => print_json(&issue)?,
        OutputFormat::Text => print_issue(&session, &issue),
      }
    }
    IssueSubcommands::Search {
      jql,
      start_at,
      max_results,
      fields,
    } => {
      let search = JqlSearch::new(jql)
        .start_at(start_at)
        .max_results(max_results.unwrap_or_else(|| session.client.max_results()))
        .fields(fields);
      let result = session.rt.block_on(session.client.search_issues(&search))?;
      print_search_result(&result, format)?;
    }
    IssueSubcommands::Comments { key } => {
      let key = session.issue_key(&key)?;
      let comments = session.rt.block_on(session.client.get_comments_by_issue(&key))?;
      match format {
        OutputFormat::Json => print_json(&comments)?,
        OutputFormat::Text => print_comments(&key, &comments),
      }
    }
  }

  Ok(())
}
