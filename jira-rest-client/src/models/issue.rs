use serde::{Deserialize, Serialize};

use super::{BasicProject, CommentSummary, Component, JiraUser, Version, null_as_default};

/// Represents a Jira issue
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JiraIssue {
  pub id: String,
  pub key: String,
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default)]
  pub fields: JiraIssueFields,
}

/// Represents Jira issue fields
///
/// Searches may restrict the returned fields, so everything here tolerates
/// absence.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueFields {
  #[serde(default)]
  pub summary: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub status: JiraIssueStatus,
  #[serde(rename = "issuetype", default, skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<IssueType>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project: Option<BasicProject>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub priority: Option<Priority>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub reporter: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub resolution: Option<Resolution>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub labels: Vec<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub components: Vec<Component>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub fix_versions: Vec<Version>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub versions: Vec<Version>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub comment: Option<CommentSummary>,
}

/// Represents a status category (`new`, `indeterminate`, `done`)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCategory {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: u64,
  pub key: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub color_name: Option<String>,
  pub name: String,
}

/// Represents a Jira issue status
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraIssueStatus {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<String>,
  #[serde(default)]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub status_category: Option<StatusCategory>,
}

impl JiraIssueStatus {
  /// The status category key (`new`, `indeterminate`, `done`), if known
  pub fn category_key(&self) -> Option<&str> {
    self.status_category.as_ref().map(|category| category.key.as_str())
  }
}

/// Represents an issue type
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueType {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
  #[serde(default)]
  pub subtask: bool,
}

/// Statuses valid for one issue type of a project
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueTypeStatuses {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default)]
  pub subtask: bool,
  #[serde(default, deserialize_with = "null_as_default")]
  pub statuses: Vec<JiraIssueStatus>,
}

/// Represents an issue priority
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Priority {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon_url: Option<String>,
}

/// Represents an issue resolution
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_issue_deserialization() {
    let json = json!({
        "id": "10000",
        "key": "PROJ-123",
        "fields": {
            "summary": "Test issue",
            "description": "This is a test issue",
            "status": {
                "name": "In Progress"
            }
        }
    });

    let issue: JiraIssue = serde_json::from_value(json).unwrap();

    assert_eq!(issue.id, "10000");
    assert_eq!(issue.key, "PROJ-123");
    assert_eq!(issue.fields.summary, "Test issue");
    assert_eq!(issue.fields.description, Some("This is a test issue".to_string()));
    assert_eq!(issue.fields.status.name, "In Progress");
    assert!(issue.fields.labels.is_empty());
  }

  #[test]
  fn test_issue_with_rich_fields() {
    let json = json!({
        "id": "10002",
        "key": "EX-1",
        "self": "https://jira.example.com/rest/api/2/issue/10002",
        "fields": {
            "summary": "Crash on save",
            "description": null,
            "issuetype": { "id": "1", "name": "Bug", "subtask": false },
            "project": { "id": "10000", "key": "EX", "name": "Example" },
            "priority": { "id": "2", "name": "Critical" },
            "assignee": null,
            "reporter": { "name": "fred", "displayName": "Fred F. User", "active": true },
            "created": "2013-02-28T11:18:00.000+0100",
            "updated": "2013-03-01T09:00:00.000+0100",
            "resolution": null,
            "labels": ["crash", "editor"],
            "components": [],
            "fixVersions": [{ "id": "10001", "name": "1.1", "released": false }],
            "versions": null,
            "status": {
                "id": "3",
                "name": "In Progress",
                "statusCategory": { "id": 4, "key": "indeterminate", "colorName": "yellow", "name": "In Progress" }
            }
        }
    });

    let issue: JiraIssue = serde_json::from_value(json).unwrap();
    let fields = &issue.fields;
    assert_eq!(fields.issue_type.as_ref().unwrap().name, "Bug");
    assert_eq!(fields.project.as_ref().unwrap().key, "EX");
    assert_eq!(fields.priority.as_ref().unwrap().name, "Critical");
    assert!(fields.assignee.is_none());
    assert_eq!(fields.reporter.as_ref().unwrap().display_name, "Fred F. User");
    assert_eq!(fields.labels, vec!["crash", "editor"]);
    assert_eq!(fields.fix_versions[0].name, "1.1");
    assert!(fields.versions.is_empty());
    assert_eq!(fields.status.category_key(), Some("indeterminate"));
  }

  #[test]
  fn test_issue_without_fields_section() {
    let issue: JiraIssue = serde_json::from_value(json!({ "id": "1", "key": "EX-2" })).unwrap();
    assert!(issue.fields.summary.is_empty());
    assert!(issue.fields.status.name.is_empty());
  }

  #[test]
  fn test_project_statuses_deserialization() {
    let statuses: Vec<IssueTypeStatuses> = serde_json::from_value(json!([
        {
            "id": "3",
            "name": "Task",
            "subtask": false,
            "statuses": [
                { "id": "10000", "name": "To Do", "statusCategory": { "id": 2, "key": "new", "name": "To Do" } },
                { "id": "10001", "name": "Done", "statusCategory": { "id": 3, "key": "done", "name": "Done" } }
            ]
        }
    ]))
    .unwrap();

    assert_eq!(statuses[0].name, "Task");
    assert_eq!(statuses[0].statuses.len(), 2);
    assert_eq!(statuses[0].statuses[1].category_key(), Some("done"));
  }
}
