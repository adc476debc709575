use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{AvatarUrls, IssueType, JiraUser, null_as_default};

/// Represents a project category
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectCategory {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

/// Represents a project as listed by `GET /project`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicProject {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub key: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_category: Option<ProjectCategory>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
}

/// Represents the full representation of a project
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub key: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lead: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub components: Vec<Component>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub issue_types: Vec<IssueType>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub versions: Vec<Version>,
  /// Role name to role resource URL
  #[serde(default, deserialize_with = "null_as_default")]
  pub roles: BTreeMap<String, String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_category: Option<ProjectCategory>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_type_key: Option<String>,
}

/// Represents a project version
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default)]
  pub archived: bool,
  #[serde(default)]
  pub released: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub start_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub release_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub user_release_date: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub overdue: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<u64>,
}

/// Represents a project component
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub lead: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub assignee: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<u64>,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_full_project_deserialization() {
    let json = json!({
        "self": "https://jira.example.com/rest/api/2/project/10000",
        "id": "10000",
        "key": "EX",
        "name": "Example",
        "description": "An example project",
        "lead": { "name": "fred", "displayName": "Fred F. User", "active": true },
        "components": [{ "id": "10000", "name": "Component 1", "isAssigneeTypeValid": false }],
        "issueTypes": [{ "id": "1", "name": "Bug", "subtask": false }],
        "versions": [],
        "roles": {
            "Developers": "https://jira.example.com/rest/api/2/project/EX/role/10000"
        },
        "projectCategory": { "id": "10000", "name": "FIRST", "description": "First Project Category" },
        "projectTypeKey": "software"
    });

    let project: Project = serde_json::from_value(json).unwrap();
    assert_eq!(project.key, "EX");
    assert_eq!(project.lead.unwrap().display_name, "Fred F. User");
    assert_eq!(project.components[0].name, "Component 1");
    assert_eq!(project.issue_types[0].name, "Bug");
    assert!(project.versions.is_empty());
    assert!(project.roles.contains_key("Developers"));
    assert_eq!(project.project_category.unwrap().name, "FIRST");
  }

  #[test]
  fn test_project_tolerates_null_collections() {
    let project: Project = serde_json::from_value(json!({
        "id": "10001",
        "key": "NUL",
        "name": "Nulls",
        "components": null,
        "versions": null
    }))
    .unwrap();

    assert!(project.components.is_empty());
    assert!(project.versions.is_empty());
    assert!(project.roles.is_empty());
  }

  #[test]
  fn test_version_deserialization() {
    let version: Version = serde_json::from_value(json!({
        "self": "https://jira.example.com/rest/api/2/version/10000",
        "id": "10000",
        "description": "An excellent version",
        "name": "New Version 1",
        "archived": false,
        "released": true,
        "releaseDate": "2010-07-06",
        "overdue": true,
        "userReleaseDate": "6/Jul/2010",
        "projectId": 10000
    }))
    .unwrap();

    assert_eq!(version.name, "New Version 1");
    assert!(version.released);
    assert_eq!(version.release_date.as_deref(), Some("2010-07-06"));
    assert_eq!(version.project_id, Some(10000));
  }
}
