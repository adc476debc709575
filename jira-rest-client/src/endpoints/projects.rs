//! # Jira Project Endpoints
//!
//! Project listing and per-project metadata: versions, components and the
//! workflow statuses of each issue type.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{BasicProject, Component, IssueTypeStatuses, Project, Version};

impl JiraClient {
  /// Get every project visible to the current user
  #[instrument(skip(self), level = "debug")]
  pub async fn get_all_projects(&self) -> Result<Vec<BasicProject>> {
    let url = self.api_url(&["project"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira projects").await?;
    Self::read_json(response, "Projects").await
  }

  /// Get a project by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_by_key(&self, project_key: &str) -> Result<Project> {
    let url = self.api_url(&["project", project_key])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira project").await?;
    Self::read_json(response, &format!("Project {project_key}")).await
  }

  /// Get the versions defined in a project
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_versions(&self, project_key: &str) -> Result<Vec<Version>> {
    let url = self.api_url(&["project", project_key, "versions"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira project versions").await?;
    Self::read_json(response, &format!("Project {project_key}")).await
  }

  /// Get the components defined in a project
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_components(&self, project_key: &str) -> Result<Vec<Component>> {
    let url = self.api_url(&["project", project_key, "components"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira project components").await?;
    Self::read_json(response, &format!("Project {project_key}")).await
  }

  /// Get the statuses available to each issue type of a project
  #[instrument(skip(self), level = "debug")]
  pub async fn get_project_statuses(&self, project_key: &str) -> Result<Vec<IssueTypeStatuses>> {
    let url = self.api_url(&["project", project_key, "statuses"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira project statuses").await?;
    Self::read_json(response, &format!("Project {project_key}")).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, ResponseTemplate};

  use crate::endpoints::test_support::mock_jira;
  use crate::error::RestError;

  #[tokio::test]
  async fn test_get_all_projects() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {
              "self": "https://jira.example.com/rest/api/2/project/10000",
              "id": "10000",
              "key": "EX",
              "name": "Example",
              "projectTypeKey": "software",
              "avatarUrls": {"48x48": "https://jira.example.com/avatar/48"}
          },
          {"id": "10001", "key": "OPS", "name": "Operations"}
      ])))
      .mount(&mock_server)
      .await;

    let projects = client.get_all_projects().await?;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].key, "EX");
    assert_eq!(projects[0].project_type_key.as_deref(), Some("software"));
    assert_eq!(projects[1].name, "Operations");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_by_key() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/EX"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "10000",
          "key": "EX",
          "name": "Example",
          "description": "Example project",
          "lead": {"name": "lead", "displayName": "Project Lead"},
          "components": [{"id": "1", "name": "Backend"}],
          "issueTypes": [{"id": "3", "name": "Task", "subtask": false}],
          "versions": [{"id": "20", "name": "1.0", "released": true, "archived": false}]
      })))
      .mount(&mock_server)
      .await;

    let project = client.get_project_by_key("EX").await?;
    assert_eq!(project.name, "Example");
    assert_eq!(project.lead.map(|lead| lead.display_name), Some("Project Lead".to_string()));
    assert_eq!(project.components[0].name, "Backend");
    assert_eq!(project.issue_types[0].name, "Task");
    assert!(project.versions[0].released);

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_not_found() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/NOPE"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["No project could be found with key 'NOPE'."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let error = client.get_project_by_key("NOPE").await.unwrap_err();
    assert!(error.is_not_found());
    assert_eq!(error.to_string(), "Project NOPE not found");

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_versions_and_components() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/EX/versions"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {"id": "20", "name": "1.0", "released": true, "archived": false, "releaseDate": "2024-05-01"},
          {"id": "21", "name": "1.1", "released": false, "archived": false, "overdue": true}
      ])))
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/EX/components"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {"id": "1", "name": "Backend", "assigneeType": "PROJECT_LEAD", "project": "EX", "projectId": 10000}
      ])))
      .mount(&mock_server)
      .await;

    let versions = client.get_project_versions("EX").await?;
    assert_eq!(versions.len(), 2);
    assert_eq!(versions[0].release_date.as_deref(), Some("2024-05-01"));
    assert_eq!(versions[1].overdue, Some(true));

    let components = client.get_project_components("EX").await?;
    assert_eq!(components[0].assignee_type.as_deref(), Some("PROJECT_LEAD"));
    assert_eq!(components[0].project_id, Some(10000));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_project_statuses() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project/EX/statuses"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([
          {
              "id": "3",
              "name": "Task",
              "subtask": false,
              "statuses": [
                  {"id": "1", "name": "Open", "statusCategory": {"id": 2, "key": "new", "name": "To Do"}},
                  {"id": "6", "name": "Closed", "statusCategory": {"id": 3, "key": "done", "name": "Done"}}
              ]
          }
      ])))
      .mount(&mock_server)
      .await;

    let statuses = client.get_project_statuses("EX").await?;
    assert_eq!(statuses[0].name, "Task");
    assert_eq!(statuses[0].statuses[1].category_key(), Some("done"));

    Ok(())
  }

  #[tokio::test]
  async fn test_projects_unauthorized() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/project"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let result = client.get_all_projects().await;
    assert!(matches!(result, Err(RestError::Authentication)));

    Ok(())
  }
}
