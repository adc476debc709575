//! # Jira Issue Endpoints
//!
//! Fetching a single issue by key and listing the issues of a project.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::jql::{Field, JqlBuilder, JqlSearch};
use crate::models::{JiraIssue, JqlSearchResult};

impl JiraClient {
  /// Get a Jira issue by key
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue(&self, issue_key: &str) -> Result<JiraIssue> {
    let url = self.api_url(&["issue", issue_key])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira issue").await?;
    Self::read_json(response, &format!("Issue {issue_key}")).await
  }

  /// Get the first page of issues in a project, sized by the client's page size
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issues_for_project(&self, project_key: &str) -> Result<JqlSearchResult> {
    let jql = JqlBuilder::new().eq(Field::Project, project_key).build();
    let search = JqlSearch::new(jql).max_results(self.max_results);
    self.search_issues(&search).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, body_json, method, path};
  use wiremock::{Mock, ResponseTemplate};

  use crate::endpoints::test_support::mock_jira;
  use crate::error::RestError;

  #[tokio::test]
  async fn test_get_issue() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "description": "This is a test issue",
              "issuetype": {"id": "3", "name": "Task", "subtask": false},
              "labels": ["backend"],
              "assignee": null,
              "status": {
                  "id": "10001",
                  "name": "In Progress",
                  "statusCategory": {
                      "id": 4,
                      "key": "indeterminate",
                      "name": "In Progress"
                  }
              }
          }
      })))
      .mount(&mock_server)
      .await;

    let issue = client.get_issue("TEST-123").await?;
    assert_eq!(issue.key, "TEST-123");
    assert_eq!(issue.fields.summary, "Test issue");
    assert_eq!(issue.fields.status.name, "In Progress");
    assert_eq!(issue.fields.issue_type.map(|t| t.name), Some("Task".to_string()));
    assert_eq!(issue.fields.labels, vec!["backend"]);
    assert!(issue.fields.assignee.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(404).set_body_json(json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let result = client.get_issue("NONEXISTENT-123").await;
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("not found"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_unauthorized() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .respond_with(ResponseTemplate::new(403))
      .mount(&mock_server)
      .await;

    let error = client.get_issue("TEST-123").await.unwrap_err();
    assert!(error.is_authentication());
    assert!(error.to_string().contains("Authentication failed"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_server_error() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
      .mount(&mock_server)
      .await;

    let result = client.get_issue("TEST-123").await;
    match result {
      Err(RestError::UnexpectedStatus { status, body }) => {
        assert_eq!(status.as_u16(), 500);
        assert_eq!(body, "Internal Server Error");
      }
      other => panic!("expected an unexpected-status error, got {other:?}"),
    }

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issues_for_project() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;
    let client = client.with_max_results(25);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/search"))
      .and(basic_auth("test_user", "test_token"))
      .and(body_json(json!({
          "jql": "project = EX",
          "startAt": 0,
          "maxResults": 25
      })))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 25,
          "total": 1,
          "issues": [
              {"id": "1", "key": "EX-1", "fields": {"summary": "First", "status": {"name": "Open"}}}
          ]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let result = client.get_issues_for_project("EX").await?;
    assert_eq!(result.total, 1);
    assert_eq!(result.issues[0].key, "EX-1");
    assert!(!result.has_more());

    Ok(())
  }
}
