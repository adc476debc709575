use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::CommentSummary;

impl JiraClient {
  /// Get the comments on an issue
  #[instrument(skip(self), level = "debug")]
  pub async fn get_comments_by_issue(&self, issue_key: &str) -> Result<CommentSummary> {
    let url = self.api_url(&["issue", issue_key, "comment"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira comments").await?;
    Self::read_json(response, &format!("Issue {issue_key}")).await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, ResponseTemplate};

  use crate::endpoints::test_support::mock_jira;

  #[tokio::test]
  async fn test_get_comments_by_issue() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "startAt": 0,
          "maxResults": 1048576,
          "total": 2,
          "comments": [
              {
                  "id": "100",
                  "author": {"name": "alice", "displayName": "Alice"},
                  "body": "Looks good",
                  "created": "2024-03-01T10:00:00.000+0000"
              },
              {"id": "101", "body": "Merged"}
          ]
      })))
      .mount(&mock_server)
      .await;

    let summary = client.get_comments_by_issue("TEST-123").await?;
    assert_eq!(summary.total, 2);
    assert_eq!(summary.comments[0].author.as_ref().map(|a| a.display_name.as_str()), Some("Alice"));
    assert_eq!(summary.comments[1].body, "Merged");
    assert!(summary.comments[1].author.is_none());

    Ok(())
  }

  #[tokio::test]
  async fn test_get_comments_issue_not_found() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/GONE-1/comment"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let error = client.get_comments_by_issue("GONE-1").await.unwrap_err();
    assert_eq!(error.to_string(), "Issue GONE-1 not found");

    Ok(())
  }
}
