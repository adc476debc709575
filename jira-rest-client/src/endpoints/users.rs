use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::JiraUser;

impl JiraClient {
  /// Get the user the client is authenticated as
  #[instrument(skip(self), level = "debug")]
  pub async fn get_logged_in_user(&self) -> Result<JiraUser> {
    let url = self.api_url(&["myself"])?;
    let response = Self::send(self.get(url), "Failed to fetch the current Jira user").await?;
    Self::read_json(response, "Current user").await
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path};
  use wiremock::{Mock, ResponseTemplate};

  use crate::endpoints::test_support::mock_jira;

  #[tokio::test]
  async fn test_get_logged_in_user() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .and(basic_auth("test_user", "test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "self": "https://jira.example.com/rest/api/2/user?username=test_user",
          "name": "test_user",
          "key": "test_user",
          "emailAddress": "test@example.com",
          "displayName": "Test User",
          "active": true,
          "timeZone": "Europe/Berlin"
      })))
      .mount(&mock_server)
      .await;

    let user = client.get_logged_in_user().await?;
    assert_eq!(user.display_name, "Test User");
    assert_eq!(user.email_address.as_deref(), Some("test@example.com"));
    assert_eq!(user.login(), Some("test_user"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_logged_in_user_unauthorized() -> anyhow::Result<()> {
    let (mock_server, client) = mock_jira().await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .respond_with(ResponseTemplate::new(401).set_body_string(""))
      .mount(&mock_server)
      .await;

    let error = client.get_logged_in_user().await.unwrap_err();
    assert!(error.is_authentication());

    Ok(())
  }
}
