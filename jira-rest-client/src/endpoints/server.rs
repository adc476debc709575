use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::ServerInfo;

impl JiraClient {
  /// Get the server's version and deployment details
  #[instrument(skip(self), level = "debug")]
  pub async fn get_server_info(&self) -> Result<ServerInfo> {
    let url = self.api_url(&["serverInfo"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira server info").await?;
    Self::read_json(response, "Server info").await
  }
}
