//! # Jira Search Endpoint
//!
//! Extended issue search with a JQL request body.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::jql::JqlSearch;
use crate::models::JqlSearchResult;

impl JiraClient {
  /// Run a JQL search and return one page of matching issues
  #[instrument(skip(self), level = "debug")]
  pub async fn search_issues(&self, search: &JqlSearch) -> Result<JqlSearchResult> {
    let url = self.api_url(&["search"])?;
    let response = Self::send(self.post(url).json(search), "Failed to search Jira issues").await?;
    Self::read_json(response, "Search").await
  }
}
