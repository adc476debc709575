//! # Jira Metadata Endpoints
//!
//! Server-wide issue types and workflow statuses.

use tracing::instrument;

use crate::client::JiraClient;
use crate::error::Result;
use crate::models::{IssueType, JiraIssueStatus};

impl JiraClient {
  /// Get every issue type defined on the server
  #[instrument(skip(self), level = "debug")]
  pub async fn get_issue_types(&self) -> Result<Vec<IssueType>> {
    let url = self.api_url(&["issuetype"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira issue types").await?;
    Self::read_json(response, "Issue types").await
  }

  /// Get every workflow status defined on the server
  #[instrument(skip(self), level = "debug")]
  pub async fn get_statuses(&self) -> Result<Vec<JiraIssueStatus>> {
    let url = self.api_url(&["status"])?;
    let response = Self::send(self.get(url), "Failed to fetch Jira statuses").await?;
    Self::read_json(response, "Statuses").await
  }
}
