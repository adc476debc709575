use serde::{Deserialize, Serialize};

use super::{JiraIssue, null_as_default};

/// Represents one page of JQL search results
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JqlSearchResult {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub expand: Option<String>,
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
  #[serde(default, deserialize_with = "null_as_default")]
  pub issues: Vec<JiraIssue>,
}

impl JqlSearchResult {
  /// Whether the server holds matches beyond this page
  pub fn has_more(&self) -> bool {
    let seen = self.start_at as usize + self.issues.len();
    seen < self.total as usize
  }
}
