//! # Jira Records
//!
//! Passive records mirroring the Jira REST API v2 JSON representation. Field
//! names follow Rust conventions; the wire names are camelCase.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

mod comment;
mod issue;
mod project;
mod search;
mod server;
mod transition;
mod user;

pub use comment::{Comment, CommentSummary};
pub use issue::{IssueType, IssueTypeStatuses, JiraIssue, JiraIssueFields, JiraIssueStatus, Priority, Resolution, StatusCategory};
pub use project::{BasicProject, Component, Project, ProjectCategory, Version};
pub use search::JqlSearchResult;
pub use server::ServerInfo;
pub use transition::{JiraTransition, JiraTransitions, TransitionField, TransitionId, TransitionRequest};
pub use user::JiraUser;

/// Avatar image URLs keyed by size (`16x16`, `24x24`, `32x32`, `48x48`)
pub type AvatarUrls = BTreeMap<String, String>;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub api_token: String,
}

impl std::fmt::Debug for JiraAuth {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("JiraAuth")
      .field("username", &self.username)
      .field("api_token", &"<redacted>")
      .finish()
  }
}

/// Error document Jira returns alongside 4xx statuses
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JiraErrorResponse {
  #[serde(default, deserialize_with = "null_as_default")]
  pub error_messages: Vec<String>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub errors: BTreeMap<String, String>,
}

impl JiraErrorResponse {
  /// Join the messages of an error document, or `None` when `body` is not one
  pub(crate) fn summarize(body: &str) -> Option<String> {
    let response = serde_json::from_str::<Self>(body).ok()?;

    let messages: Vec<String> = response
      .error_messages
      .into_iter()
      .chain(response.errors.into_iter().map(|(field, message)| format!("{field}: {message}")))
      .collect();

    (!messages.is_empty()).then(|| messages.join("; "))
  }
}

/// Treat an explicit JSON `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_jira_auth_debug_hides_token() {
    let auth = JiraAuth {
      username: "test_user".to_string(),
      api_token: "test_token".to_string(),
    };

    let debug = format!("{auth:?}");
    assert!(debug.contains("test_user"));
    assert!(!debug.contains("test_token"));
  }

  #[test]
  fn test_error_response_summary() {
    let body = r#"{"errorMessages":["Issue does not exist"],"errors":{"summary":"Field required"}}"#;
    assert_eq!(
      JiraErrorResponse::summarize(body).as_deref(),
      Some("Issue does not exist; summary: Field required")
    );

    assert_eq!(JiraErrorResponse::summarize(r#"{"errorMessages":[],"errors":{}}"#), None);
    assert_eq!(JiraErrorResponse::summarize("<html>Bad Gateway</html>"), None);
  }
}
