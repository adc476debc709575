use serde::{Deserialize, Serialize};

use super::{JiraUser, null_as_default};

/// Represents a comment on an issue
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  pub id: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub author: Option<JiraUser>,
  #[serde(default)]
  pub body: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub update_author: Option<JiraUser>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub updated: Option<String>,
}

/// The summarized page of comments returned for an issue
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSummary {
  #[serde(default)]
  pub start_at: u32,
  #[serde(default)]
  pub max_results: u32,
  #[serde(default)]
  pub total: u32,
  #[serde(default, deserialize_with = "null_as_default")]
  pub comments: Vec<Comment>,
}
