use serde::{Deserialize, Serialize};

use super::AvatarUrls;

/// Represents a Jira user
///
/// Jira Server identifies users by `name`/`key`, Jira Cloud by `account_id`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraUser {
  #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
  pub self_url: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub key: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub account_id: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email_address: Option<String>,
  #[serde(default)]
  pub display_name: String,
  #[serde(default)]
  pub active: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_zone: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub avatar_urls: Option<AvatarUrls>,
}

impl JiraUser {
  /// The login identifier regardless of deployment flavor
  pub fn login(&self) -> Option<&str> {
    self.name.as_deref().or(self.account_id.as_deref())
  }
}
