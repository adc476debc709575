use serde::{Deserialize, Serialize};

/// Represents `GET /serverInfo`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerInfo {
  pub base_url: String,
  pub version: String,
  #[serde(default)]
  pub version_numbers: Vec<u32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub deployment_type: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub build_number: Option<u64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub server_title: Option<String>,
}
