use reqwest::header::{ACCEPT, USER_AGENT as USER_AGENT_HEADER};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::consts::{API_PATH, DEFAULT_MAX_RESULTS, USER_AGENT};
use crate::error::{RestError, Result};
use crate::models::JiraAuth;

/// Represents a Jira API client
#[derive(Debug, Clone)]
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
  pub(crate) max_results: u32,
}

impl JiraClient {
  /// Create a new Jira client
  pub fn new(base_url: &str, auth: JiraAuth) -> Self {
    let client = Client::new();
    Self {
      client,
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
      max_results: DEFAULT_MAX_RESULTS,
    }
  }

  /// Use `max_results` as the page size for project issue listings
  pub fn with_max_results(mut self, max_results: u32) -> Self {
    self.max_results = max_results;
    self
  }

  /// The server address requests are sent to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// The login requests authenticate as
  pub fn username(&self) -> &str {
    &self.auth.username
  }

  /// Page size used for project issue listings
  pub fn max_results(&self) -> u32 {
    self.max_results
  }

  /// Build `{base}/rest/api/2/{segments...}`, percent-encoding each segment
  pub(crate) fn api_url(&self, segments: &[&str]) -> Result<Url> {
    let mut url = Url::parse(&self.base_url).map_err(|e| RestError::InvalidUrl {
      url: self.base_url.clone(),
      reason: e.to_string(),
    })?;

    url
      .path_segments_mut()
      .map_err(|()| RestError::InvalidUrl {
        url: self.base_url.clone(),
        reason: "URL cannot be used as a base".to_string(),
      })?
      .pop_if_empty()
      .extend(API_PATH)
      .extend(segments);

    Ok(url)
  }

  fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
    request
      .basic_auth(&self.auth.username, Some(&self.auth.api_token))
      .header(USER_AGENT_HEADER, USER_AGENT)
      .header(ACCEPT, "application/json")
  }

  pub(crate) fn get(&self, url: Url) -> RequestBuilder {
    debug!(%url, "GET");
    self.authorize(self.client.get(url))
  }

  pub(crate) fn post(&self, url: Url) -> RequestBuilder {
    debug!(%url, "POST");
    self.authorize(self.client.post(url))
  }

  /// Send a request, turning transport failures into [`RestError::Request`]
  pub(crate) async fn send(request: RequestBuilder, context: &str) -> Result<Response> {
    request.send().await.map_err(|e| RestError::request(context, e))
  }

  /// Decode a success body as `T`, or map the status to an error naming `resource`
  pub(crate) async fn read_json<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T> {
    let status = response.status();
    debug!(%status, resource, "Jira responded");

    let body = response
      .text()
      .await
      .map_err(|e| RestError::request(format!("Failed to read {resource} response"), e))?;

    if status.is_success() {
      serde_json::from_str(&body).map_err(|e| RestError::parse(resource, &body, e))
    } else {
      Err(RestError::from_status(status, resource, &body))
    }
  }

  /// Test the Jira connection by fetching the current user
  #[instrument(skip(self), level = "debug")]
  pub async fn test_connection(&self) -> Result<bool> {
    let url = self.api_url(&["myself"])?;
    let response = Self::send(self.get(url), "Failed to connect to Jira").await?;
    let status = response.status();
    debug!(%status, "Connection test finished");

    Ok(status.is_success())
  }

  /// Test whether `username`/`password` can log in to the server at `base_url`
  pub async fn test_rest_connection(base_url: &str, username: &str, password: &str) -> Result<bool> {
    create_jira_client(base_url, username, password)?.test_connection().await
  }
}

/// Create a Jira client from credentials
pub fn create_jira_client(base_url: &str, username: &str, api_token: &str) -> Result<JiraClient> {
  let parsed = Url::parse(base_url).map_err(|e| RestError::InvalidUrl {
    url: base_url.to_string(),
    reason: e.to_string(),
  })?;

  if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
    return Err(RestError::InvalidUrl {
      url: base_url.to_string(),
      reason: "expected an http or https address".to_string(),
    });
  }

  let auth = JiraAuth {
    username: username.to_string(),
    api_token: api_token.to_string(),
  };

  Ok(JiraClient::new(base_url, auth))
}
