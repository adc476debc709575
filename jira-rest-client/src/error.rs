//! Error type for Jira REST operations.
//!
//! Every client operation fails with [`RestError`]. The variants say why the
//! remote operation failed so callers can word messages, but nothing inside
//! the client recovers from them.

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::JiraErrorResponse;

/// A Jira remote operation did not succeed
#[derive(Debug, Error)]
pub enum RestError {
  /// The request could not be sent or its body could not be read
  #[error("{context}: {source}")]
  Request {
    context: String,
    #[source]
    source: reqwest::Error,
  },

  /// The server rejected the credentials (HTTP 401/403)
  #[error("Authentication failed. Please check your Jira credentials.")]
  Authentication,

  /// The addressed resource does not exist or is not visible (HTTP 404)
  #[error("{0} not found")]
  NotFound(String),

  /// The server refused the request content (HTTP 400), e.g. invalid JQL
  #[error("Jira rejected the request: {0}")]
  BadRequest(String),

  /// Any other non-success status
  #[error("Unexpected error: HTTP {status} - {body}")]
  UnexpectedStatus { status: StatusCode, body: String },

  /// A success response whose body does not match the expected shape
  #[error("Failed to parse {resource}: {detail}")]
  Parse {
    resource: String,
    detail: String,
    #[source]
    source: serde_json::Error,
  },

  /// The configured server address is not a usable base URL
  #[error("Invalid Jira URL '{url}': {reason}")]
  InvalidUrl { url: String, reason: String },
}

/// Result alias used by every client operation
pub type Result<T> = std::result::Result<T, RestError>;

impl RestError {
  pub(crate) fn request(context: impl Into<String>, source: reqwest::Error) -> Self {
    Self::Request {
      context: context.into(),
      source,
    }
  }

  /// Build the error for a non-success response body.
  pub(crate) fn from_status(status: StatusCode, resource: &str, body: &str) -> Self {
    match status {
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Authentication,
      StatusCode::NOT_FOUND => Self::NotFound(resource.to_string()),
      StatusCode::BAD_REQUEST => Self::BadRequest(
        JiraErrorResponse::summarize(body).unwrap_or_else(|| format!("HTTP {status} for {resource}")),
      ),
      _ => Self::UnexpectedStatus {
        status,
        body: body.to_string(),
      },
    }
  }

  /// Build the error for a success response that failed to deserialize,
  /// preferring Jira's own error text when the body is an error document.
  pub(crate) fn parse(resource: &str, body: &str, source: serde_json::Error) -> Self {
    let detail = match JiraErrorResponse::summarize(body) {
      Some(message) => format!("Jira API error: {message}"),
      None => source.to_string(),
    };
    Self::Parse {
      resource: resource.to_string(),
      detail,
      source,
    }
  }

  /// Whether the server answered but refused the credentials
  pub const fn is_authentication(&self) -> bool {
    matches!(self, Self::Authentication)
  }

  /// Whether the addressed resource was missing
  pub const fn is_not_found(&self) -> bool {
    matches!(self, Self::NotFound(_))
  }
}
