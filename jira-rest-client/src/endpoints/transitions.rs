//! # Jira Transition Endpoints
//!
//! Listing the workflow transitions available on an issue and applying one.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use tracing::{debug, instrument, warn};

use crate::client::JiraClient;
use crate::error::{RestError, Result};
use crate::models::{JiraErrorResponse, JiraTransition, JiraTransitions, TransitionRequest};

impl JiraClient {
  /// Get available transitions for an issue, including their screen fields
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions(&self, issue_key: &str) -> Result<Vec<JiraTransition>> {
    let mut url = self.api_url(&["issue", issue_key, "transitions"])?;
    url.query_pairs_mut().append_pair("expand", "transitions.fields");

    let response = Self::send(self.get(url), "Failed to fetch Jira transitions").await?;
    let transitions: JiraTransitions = Self::read_json(response, &format!("Issue {issue_key}")).await?;
    Ok(transitions.transitions)
  }

  /// Get available transitions for an issue keyed by transition id
  #[instrument(skip(self), level = "debug")]
  pub async fn get_transitions_by_id(&self, issue_key: &str) -> Result<BTreeMap<String, JiraTransition>> {
    let transitions = self.get_transitions(issue_key).await?;
    Ok(
      transitions
        .into_iter()
        .map(|transition| (transition.id.clone(), transition))
        .collect(),
    )
  }

  /// Transition an issue to a new status.
  ///
  /// Returns `false` when the workflow refuses the transition for the
  /// issue's current state.
  #[instrument(skip(self), level = "debug")]
  pub async fn transition_issue(&self, issue_key: &str, transition_id: &str) -> Result<bool> {
    let url = self.api_url(&["issue", issue_key, "transitions"])?;
    let payload = TransitionRequest::new(transition_id);

    let response = Self::send(self.post(url).json(&payload), "Failed to transition Jira issue").await?;
    let status = response.status();
    debug!(%status, "Transition response");

    if status.is_success() {
      return Ok(true);
    }

    let body = response.text().await.unwrap_or_default();
    match status {
      StatusCode::BAD_REQUEST | StatusCode::CONFLICT => {
        let reason = JiraErrorResponse::summarize(&body).unwrap_or_else(|| status.to_string());
        warn!(issue_key, transition_id, %reason, "Jira rejected the transition");
        Ok(false)
      }
      _ => Err(RestError::from_status(status, &format!("Issue {issue_key}"), &body)),
    }
  }
}
