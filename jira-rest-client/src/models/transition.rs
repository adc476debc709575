use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{JiraIssueStatus, null_as_default};

/// Represents a Jira transition
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JiraTransition {
  pub id: String,
  pub name: String,
  /// The status the issue ends up in
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub to: Option<JiraIssueStatus>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_screen: Option<bool>,
  /// Screen fields, present when requested with `expand=transitions.fields`
  #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
  pub fields: BTreeMap<String, TransitionField>,
}

impl JiraTransition {
  /// Whether `input` names this transition by id or (case-insensitive) name
  pub fn matches(&self, input: &str) -> bool {
    self.id == input || self.name.eq_ignore_ascii_case(input)
  }

  /// Screen fields that must be filled in to apply this transition
  pub fn required_fields(&self) -> impl Iterator<Item = &str> {
    self
      .fields
      .iter()
      .filter(|(_, field)| field.required)
      .map(|(id, field)| field.name.as_deref().unwrap_or(id.as_str()))
  }
}

/// Represents a field on a transition screen
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionField {
  #[serde(default)]
  pub required: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub has_default_value: Option<bool>,
  #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
  pub allowed_values: Vec<serde_json::Value>,
}

/// Represents a list of Jira transitions
#[derive(Debug, Deserialize)]
pub struct JiraTransitions {
  #[serde(default, deserialize_with = "null_as_default")]
  pub transitions: Vec<JiraTransition>,
}

/// Represents a transition request payload
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// Represents a transition ID for the request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

impl TransitionRequest {
  /// Build the payload for applying transition `id`
  pub fn new(id: impl Into<String>) -> Self {
    Self {
      transition: TransitionId { id: id.into() },
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_jira_transitions_deserialization() {
    let json = json!({
        "transitions": [
            {
                "id": "11",
                "name": "To Do"
            },
            {
                "id": "21",
                "name": "In Progress",
                "to": { "id": "3", "name": "In Progress" },
                "hasScreen": true,
                "fields": {
                    "resolution": { "required": true, "name": "Resolution", "allowedValues": [{ "id": "1" }] },
                    "comment": { "required": false, "name": "Comment" }
                }
            }
        ]
    });

    let transitions: JiraTransitions = serde_json::from_value(json).unwrap();

    assert_eq!(transitions.transitions.len(), 2);
    assert_eq!(transitions.transitions[0].id, "11");
    assert!(transitions.transitions[0].fields.is_empty());

    let in_progress = &transitions.transitions[1];
    assert_eq!(in_progress.to.as_ref().unwrap().name, "In Progress");
    assert_eq!(in_progress.required_fields().collect::<Vec<_>>(), vec!["Resolution"]);
  }

  #[test]
  fn test_transition_matches_id_or_name() {
    let transition = JiraTransition {
      id: "31".to_string(),
      name: "Done".to_string(),
      to: None,
      has_screen: None,
      fields: BTreeMap::new(),
    };

    assert!(transition.matches("31"));
    assert!(transition.matches("done"));
    assert!(!transition.matches("3"));
  }

  #[test]
  fn test_jira_transition_request_serialization() {
    let json = serde_json::to_value(TransitionRequest::new("21")).unwrap();

    assert_eq!(
      json,
      json!({
          "transition": {
              "id": "21"
          }
      })
    );
  }
}
