//! # Issue Key Parsing
//!
//! Validation and normalization of Jira issue keys (`PROJ-123`) and project
//! keys (`PROJ`) typed by users before they are placed into request paths.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Parsing mode for issue keys
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParsingMode {
  /// Strict mode: Only accepts PROJ-1234
  Strict,
  /// Flexible mode: Accepts PROJ-1234, proj-1234, PROJ1234, proj1234
  #[default]
  Flexible,
}

/// Errors that can occur while parsing keys
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyParseError {
  #[error("Invalid issue key format: '{0}' does not match any supported pattern")]
  InvalidIssueKey(String),
  #[error("Invalid project key: '{0}' must start with a letter and contain only letters, digits or '_'")]
  InvalidProjectKey(String),
}

static STRICT_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9_]+-\d+$").expect("Failed to compile strict issue key regex"));

static FLEXIBLE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
  vec![
    // PROJ-1234, proj-1234, Proj_2-1234
    Regex::new(r"^([A-Za-z][A-Za-z0-9_]+)-(\d+)$").expect("Failed to compile hyphenated issue key regex"),
    // PROJ1234, proj1234 (letters only before the number)
    Regex::new(r"^([A-Za-z]{2,})(\d+)$").expect("Failed to compile compact issue key regex"),
  ]
});

static PROJECT_KEY_PATTERN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]+$").expect("Failed to compile project key regex"));

/// Issue key parser with configurable strictness
#[derive(Debug, Clone, Copy, Default)]
pub struct IssueKeyParser {
  mode: ParsingMode,
}

impl IssueKeyParser {
  /// Create a new parser with the given mode
  pub const fn new(mode: ParsingMode) -> Self {
    Self { mode }
  }

  /// Parse an issue key, returning the canonical `PROJECT-NUMBER` form
  pub fn parse_issue_key(&self, input: &str) -> Result<String, KeyParseError> {
    let input = input.trim();

    match self.mode {
      ParsingMode::Strict if STRICT_PATTERN.is_match(input) => Ok(input.to_string()),
      ParsingMode::Strict => Err(KeyParseError::InvalidIssueKey(input.to_string())),
      ParsingMode::Flexible => FLEXIBLE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.captures(input))
        .map(|captures| format!("{}-{}", captures[1].to_uppercase(), &captures[2]))
        .ok_or_else(|| KeyParseError::InvalidIssueKey(input.to_string())),
    }
  }

  /// Parse a project key, upper-casing it in flexible mode
  pub fn parse_project_key(&self, input: &str) -> Result<String, KeyParseError> {
    let input = input.trim();
    if !PROJECT_KEY_PATTERN.is_match(input) {
      return Err(KeyParseError::InvalidProjectKey(input.to_string()));
    }

    match self.mode {
      ParsingMode::Strict if input.chars().any(|c| c.is_ascii_lowercase()) => {
        Err(KeyParseError::InvalidProjectKey(input.to_string()))
      }
      ParsingMode::Strict => Ok(input.to_string()),
      ParsingMode::Flexible => Ok(input.to_uppercase()),
    }
  }

  /// Check if input is a valid issue key
  pub fn is_valid_issue_key(&self, input: &str) -> bool {
    self.parse_issue_key(input).is_ok()
  }
}
