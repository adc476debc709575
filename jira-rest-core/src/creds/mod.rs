//! # Credential Management
//!
//! Retrieval and storage of the username/API token pair used to authenticate
//! against a Jira server. Credentials live in the user's `.netrc` file so they
//! are shared with curl, git and other tools.

pub mod netrc;

/// Represents credentials for a service
#[derive(Debug, Clone)]
pub struct Credentials {
  pub username: String,
  pub password: String,
}
