//! # jira-rest Core Library
//!
//! Shared building blocks for the jira-rest crates: credential lookup from
//! `.netrc`, Jira host URL normalization, persisted configuration, issue key
//! validation, and consistent terminal output.

pub mod config;
pub mod creds;
pub mod keys;
pub mod output;
pub mod url;

// Re-export main types
pub use config::{ConfigDirs, JiraConfig, get_config_dirs};
pub use creds::Credentials;
pub use keys::{IssueKeyParser, KeyParseError, ParsingMode};
pub use output::{ColorMode, print_error, print_header, print_info, print_success, print_warning};
