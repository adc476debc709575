//! Constants for the jira-rest client.

/// User-Agent header value for the Jira API client
pub const USER_AGENT: &str = concat!("jira-rest/", env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Path segments of the REST API v2 root below the server base URL
pub const API_PATH: [&str; 3] = ["rest", "api", "2"];

/// Page size used by [`crate::JiraClient::get_issues_for_project`] unless
/// overridden with [`crate::JiraClient::with_max_results`]
pub const DEFAULT_MAX_RESULTS: u32 = jira_rest_core::config::DEFAULT_MAX_RESULTS;
