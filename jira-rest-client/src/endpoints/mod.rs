//! # Jira API Endpoints
//!
//! Endpoint implementations grouped by Jira resource. Each file adds methods
//! to [`JiraClient`](crate::JiraClient); every method is a single request.

mod comments;
mod issues;
mod metadata;
mod projects;
mod search;
mod server;
mod transitions;
mod users;
