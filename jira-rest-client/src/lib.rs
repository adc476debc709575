//! # Jira REST Client
//!
//! Typed access to the Jira REST API v2: projects, issues, JQL searches,
//! comments, versions, components, issue types, statuses, the authenticated
//! user, and workflow transitions.
//!
//! Every operation is one HTTP call that either yields a deserialized record
//! or a [`RestError`].

pub mod auth;
mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod jql;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
pub use consts::{API_PATH, DEFAULT_MAX_RESULTS, USER_AGENT};
pub use error::{RestError, Result};
pub use jql::{Field, JqlBuilder, JqlSearch, JqlValue, Operator, SortOrder};
// Re-export models
pub use models::{
  BasicProject, Comment, CommentSummary, Component, IssueType, IssueTypeStatuses, JiraAuth, JiraIssue,
  JiraIssueFields, JiraIssueStatus, JiraTransition, JiraTransitions, JiraUser, JqlSearchResult, Priority, Project,
  ProjectCategory, Resolution, ServerInfo, StatusCategory, TransitionField, TransitionId, TransitionRequest, Version,
};
