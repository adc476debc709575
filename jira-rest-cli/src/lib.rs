//! # jira-rest CLI Library
//!
//! Command definitions, client wiring and terminal rendering for the
//! `jira-rest` binary.

pub mod cli;
pub mod clients;
