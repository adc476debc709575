//! # JQL Search
//!
//! Request body for `POST /search` ([`JqlSearch`]) and a small builder that
//! composes JQL text with correct quoting ([`JqlBuilder`]).
//!
//! ```
//! use jira_rest_client::{Field, JqlBuilder, JqlSearch, JqlValue, Operator, SortOrder};
//!
//! let jql = JqlBuilder::new()
//!   .eq(Field::Project, "EX")
//!   .clause(Field::Status, Operator::In, JqlValue::list(["Open", "In Progress"]))
//!   .clause(Field::Assignee, Operator::Equals, JqlValue::function("currentUser()"))
//!   .order_by(Field::Created, SortOrder::Desc)
//!   .build();
//!
//! assert_eq!(
//!   jql,
//!   r#"project = EX AND status in (Open, "In Progress") AND assignee = currentUser() ORDER BY created DESC"#
//! );
//!
//! let search = JqlSearch::new(jql).max_results(20).fields(["summary", "status"]);
//! assert_eq!(search.max_results, 20);
//! ```

use std::fmt;

use serde::Serialize;

use crate::consts::DEFAULT_MAX_RESULTS;

/// JQL words that must be quoted when used as values
const RESERVED_WORDS: &[&str] = &[
  "and", "or", "not", "empty", "null", "order", "by", "asc", "desc", "in", "is", "was", "changed", "from", "to",
  "on", "before", "after", "during",
];

/// Request body of an extended issue search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JqlSearch {
  pub jql: String,
  pub start_at: u32,
  pub max_results: u32,
  /// Fields to return for each issue; empty means the server default
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub fields: Vec<String>,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub expand: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub validate_query: Option<bool>,
}

impl JqlSearch {
  /// Search for `jql` starting at the first match
  pub fn new(jql: impl Into<String>) -> Self {
    Self {
      jql: jql.into(),
      start_at: 0,
      max_results: DEFAULT_MAX_RESULTS,
      fields: Vec::new(),
      expand: Vec::new(),
      validate_query: None,
    }
  }

  /// Index of the first match to return
  pub const fn start_at(mut self, start_at: u32) -> Self {
    self.start_at = start_at;
    self
  }

  /// Page size
  pub const fn max_results(mut self, max_results: u32) -> Self {
    self.max_results = max_results;
    self
  }

  /// Restrict the returned issue fields
  pub fn fields<I, S>(mut self, fields: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.fields = fields.into_iter().map(Into::into).collect();
    self
  }

  /// Request expansions such as `renderedFields` or `changelog`
  pub fn expand<I, S>(mut self, expand: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.expand = expand.into_iter().map(Into::into).collect();
    self
  }

  /// Ask the server to reject (true) or tolerate (false) invalid queries
  pub const fn validate_query(mut self, validate: bool) -> Self {
    self.validate_query = Some(validate);
    self
  }
}

/// System fields searchable with JQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
  Project,
  Key,
  Summary,
  Description,
  Text,
  Status,
  StatusCategory,
  Assignee,
  Reporter,
  IssueType,
  Priority,
  Resolution,
  Created,
  Updated,
  ResolutionDate,
  DueDate,
  FixVersion,
  AffectedVersion,
  Component,
  Labels,
  /// Any other field, by name or `cf[12345]` id
  Custom(String),
}

impl Field {
  fn as_jql(&self) -> String {
    let name = match self {
      Self::Project => "project",
      Self::Key => "key",
      Self::Summary => "summary",
      Self::Description => "description",
      Self::Text => "text",
      Self::Status => "status",
      Self::StatusCategory => "statusCategory",
      Self::Assignee => "assignee",
      Self::Reporter => "reporter",
      Self::IssueType => "issuetype",
      Self::Priority => "priority",
      Self::Resolution => "resolution",
      Self::Created => "created",
      Self::Updated => "updated",
      Self::ResolutionDate => "resolutiondate",
      Self::DueDate => "duedate",
      Self::FixVersion => "fixVersion",
      Self::AffectedVersion => "affectedVersion",
      Self::Component => "component",
      Self::Labels => "labels",
      Self::Custom(name) if name.starts_with("cf[") => return name.clone(),
      Self::Custom(name) => return quote_if_needed(name),
    };
    name.to_string()
  }
}

/// JQL comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
  Equals,
  NotEquals,
  GreaterThan,
  GreaterThanEquals,
  LessThan,
  LessThanEquals,
  Contains,
  DoesNotContain,
  In,
  NotIn,
  Is,
  IsNot,
  Was,
  WasNot,
  Changed,
}

impl Operator {
  const fn as_jql(self) -> &'static str {
    match self {
      Self::Equals => "=",
      Self::NotEquals => "!=",
      Self::GreaterThan => ">",
      Self::GreaterThanEquals => ">=",
      Self::LessThan => "<",
      Self::LessThanEquals => "<=",
      Self::Contains => "~",
      Self::DoesNotContain => "!~",
      Self::In => "in",
      Self::NotIn => "not in",
      Self::Is => "is",
      Self::IsNot => "is not",
      Self::Was => "was",
      Self::WasNot => "was not",
      Self::Changed => "changed",
    }
  }
}

/// Sort direction for `ORDER BY`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
  Asc,
  Desc,
}

/// A value on the right-hand side of a clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JqlValue {
  Text(String),
  Number(i64),
  /// A JQL function call such as `currentUser()`, emitted verbatim
  Function(String),
  Empty,
  List(Vec<JqlValue>),
}

impl JqlValue {
  /// A parenthesized list for `in` / `not in`
  pub fn list<I, V>(values: I) -> Self
  where
    I: IntoIterator<Item = V>,
    V: Into<JqlValue>,
  {
    Self::List(values.into_iter().map(Into::into).collect())
  }

  /// A function call such as `currentUser()` or `startOfDay(-1)`
  pub fn function(call: impl Into<String>) -> Self {
    Self::Function(call.into())
  }
}

impl From<&str> for JqlValue {
  fn from(value: &str) -> Self {
    Self::Text(value.to_string())
  }
}

impl From<String> for JqlValue {
  fn from(value: String) -> Self {
    Self::Text(value)
  }
}

impl From<i64> for JqlValue {
  fn from(value: i64) -> Self {
    Self::Number(value)
  }
}

impl From<u32> for JqlValue {
  fn from(value: u32) -> Self {
    Self::Number(i64::from(value))
  }
}

impl fmt::Display for JqlValue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Text(text) => f.write_str(&quote_if_needed(text)),
      Self::Number(number) => write!(f, "{number}"),
      Self::Function(call) => f.write_str(call),
      Self::Empty => f.write_str("EMPTY"),
      Self::List(values) => {
        let rendered: Vec<String> = values.iter().map(ToString::to_string).collect();
        write!(f, "({})", rendered.join(", "))
      }
    }
  }
}

/// Quote a JQL literal unless it is a plain word that cannot be misread.
fn quote_if_needed(value: &str) -> String {
  let plain = !value.is_empty()
    && value
      .chars()
      .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    && !RESERVED_WORDS.contains(&value.to_ascii_lowercase().as_str());

  if plain {
    value.to_string()
  } else {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
  }
}

/// Composes JQL query text
///
/// Clauses group left to right: when the connective changes, everything built
/// so far is parenthesized, so `.eq(a).or(b).clause(c)` renders
/// `(a OR b) AND c` rather than relying on JQL's `AND`-before-`OR` precedence.
#[derive(Debug, Clone, Default)]
pub struct JqlBuilder {
  query: String,
  connective: Option<&'static str>,
  order_by: Vec<(Field, SortOrder)>,
}

impl JqlBuilder {
  /// Start an empty query
  pub fn new() -> Self {
    Self::default()
  }

  fn push(mut self, connective: &'static str, expression: String) -> Self {
    if !self.query.is_empty() {
      if self.connective.is_some_and(|previous| previous != connective) {
        self.query = format!("({})", self.query);
      }
      self.connective = Some(connective);
      self.query.push(' ');
      self.query.push_str(connective);
      self.query.push(' ');
    }
    self.query.push_str(&expression);
    self
  }

  fn expression(field: &Field, operator: Operator, value: &JqlValue) -> String {
    match operator {
      Operator::Changed => format!("{} changed", field.as_jql()),
      _ => format!("{} {} {}", field.as_jql(), operator.as_jql(), value),
    }
  }

  /// Append `field operator value`, joined with `AND`
  pub fn clause(self, field: Field, operator: Operator, value: impl Into<JqlValue>) -> Self {
    let expression = Self::expression(&field, operator, &value.into());
    self.push("AND", expression)
  }

  /// Append `field operator value`, joined with `OR`
  ///
  /// A preceding `AND` chain is parenthesized first.
  pub fn or(self, field: Field, operator: Operator, value: impl Into<JqlValue>) -> Self {
    let expression = Self::expression(&field, operator, &value.into());
    self.push("OR", expression)
  }

  /// Append `NOT field operator value`, joined with `AND`
  pub fn not(self, field: Field, operator: Operator, value: impl Into<JqlValue>) -> Self {
    let expression = format!("NOT {}", Self::expression(&field, operator, &value.into()));
    self.push("AND", expression)
  }

  /// Shorthand for `clause(field, Operator::Equals, value)`
  pub fn eq(self, field: Field, value: impl Into<JqlValue>) -> Self {
    self.clause(field, Operator::Equals, value)
  }

  /// Shorthand for `field is EMPTY`
  pub fn is_empty(self, field: Field) -> Self {
    self.clause(field, Operator::Is, JqlValue::Empty)
  }

  /// Append a parenthesized sub-query, joined with `AND`
  pub fn group(self, inner: JqlBuilder) -> Self {
    self.push_group("AND", inner)
  }

  /// Append a parenthesized sub-query, joined with `OR`
  pub fn or_group(self, inner: JqlBuilder) -> Self {
    self.push_group("OR", inner)
  }

  fn push_group(self, connective: &'static str, inner: JqlBuilder) -> Self {
    if inner.query.is_empty() {
      return self;
    }
    let expression = format!("({})", inner.query);
    self.push(connective, expression)
  }

  /// Add a sort key; keys apply in the order they are added
  pub fn order_by(mut self, field: Field, order: SortOrder) -> Self {
    self.order_by.push((field, order));
    self
  }

  /// Render the query text
  pub fn build(&self) -> String {
    let mut jql = self.query.clone();

    if !self.order_by.is_empty() {
      let keys: Vec<String> = self
        .order_by
        .iter()
        .map(|(field, order)| {
          let direction = match order {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
          };
          format!("{} {direction}", field.as_jql())
        })
        .collect();

      if !jql.is_empty() {
        jql.push(' ');
      }
      jql.push_str("ORDER BY ");
      jql.push_str(&keys.join(", "));
    }

    jql
  }
}

impl fmt::Display for JqlBuilder {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.build())
  }
}
