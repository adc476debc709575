//! Jira host URL helpers.
//!
//! Users configure hosts in many shapes (`company.atlassian.net`,
//! `https://jira.example.com/`, `http:/localhost:8080`). Everything is reduced
//! to one canonical base URL before a client is built.

use anyhow::Result;
use url::{Position, Url};

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";

/// Render a URL without the lone trailing `/` that `Url` adds to bare hosts.
fn normalize_url(url: &Url) -> String {
  let mut result = String::new();
  result.push_str(&url[..Position::BeforePath]);

  let path = url.path().trim_end_matches('/');
  result.push_str(path);

  if let Some(query) = url.query() {
    result.push('?');
    result.push_str(query);
  }

  if let Some(fragment) = url.fragment() {
    result.push('#');
    result.push_str(fragment);
  }

  result
}

/// Parse `input` as a URL after forcing an `https://` prefix.
fn parse_with_https_prefix(input: &str) -> Result<Url> {
  let with_scheme = format!("https://{}", input.trim_start_matches('/'));
  Url::parse(&with_scheme).map_err(|e| anyhow::anyhow!("Failed to parse URL '{input}': {e}"))
}

/// Ensure a URL has a proper scheme (http:// or https://).
///
/// If the input doesn't include a scheme, assumes https://. Malformed schemes
/// like `http:/example.com` (missing slash) are repaired to https. Trailing
/// slashes on the path are removed so the result can be joined with
/// `/rest/api/2/...`.
pub fn ensure_url_scheme(input: &str) -> Result<String> {
  let trimmed = input.trim();
  if trimmed.is_empty() {
    return Err(anyhow::anyhow!("Host cannot be empty"));
  }

  let lowered = trimmed.to_ascii_lowercase();
  for scheme in ["http:", "https:"] {
    if lowered.starts_with(scheme) && !lowered.starts_with(&format!("{scheme}//")) {
      let remainder = &trimmed[scheme.len()..];
      return parse_with_https_prefix(remainder).map(|url| normalize_url(&url));
    }
  }

  let url = match Url::parse(trimmed) {
    Ok(url) if url.host().is_some() => url,
    _ => parse_with_https_prefix(trimmed)?,
  };

  Ok(normalize_url(&url))
}
