//! Helpers for reading and writing credentials stored in `.netrc` files.
//!
//! Parsing works on the whitespace separated token stream, so single-line
//! (`machine host login user password pass`) and multi-line entries can be
//! mixed freely in one file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::creds::Credentials;

/// Returns the path to the `.netrc` file for the provided home directory.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use jira_rest_core::creds::netrc::get_netrc_path;
///
/// let path = get_netrc_path(Path::new("/home/user"));
/// assert_eq!(path, Path::new("/home/user/.netrc"));
/// ```
pub fn get_netrc_path(home: &Path) -> PathBuf {
  home.join(".netrc")
}

/// A whitespace separated `.netrc` word and its byte offset in the file
#[derive(Debug, Clone, Copy)]
struct Token<'a> {
  offset: usize,
  text: &'a str,
}

static WORD_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\S+").expect("Failed to compile .netrc word regex"));

/// Split `.netrc` content into words, dropping `macdef` bodies.
///
/// The `macdef` keyword itself is kept as a token. The rest of its line and
/// the following lines up to the next blank line are skipped.
fn tokenize(content: &str) -> Vec<Token<'_>> {
  let mut tokens = Vec::new();
  let mut line_start = 0;
  let mut in_macro = false;

  for line in content.split_inclusive('\n') {
    let offset = line_start;
    line_start += line.len();

    if in_macro {
      in_macro = !line.trim().is_empty();
      continue;
    }

    for word in WORD_REGEX.find_iter(line) {
      tokens.push(Token {
        offset: offset + word.start(),
        text: word.as_str(),
      });
      if word.as_str() == "macdef" {
        in_macro = true;
        break;
      }
    }
  }

  tokens
}

/// One `machine` block while scanning the token stream
#[derive(Default)]
struct Entry {
  machine: Option<String>,
  login: Option<String>,
  password: Option<String>,
}

impl Entry {
  fn into_credentials(self, target_machine: &str) -> Option<Credentials> {
    match (self.machine, self.login, self.password) {
      (Some(machine), Some(username), Some(password)) if machine == target_machine => {
        Some(Credentials { username, password })
      }
      _ => None,
    }
  }
}

/// Looks up credentials for `target_machine` in `.netrc` content.
///
/// Entries missing either `login` or `password` are skipped. `account` values
/// and `macdef` bodies are ignored.
pub fn parse_netrc(content: &str, target_machine: &str) -> Option<Credentials> {
  let mut current = Entry::default();
  let mut words = tokenize(content).into_iter().map(|token| token.text);

  while let Some(word) = words.next() {
    match word {
      "machine" | "default" => {
        let finished = std::mem::take(&mut current);
        if let Some(creds) = finished.into_credentials(target_machine) {
          return Some(creds);
        }
        if word == "machine" {
          current.machine = words.next().map(str::to_string);
        }
      }
      "login" => current.login = words.next().map(str::to_string),
      "password" => current.password = words.next().map(str::to_string),
      "account" => {
        words.next();
      }
      _ => {}
    }
  }

  current.into_credentials(target_machine)
}

/// Byte range of the first `machine <machine>` entry, ending before the next
/// `machine`, `default` or `macdef` keyword and excluding trailing whitespace.
fn find_entry(content: &str, machine: &str) -> Option<(usize, usize)> {
  let tokens = tokenize(content);
  let position = tokens
    .windows(2)
    .position(|pair| pair[0].text == "machine" && pair[1].text == machine)?;

  let start = tokens[position].offset;
  let next = tokens[position + 2..]
    .iter()
    .find(|token| matches!(token.text, "machine" | "default" | "macdef"))
    .map_or(content.len(), |token| token.offset);

  Some((start, start + content[start..next].trim_end().len()))
}

/// Parses a `.netrc` file and returns credentials for the requested machine.
///
/// Returns `Ok(None)` when the file does not exist, the machine is not
/// present, or its entry lacks a `login` or `password`.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn parse_netrc_file(path: &Path, target_machine: &str) -> Result<Option<Credentials>> {
  if !path.exists() {
    debug!("No .netrc file at {}", path.display());
    return Ok(None);
  }

  let content = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
  Ok(parse_netrc(&content, target_machine))
}

/// Writes or updates a `.netrc` entry for the given machine.
///
/// An existing entry for the machine, single-line or multi-line, is replaced
/// in place; otherwise a new entry is appended. On Unix the file mode is set
/// to `600`.
pub fn write_netrc_entry(path: &Path, machine: &str, username: &str, password: &str) -> Result<()> {
  let existing_content = if path.exists() {
    fs::read_to_string(path).context("Failed to read existing .netrc file")?
  } else {
    String::new()
  };

  let entry = format!("machine {machine}\n  login {username}\n  password {password}");

  let mut new_content = match find_entry(&existing_content, machine) {
    Some((start, end)) => {
      debug!(machine, "Replacing existing .netrc entry");
      format!("{}{entry}{}", &existing_content[..start], &existing_content[end..])
    }
    None => {
      let mut appended = existing_content;
      if !appended.is_empty() && !appended.ends_with('\n') {
        appended.push('\n');
      }
      appended.push_str(&entry);
      appended
    }
  };
  if !new_content.ends_with('\n') {
    new_content.push('\n');
  }

  let mut file = fs::File::create(path).context("Failed to open .netrc file for writing")?;
  file
    .write_all(new_content.as_bytes())
    .context("Failed to write .netrc file")?;

  #[cfg(unix)]
  {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600)).context("Failed to set .netrc permissions")?;
  }

  Ok(())
}

/// Normalizes a Jira host URL by removing protocol prefixes and trailing
/// slashes, producing the value used as a `.netrc` machine name.
///
/// ```
/// use jira_rest_core::creds::netrc::normalize_host;
///
/// assert_eq!(normalize_host("https://company.atlassian.net/"), "company.atlassian.net");
/// assert_eq!(normalize_host("http://jira.example.com"), "jira.example.com");
/// assert_eq!(normalize_host("my-jira-instance.com"), "my-jira-instance.com");
/// ```
pub fn normalize_host(raw_host: &str) -> String {
  raw_host
    .trim()
    .trim_start_matches("https://")
    .trim_start_matches("http://")
    .trim_end_matches('/')
    .to_string()
}
