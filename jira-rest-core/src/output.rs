//! # Output Formatting
//!
//! Formatted output functions with colors, emojis, and consistent styling for
//! user-facing messages and terminal output.

use owo_colors::{OwoColorize, Stream};
use {clap, emojis};

/// Enum representing different color modes for output
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
  /// Enable colored output
  Yes,
  /// Enable colored output (alias for Yes)
  Always,
  /// Automatically detect if colors should be used based on terminal
  /// capabilities
  Auto,
  /// Disable colored output
  No,
  /// Disable colored output (alias for No)
  Never,
}

impl ColorMode {
  /// Apply this mode to the global owo-colors override
  pub fn apply(self) {
    match self {
      Self::Yes | Self::Always => owo_colors::set_override(true),
      Self::No | Self::Never => owo_colors::set_override(false),
      Self::Auto => owo_colors::unset_override(),
    }
  }
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

/// Print a section header
pub fn print_header(header: &str) {
  println!("\n{}", header.blue().bold());
}

/// Color a workflow status name by its Jira status category key
pub fn format_status(name: &str, category_key: Option<&str>) -> String {
  match category_key {
    Some("done") => name.if_supports_color(Stream::Stdout, |s| s.green()).to_string(),
    Some("indeterminate") => name.if_supports_color(Stream::Stdout, |s| s.yellow()).to_string(),
    Some("new") => name.if_supports_color(Stream::Stdout, |s| s.blue()).to_string(),
    _ => name.to_string(),
  }
}

/// Truncate a string to `max_chars` characters, appending `...` when cut
pub fn truncate_string(s: &str, max_chars: usize) -> String {
  let char_count = s.chars().count();
  if char_count <= max_chars {
    s.to_string()
  } else {
    let truncated: String = s.chars().take(max_chars).collect();
    format!("{truncated}...")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_get_emoji_or_default() {
    assert!(!get_emoji_or_default("check_mark", "✓").is_empty());
    assert_eq!(get_emoji_or_default("nonexistent_emoji", "X"), "X");
  }

  #[test]
  fn test_truncate_string_is_char_safe() {
    assert_eq!(truncate_string("short", 10), "short");
    assert_eq!(truncate_string("Überprüfung", 4), "Über...");
  }

  #[test]
  fn test_format_status_without_colors() {
    owo_colors::set_override(false);
    assert_eq!(format_status("Done", Some("done")), "Done");
    assert_eq!(format_status("Custom", None), "Custom");
    owo_colors::unset_override();
  }
}
