use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// RAII guard for test .netrc files
///
/// Creates a temporary home directory holding a `.netrc` with the given
/// content. The directory is removed when the guard is dropped. The process
/// `HOME` is left alone; callers pass [`NetrcGuard::home_dir`] explicitly.
pub struct NetrcGuard {
  temp_dir: TempDir,
  netrc_path: PathBuf,
}

impl NetrcGuard {
  /// Create a new NetrcGuard with the given content
  pub fn new(content: &str) -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");

    let mut file = fs::File::create(&netrc_path).expect("Failed to create test .netrc");
    file.write_all(content.as_bytes()).expect("Failed to write test .netrc");

    Self { temp_dir, netrc_path }
  }

  /// Create a guard whose home directory has no `.netrc` at all
  pub fn empty_home() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let netrc_path = temp_dir.path().join(".netrc");
    Self { temp_dir, netrc_path }
  }

  /// Get the path to the .netrc file
  pub fn netrc_path(&self) -> &Path {
    &self.netrc_path
  }

  /// Get the path to the temporary home directory
  pub fn home_dir(&self) -> &Path {
    self.temp_dir.path()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_netrc_guard_writes_content() {
    let guard = NetrcGuard::new("machine example.com login a password b\n");
    let content = fs::read_to_string(guard.netrc_path()).unwrap();
    assert!(content.contains("machine example.com"));
    assert_eq!(guard.netrc_path(), guard.home_dir().join(".netrc"));
  }

  #[test]
  fn test_empty_home_has_no_netrc() {
    let guard = NetrcGuard::empty_home();
    assert!(!guard.netrc_path().exists());
  }
}
