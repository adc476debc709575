//! Throwaway configuration directories for tests

use std::path::PathBuf;

use tempfile::TempDir;

/// A temporary config directory removed on drop
pub struct ConfigDirsTestGuard {
  /// The temporary directory backing the config path
  pub temp_dir: TempDir,
}

impl Default for ConfigDirsTestGuard {
  fn default() -> Self {
    Self::new()
  }
}

impl ConfigDirsTestGuard {
  /// Create a new guard with an empty `config` directory
  pub fn new() -> Self {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    std::fs::create_dir_all(temp_dir.path().join("config")).expect("Failed to create config directory");
    Self { temp_dir }
  }

  /// Get the path to the config directory
  pub fn config_dir(&self) -> PathBuf {
    self.temp_dir.path().join("config")
  }
}
