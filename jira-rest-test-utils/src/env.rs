//! Environment variable management for testing
//!
//! Tests that touch process-wide environment variables should keep them inside
//! a single test function; the test harness runs tests on parallel threads.

use std::env;

/// Overrides one environment variable and restores the original value when
/// dropped
pub struct EnvVarGuard {
  name: String,
  original: Option<String>,
}

impl EnvVarGuard {
  /// Start guarding `name`, remembering its current value
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      original: env::var(name).ok(),
    }
  }

  /// Set the guarded variable
  pub fn set(&self, value: &str) {
    // SAFETY: test-only helper; callers keep env mutation within one test.
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable
  pub fn remove(&self) {
    // SAFETY: test-only helper; callers keep env mutation within one test.
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      // SAFETY: restores the value captured in `new`.
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      // SAFETY: restores the absence captured in `new`.
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_env_var_guard_restores_value() {
    let name = "JIRA_REST_TEST_UTILS_GUARD";
    {
      let guard = EnvVarGuard::new(name);
      guard.set("temporary");
      assert_eq!(env::var(name).unwrap(), "temporary");
    }
    assert!(env::var(name).is_err());
  }
}
