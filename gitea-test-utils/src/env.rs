//! Environment variable management for testing
//!
//! This module overrides the Gitea connection variables for the duration of a
//! test and restores the previous values on drop. Tests touching the process
//! environment are serialized through a shared lock so they cannot observe
//! each other's overrides.

use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// A guard that overrides environment variables for one test and restores the
/// previous values on drop
pub struct GiteaEnvGuard {
  /// The overridden variables with their original values, if any
  saved: Vec<(&'static str, Option<String>)>,
  _lock: MutexGuard<'static, ()>,
}

impl GiteaEnvGuard {
  /// Gitea connection variable names
  pub const URL: &'static str = "GITEA_URL";
  pub const TOKEN: &'static str = "GITEA_TOKEN";
  pub const AUTH: &'static str = "GITEA_AUTH";

  /// Apply the given overrides; `None` unsets the variable
  pub fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
    let lock = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);

    let mut saved = Vec::with_capacity(vars.len());
    for (name, value) in vars {
      saved.push((*name, env::var(name).ok()));
      // SAFETY: the environment is only mutated while ENV_LOCK is held, so no
      // other test thread reads or writes it concurrently
      unsafe {
        match value {
          Some(val) => env::set_var(name, val),
          None => env::remove_var(name),
        }
      }
    }

    Self { saved, _lock: lock }
  }
}

impl Drop for GiteaEnvGuard {
  fn drop(&mut self) {
    for (name, original) in &self.saved {
      // SAFETY: the lock acquired in `set` is still held until after this
      // restore loop finishes
      unsafe {
        match original {
          Some(val) => env::set_var(name, val),
          None => env::remove_var(name),
        }
      }
    }
  }
}
