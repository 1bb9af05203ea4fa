//! Tracing output for tests
//!
//! Installs a process-wide subscriber honoring `RUST_LOG`, so wire-level
//! debug output can be turned on for a failing test run. The subscriber can
//! only be installed once per process; every test may call [`init_tracing`]
//! and later calls are no-ops.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the test tracing subscriber; safe to call from every test
pub fn init_tracing() {
  INIT.call_once(|| {
    tracing_subscriber::fmt()
      .with_env_filter(EnvFilter::from_default_env())
      .with_test_writer()
      .init();
  });
}
