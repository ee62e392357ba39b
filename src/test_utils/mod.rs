//! Test utilities for compsync
//!
//! This module provides in-memory collaborators and fixtures for unit and
//! integration tests. It is compiled for the crate's own tests and, through
//! the `test-utils` feature, for the `tests/` integration suite.
//!
//! - [`FakeTransport`]: a registry served from memory that counts requests
//! - [`MemoryProject`]: a project file tree held in memory
//! - [`FakeRunner`]: a command runner that records invocations
//! - [`TestEnvironment`]: a temporary on-disk project wired to the fakes
//!
//! # Example
//!
//! ```rust,no_run
//! use compsync::config::Framework;
//! use compsync::test_utils::{ConfigFixture, TestEnvironment, fixtures};
//!
//! let env = TestEnvironment::with_project(
//!     Framework::React,
//!     &ConfigFixture::react(),
//!     Some(("tsconfig.json", &fixtures::react_tsconfig())),
//! )
//! .unwrap();
//! assert!(env.source().unwrap().list_installed_components().unwrap().is_empty());
//! ```

pub mod environment;
pub mod fakes;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fakes::{FakeRunner, FakeTransport, MemoryProject};
pub use fixtures::ConfigFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Initializes the tracing subscriber once, no matter how often it is called.
/// Uses `level` when given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=compsync=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}
