//! Unit tests for the backend API client.

mod admin_tests;
mod games_tests;
mod user_tests;

/// Surfaces client logs in test output when RUST_LOG is set.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
