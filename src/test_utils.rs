//! Test logging harness shared by unit and integration tests.
//!
//! Each test calls [`init_test_logging`] once, then brackets its body with
//! [`test_phase!`](crate::test_phase) and [`test_complete!`](crate::test_complete).
//! [`assert_with_log!`](crate::assert_with_log) logs the expected and actual
//! values before asserting so failures are readable from the trace alone.
//!
//! Filtering follows `RUST_LOG`; the default is `hashmix=debug`.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_TEST_FILTER: &str = "hashmix=debug";

/// Installs a test-writer subscriber exactly once per test binary.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_TEST_FILTER));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Marks the start of a named test.
#[macro_export]
macro_rules! test_phase {
    ($name:expr) => {
        ::tracing::info!(test = %$name, "test phase start");
    };
}

/// Marks the successful end of a named test.
#[macro_export]
macro_rules! test_complete {
    ($name:expr) => {
        ::tracing::info!(test = %$name, "test complete");
    };
}

/// Asserts `cond`, logging expected and actual values first.
#[macro_export]
macro_rules! assert_with_log {
    ($cond:expr, $msg:expr, $expected:expr, $actual:expr) => {{
        let cond = $cond;
        ::tracing::debug!(
            expected = ?$expected,
            actual = ?$actual,
            ok = cond,
            "{}",
            $msg
        );
        assert!(
            cond,
            "{}: expected {:?}, got {:?}",
            $msg,
            $expected,
            $actual
        );
    }};
}
