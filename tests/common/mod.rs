//! Shared helpers for the integration suite.
#![allow(dead_code)]

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the test subscriber once per process. A no-op unless the
/// `test-internals` feature is enabled.
pub fn init_test_logging() {
    INIT.call_once(|| {
        #[cfg(feature = "test-internals")]
        {
            let _ = tracing_subscriber::fmt()
                .with_test_writer()
                .with_max_level(tracing::Level::DEBUG)
                .try_init();
        }
    });
}

macro_rules! test_phase {
    ($name:expr) => {
        eprintln!("[phase] {}", $name);
    };
}

macro_rules! assert_with_log {
    ($cond:expr, $what:expr, $expected:expr, $actual:expr) => {
        assert!(
            $cond,
            "{}: expected {:?}, got {:?}",
            $what, $expected, $actual
        );
    };
}

macro_rules! test_complete {
    ($name:expr) => {
        eprintln!("[done] {}", $name);
    };
}
