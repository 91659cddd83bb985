//! Optional tracing integration.
//!
//! When the `tracing-integration` feature is enabled, these macros forward
//! to the corresponding [`tracing`] event macros. When disabled, they expand
//! to nothing, so instrumented call sites carry zero overhead.

/// Emit a debug-level event when tracing integration is enabled.
#[cfg(feature = "tracing-integration")]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => { ::tracing::debug!($($arg)*) };
}

/// No-op without the `tracing-integration` feature.
#[cfg(not(feature = "tracing-integration"))]
#[macro_export]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

/// Emit a warn-level event when tracing integration is enabled.
#[cfg(feature = "tracing-integration")]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => { ::tracing::warn!($($arg)*) };
}

/// No-op without the `tracing-integration` feature.
#[cfg(not(feature = "tracing-integration"))]
#[macro_export]
macro_rules! trace_warn {
    ($($arg:tt)*) => {};
}

/// Emit an error-level event when tracing integration is enabled.
#[cfg(feature = "tracing-integration")]
#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => { ::tracing::error!($($arg)*) };
}

/// No-op without the `tracing-integration` feature.
#[cfg(not(feature = "tracing-integration"))]
#[macro_export]
macro_rules! trace_error {
    ($($arg:tt)*) => {};
}
