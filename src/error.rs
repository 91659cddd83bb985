//! Error types for the platform layer.
//!
//! Two error policies coexist, deliberately different by operation class:
//!
//! - **Fatal-and-terminate**: allocation failure, release of a null pointer,
//!   and undeterminable total system memory. The surrounding system is not
//!   designed to recover from these; [`Error::fatal`] prints a diagnostic
//!   and exits the process. Each fatal entry point is a thin wrapper over an
//!   inspectable `try_` form, so callers that *can* recover have a result to
//!   look at.
//! - **Recoverable**: file operations and symbol lookup misses propagate
//!   through [`std::io::Result`] and [`Option`] instead of this type; those
//!   failures are ordinary outcomes, never process-ending.

use thiserror::Error;

/// Unified error type for the fallible platform-layer operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The platform allocator could not satisfy an allocation request.
    #[error("unable to allocate enough memory ({size} bytes requested)")]
    AllocFailed {
        /// Size of the failed request, after zero-size coercion.
        size: usize,
    },

    /// The platform allocator could not satisfy a reallocation request.
    /// The original block is still valid when this is returned.
    #[error("unable to reallocate enough memory ({size} bytes requested)")]
    ReallocFailed {
        /// Size of the failed request, after zero-size coercion.
        size: usize,
    },

    /// A null pointer was passed to the raw release seam.
    #[error("trying to free a null pointer")]
    ReleaseNull,

    /// The total amount of physical memory could not be determined.
    #[error("cannot determine amount of RAM")]
    TotalMemoryUnavailable,

    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {message}")]
    Config {
        /// Name of the offending configuration key or environment variable.
        key: &'static str,
        /// Parse failure detail.
        message: String,
    },
}

/// Convenience alias used throughout the platform layer.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Print a diagnostic and terminate the process.
    ///
    /// This is the documented policy for allocation failure and
    /// undeterminable total memory: the diagnostic always reaches stderr,
    /// and is additionally emitted as a `tracing` error event when the
    /// `tracing-integration` feature is enabled.
    #[cold]
    pub fn fatal(self) -> ! {
        crate::trace_error!(error = %self, "fatal platform-layer failure");
        eprintln!("fatal: {self}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts() {
        let cases: Vec<(Error, &str)> = vec![
            (
                Error::AllocFailed { size: 64 },
                "unable to allocate enough memory (64 bytes requested)",
            ),
            (
                Error::ReallocFailed { size: 128 },
                "unable to reallocate enough memory (128 bytes requested)",
            ),
            (Error::ReleaseNull, "trying to free a null pointer"),
            (
                Error::TotalMemoryUnavailable,
                "cannot determine amount of RAM",
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn config_error_carries_key() {
        let err = Error::Config {
            key: "SYSPLANE_RANDOM_SEED",
            message: "invalid digit found in string".into(),
        };
        assert!(err.to_string().contains("SYSPLANE_RANDOM_SEED"));
    }
}
