//! Sysplane: platform-abstraction and resource-introspection layer.
//!
//! # Overview
//!
//! Sysplane is the single seam between an application and the operating
//! system's platform-specific APIs. Everything above it (sequence search,
//! clustering, alignment, whatever the application does) calls into this
//! layer for memory, timing, randomness, and file access, and never touches
//! a platform API or a platform unit directly.
//!
//! # Core Guarantees
//!
//! - **Uniform observable behavior**: every operation with divergent
//!   platform system calls presents the same units (bytes, seconds), the
//!   same failure semantics, and the same alignment guarantees on every
//!   target
//! - **Fail-fast allocation**: allocation failure terminates the process
//!   with a diagnostic, so numerical call sites never null-check; the
//!   `try_` forms exist for the callers that genuinely can recover
//! - **Recoverable I/O**: file operations and symbol lookups propagate
//!   failure through `io::Result` and `Option`; a missing file is the
//!   caller's to handle, never process-ending
//! - **Reproducible randomness**: the stream seeded at construction is the
//!   stream draws are served from; a fixed seed reproduces the draw
//!   sequence run to run
//!
//! # Module Structure
//!
//! - [`alloc`]: aligned heap allocation with the fail-fast policy
//! - [`resource`]: peak/total memory, core count, and CPU-time queries
//! - [`random`]: seed resolution and the pseudo-random draw stream
//! - [`file`]: open/seek/tell/stat wrappers with 64-bit offsets
//! - [`symbol`]: dynamic symbol lookup on loader-provided module handles
//! - [`config`]: inbound configuration from the surrounding application
//! - [`error`](mod@error): error types and the fatal-and-terminate policy
//! - [`util`]: portable helpers with no platform branch
//! - [`tracing_compat`]: optional tracing integration (requires the
//!   `tracing-integration` feature)
//!
//! # Concurrency
//!
//! The layer imposes no threading model. Allocation relies on the
//! platform's thread-safe allocator; resource queries only read; the random
//! stream is `&mut`-driven and needs caller-side locking (or one stream per
//! thread) when shared. All operations are synchronous and run to
//! completion or fail outright; no cancellation, no timeouts.

// Default to deny for unsafe code - the platform modules (alloc, resource,
// symbol) opt back in with #[allow(unsafe_code)] where FFI and raw-layout
// system calls are unavoidable.
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// ── Portable modules (no platform assumptions) ──────────────────────────
pub mod config;
pub mod error;
pub mod random;
pub mod tracing_compat;
pub mod util;

// ── Platform-seam modules ───────────────────────────────────────────────
pub mod alloc;
pub mod file;
pub mod resource;
pub mod symbol;

// Re-exports for convenient access to the core surface
pub use alloc::{Block, MEM_ALIGNMENT, allocate, release, try_allocate};
pub use config::{ENV_RANDOM_SEED, PlatformConfig};
pub use error::{Error, Result};
pub use file::{FileStat, fstat, open_read, open_write, position, seek, stat};
pub use random::{Rng, resolve_seed};
pub use resource::{
    CpuTimes, ResourceSnapshot, core_count, cpu_times, peak_memory, total_memory,
    try_total_memory,
};
pub use symbol::{RawModuleHandle, SymbolAddr, resolve};
