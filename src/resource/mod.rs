//! Process and host resource introspection.
//!
//! Four independent read-only queries, each a fresh read of current OS
//! state: nothing is cached, repeated calls simply reflect the OS again.
//! One implementation module per platform family is selected at build time;
//! the public contract (byte-denominated memory, seconds-denominated CPU
//! time) is identical everywhere, so no platform unit leaks to callers.
//!
//! Queries only read and are safe to call concurrently. A snapshot is racy
//! with respect to true OS state by nature; that is the contract.

#[cfg(unix)]
mod unix;
#[cfg(unix)]
use unix as sys;

#[cfg(windows)]
mod windows;
#[cfg(windows)]
use windows as sys;

use crate::error::Result;

/// Accumulated CPU time consumed by the process, in seconds with
/// sub-second resolution. Both fields are `0.0` before any CPU time has
/// been consumed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CpuTimes {
    /// Time spent executing in user mode.
    pub user: f64,
    /// Time spent executing in the kernel on behalf of the process.
    pub system: f64,
}

impl CpuTimes {
    /// Total CPU time across both modes.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.user + self.system
    }
}

/// An immutable point-in-time read of every resource fact at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceSnapshot {
    /// Peak resident memory used by this process, in bytes.
    pub peak_memory: u64,
    /// Total physical memory installed on the host, in bytes.
    pub total_memory: u64,
    /// Online logical cores.
    pub cores: usize,
    /// Accumulated CPU time.
    pub cpu: CpuTimes,
}

impl ResourceSnapshot {
    /// Capture a fresh snapshot. Fatal if total memory is undeterminable,
    /// like [`total_memory`].
    #[must_use]
    pub fn capture() -> Self {
        Self {
            peak_memory: peak_memory(),
            total_memory: total_memory(),
            cores: core_count(),
            cpu: cpu_times(),
        }
    }
}

/// Peak resident memory used by this process so far, in bytes.
///
/// Platform-reported units (kilobytes on Linux, bytes on macOS and
/// Windows) are normalized to bytes here.
#[must_use]
pub fn peak_memory() -> u64 {
    sys::peak_memory()
}

/// Total physical memory installed on the host, in bytes.
///
/// The caller cannot plan capacity without this fact, so an undeterminable
/// total is a **fatal error**. Use [`try_total_memory`] to inspect the
/// failure instead.
#[must_use]
pub fn total_memory() -> u64 {
    match try_total_memory() {
        Ok(bytes) => bytes,
        Err(err) => err.fatal(),
    }
}

/// Fallible form of [`total_memory`].
pub fn try_total_memory() -> Result<u64> {
    sys::total_memory()
}

/// Number of online logical cores. Always at least 1.
#[must_use]
pub fn core_count() -> usize {
    sys::core_count().max(1)
}

/// Accumulated user and system CPU time consumed by the process so far.
#[must_use]
pub fn cpu_times() -> CpuTimes {
    sys::cpu_times()
}
