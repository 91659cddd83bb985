//! POSIX implementation of the resource queries.
//!
//! Memory facts come from `getrusage(2)` and `sysconf(3)`; Apple targets
//! report `ru_maxrss` in bytes and take total memory from
//! `sysctl(CTL_HW, HW_MEMSIZE)` instead.
#![allow(unsafe_code)]

use std::mem;

use super::CpuTimes;
use crate::error::{Error, Result};

fn rusage_self() -> Option<libc::rusage> {
    // SAFETY: rusage is a plain C struct; getrusage fills it or fails.
    let mut usage: libc::rusage = unsafe { mem::zeroed() };
    let rc = unsafe { libc::getrusage(libc::RUSAGE_SELF, &raw mut usage) };
    (rc == 0).then_some(usage)
}

pub(super) fn peak_memory() -> u64 {
    let Some(usage) = rusage_self() else { return 0 };
    let maxrss = u64::try_from(usage.ru_maxrss).unwrap_or(0);
    // Apple reports ru_maxrss in bytes, everything else in kilobytes.
    if cfg!(target_vendor = "apple") {
        maxrss
    } else {
        maxrss * 1024
    }
}

#[cfg(target_vendor = "apple")]
pub(super) fn total_memory() -> Result<u64> {
    let mut mib = [libc::CTL_HW, libc::HW_MEMSIZE];
    let mut ram: i64 = 0;
    let mut len = mem::size_of::<i64>();
    // SAFETY: mib names a two-level sysctl and ram/len describe a valid
    // 8-byte output buffer.
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            2,
            (&raw mut ram).cast(),
            &raw mut len,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc == -1 || ram <= 0 {
        return Err(Error::TotalMemoryUnavailable);
    }
    Ok(ram as u64)
}

#[cfg(not(target_vendor = "apple"))]
pub(super) fn total_memory() -> Result<u64> {
    // SAFETY: sysconf takes a name constant and returns -1 on failure.
    let phys_pages = unsafe { libc::sysconf(libc::_SC_PHYS_PAGES) };
    let page_size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };
    if phys_pages == -1 || page_size == -1 {
        return Err(Error::TotalMemoryUnavailable);
    }
    Ok(phys_pages as u64 * page_size as u64)
}

pub(super) fn core_count() -> usize {
    // SAFETY: sysconf takes a name constant and returns -1 on failure.
    let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
    usize::try_from(n).unwrap_or(1)
}

pub(super) fn cpu_times() -> CpuTimes {
    let Some(usage) = rusage_self() else {
        return CpuTimes::default();
    };
    CpuTimes {
        user: timeval_to_seconds(usage.ru_utime),
        system: timeval_to_seconds(usage.ru_stime),
    }
}

fn timeval_to_seconds(tv: libc::timeval) -> f64 {
    tv.tv_sec as f64 + tv.tv_usec as f64 * 1.0e-6
}
