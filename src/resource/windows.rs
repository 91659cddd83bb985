//! Windows implementation of the resource queries.
//!
//! Memory facts come from the process-status and global-memory APIs; CPU
//! time comes from `GetProcessTimes`, which reports 100-nanosecond
//! `FILETIME` units.
#![allow(unsafe_code)]

use std::mem;

use windows_sys::Win32::Foundation::FILETIME;
use windows_sys::Win32::System::ProcessStatus::{
    K32GetProcessMemoryInfo, PROCESS_MEMORY_COUNTERS,
};
use windows_sys::Win32::System::SystemInformation::{
    GetSystemInfo, GlobalMemoryStatusEx, MEMORYSTATUSEX, SYSTEM_INFO,
};
use windows_sys::Win32::System::Threading::{GetCurrentProcess, GetProcessTimes};

use super::CpuTimes;
use crate::error::{Error, Result};

pub(super) fn peak_memory() -> u64 {
    // SAFETY: pmc is a plain C struct sized for the call.
    let mut pmc: PROCESS_MEMORY_COUNTERS = unsafe { mem::zeroed() };
    pmc.cb = mem::size_of::<PROCESS_MEMORY_COUNTERS>() as u32;
    let rc = unsafe {
        K32GetProcessMemoryInfo(GetCurrentProcess(), &raw mut pmc, pmc.cb)
    };
    if rc == 0 {
        return 0;
    }
    pmc.PeakWorkingSetSize as u64
}

pub(super) fn total_memory() -> Result<u64> {
    // SAFETY: ms is a plain C struct with dwLength set as the API requires.
    let mut ms: MEMORYSTATUSEX = unsafe { mem::zeroed() };
    ms.dwLength = mem::size_of::<MEMORYSTATUSEX>() as u32;
    let rc = unsafe { GlobalMemoryStatusEx(&raw mut ms) };
    if rc == 0 || ms.ullTotalPhys == 0 {
        return Err(Error::TotalMemoryUnavailable);
    }
    Ok(ms.ullTotalPhys)
}

pub(super) fn core_count() -> usize {
    // SAFETY: GetSystemInfo always fills the struct.
    let mut si: SYSTEM_INFO = unsafe { mem::zeroed() };
    unsafe { GetSystemInfo(&raw mut si) };
    si.dwNumberOfProcessors as usize
}

pub(super) fn cpu_times() -> CpuTimes {
    let mut creation: FILETIME = empty_filetime();
    let mut exit: FILETIME = empty_filetime();
    let mut kernel: FILETIME = empty_filetime();
    let mut user: FILETIME = empty_filetime();
    // SAFETY: all four output structs are valid for writes; the
    // pseudo-handle from GetCurrentProcess needs no closing.
    let rc = unsafe {
        GetProcessTimes(
            GetCurrentProcess(),
            &raw mut creation,
            &raw mut exit,
            &raw mut kernel,
            &raw mut user,
        )
    };
    if rc == 0 {
        return CpuTimes::default();
    }
    CpuTimes {
        user: filetime_to_seconds(&user),
        system: filetime_to_seconds(&kernel),
    }
}

const fn empty_filetime() -> FILETIME {
    FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    }
}

fn filetime_to_seconds(ft: &FILETIME) -> f64 {
    let ticks = (u64::from(ft.dwHighDateTime) << 32) | u64::from(ft.dwLowDateTime);
    // FILETIME ticks are 100 ns.
    ticks as f64 * 100.0e-9
}
