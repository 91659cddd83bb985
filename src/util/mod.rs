//! Portable helper utilities.
//!
//! These helpers are intentionally minimal and dependency-free; anything
//! with a platform branch lives in the dedicated subsystem modules instead.

pub mod ascii;

pub use ascii::find_ignore_case;
