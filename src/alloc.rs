//! Aligned heap allocation with a fail-fast policy.
//!
//! Every block returned from this module starts at an address that is a
//! multiple of [`MEM_ALIGNMENT`], which the vectorized data structures of
//! downstream consumers require. A zero-size request is coerced to one byte
//! so a successful allocation is never empty.
//!
//! Allocation failure is not a recoverable condition here: [`allocate`] and
//! [`Block::resize`] terminate the process with a diagnostic instead of
//! returning null, which removes null-checking from every call site in a
//! large numerical codebase. Callers that genuinely can recover use
//! [`try_allocate`] and [`Block::try_resize`].
//!
//! All blocks come from the platform's thread-safe global allocator through
//! `std::alloc` with an explicit layout, and are released through the same
//! allocator with the same layout. Releasing through anything else is
//! undefined behavior, which is why [`Block`] owns its pointer.
#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::error::{Error, Result};

/// Alignment guarantee for every block, in bytes.
pub const MEM_ALIGNMENT: usize = 16;

/// An owned, aligned heap allocation.
///
/// The block is released when dropped; [`release`] exists for call sites
/// that want the hand-off to read explicitly. Contents are uninitialized
/// after [`allocate`] and past the preserved prefix after a resize, so
/// access goes through the raw pointer accessors.
#[derive(Debug)]
pub struct Block {
    ptr: NonNull<u8>,
    size: usize,
}

// SAFETY: a Block is a unique owner of untyped bytes; moving or sharing the
// handle across threads does not alias the allocation.
unsafe impl Send for Block {}
unsafe impl Sync for Block {}

impl Block {
    fn layout(size: usize) -> Result<Layout> {
        debug_assert!(size >= 1);
        Layout::from_size_align(size, MEM_ALIGNMENT)
            .map_err(|_| Error::AllocFailed { size })
    }

    /// Starting address of the block. Always a multiple of
    /// [`MEM_ALIGNMENT`].
    #[must_use]
    pub const fn as_ptr(&self) -> *const u8 {
        self.ptr.as_ptr()
    }

    /// Mutable starting address of the block.
    #[must_use]
    pub const fn as_mut_ptr(&mut self) -> *mut u8 {
        self.ptr.as_ptr()
    }

    /// Usable size in bytes. At least 1.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// A block is never empty: zero-size requests are coerced to one byte.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Grow or shrink the block in place or by moving it, preserving
    /// contents up to `min(old, new)` bytes. Fatal on allocator failure.
    ///
    /// Zero-size coercion and the alignment guarantee carry over from
    /// [`allocate`].
    pub fn resize(&mut self, new_size: usize) {
        if let Err(err) = self.try_resize(new_size) {
            err.fatal();
        }
    }

    /// Fallible form of [`Block::resize`]. On error the original block is
    /// untouched and still valid.
    pub fn try_resize(&mut self, new_size: usize) -> Result<()> {
        let new_size = new_size.max(1);
        let old_layout = Self::layout(self.size)?;
        // Reject requests the allocator could never satisfy before touching it.
        Self::layout(new_size)?;
        // SAFETY: ptr was allocated with old_layout through std::alloc and
        // new_size is non-zero and within layout bounds.
        let raw = unsafe { alloc::realloc(self.ptr.as_ptr(), old_layout, new_size) };
        match NonNull::new(raw) {
            Some(ptr) => {
                self.ptr = ptr;
                self.size = new_size;
                Ok(())
            }
            None => Err(Error::ReallocFailed { size: new_size }),
        }
    }

    /// Disassemble the block into its raw parts without releasing it.
    ///
    /// The caller takes over ownership and must hand both values back to
    /// [`from_raw`](Self::from_raw) or [`release_raw`] exactly once.
    #[must_use]
    pub fn into_raw(self) -> (*mut u8, usize) {
        let parts = (self.ptr.as_ptr(), self.size);
        std::mem::forget(self);
        parts
    }

    /// Reassemble a block from parts produced by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `ptr` and `size` must come from a single prior `into_raw` call and
    /// must not have been released or reassembled since.
    #[must_use]
    pub const unsafe fn from_raw(ptr: NonNull<u8>, size: usize) -> Self {
        Self { ptr, size }
    }
}

impl Drop for Block {
    fn drop(&mut self) {
        // The layout was validated at allocation time, so this cannot fail.
        if let Ok(layout) = Self::layout(self.size) {
            // SAFETY: ptr was allocated with exactly this layout and is
            // released at most once (Drop consumes the unique owner).
            unsafe { alloc::dealloc(self.ptr.as_ptr(), layout) };
        }
    }
}

/// Allocate `size` bytes aligned to [`MEM_ALIGNMENT`].
///
/// `size == 0` is treated as `size == 1`. On allocator failure the process
/// terminates with a diagnostic; the returned block never needs a null
/// check.
#[must_use]
pub fn allocate(size: usize) -> Block {
    match try_allocate(size) {
        Ok(block) => block,
        Err(err) => err.fatal(),
    }
}

/// Fallible form of [`allocate`].
pub fn try_allocate(size: usize) -> Result<Block> {
    let size = size.max(1);
    let layout = Block::layout(size)?;
    // SAFETY: layout has non-zero size by the coercion above.
    let raw = unsafe { alloc::alloc(layout) };
    NonNull::new(raw)
        .map(|ptr| Block { ptr, size })
        .ok_or(Error::AllocFailed { size })
}

/// Release a previously allocated block.
///
/// Equivalent to dropping the block; spelled out for call sites where the
/// hand-back should be visible.
pub fn release(block: Block) {
    drop(block);
}

/// Release a raw pointer previously produced by [`Block::into_raw`].
///
/// Passing a null pointer is a **fatal error**: a caller that held no valid
/// resource has a programming defect, and this is deliberately not the
/// `free(NULL)` no-op convention.
///
/// # Safety
///
/// A non-null `ptr` and its `size` must come from a single prior
/// [`Block::into_raw`] call and must not have been released since.
pub unsafe fn release_raw(ptr: *mut u8, size: usize) {
    match NonNull::new(ptr) {
        // SAFETY: forwarded from the caller's contract.
        Some(ptr) => drop(unsafe { Block::from_raw(ptr, size) }),
        None => Error::ReleaseNull.fatal(),
    }
}
