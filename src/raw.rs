// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Heap-resident slot buffer backing [`Stack`](crate::Stack).
//!
//! Invariants:
//! - `0 <= len <= cap` always holds.
//! - Slots `[0, len)` hold initialized `T` values.
//! - Slots `[len, cap)` are uninitialized and are never read or dropped.
//! - `ptr` points to a block allocated with `Layout::array::<T>(cap)` when that
//!   layout has a non-zero size; otherwise it is dangling and never freed.

// Crate imports
use crate::error::Error;

// Core imports
use core::{alloc::Layout, marker::PhantomData, mem, ptr, ptr::NonNull, slice};

// Alloc imports
use alloc::alloc::{alloc, dealloc};

/// Owned block of `cap` slots, the first `len` of which are live.
///
/// `RawBuf` knows nothing about stack policy: it only acquires and releases its
/// block, writes the next free slot, moves out the last live slot, and
/// relocates its live prefix into another buffer.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `RawBuf` uniquely owns its block and the `T`s in it, so sending or
// sharing it is exactly as safe as sending or sharing those `T`s.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: see above; `&RawBuf` only hands out `&T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// The empty state: no block, no capacity, nothing live.
    #[inline]
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Acquires a block for `capacity` slots.
    ///
    /// No block is allocated when the layout is zero-sized (`capacity == 0`
    /// or zero-sized `T`). Returns [`Error::CapacityOverflow`] if the layout
    /// would exceed `isize::MAX` bytes and [`Error::AllocFailed`] if the global
    /// allocator returns null.
    pub(crate) fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        let layout = Layout::array::<T>(capacity).map_err(|_| Error::CapacityOverflow)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap: capacity,
                len: 0,
                _owns: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(Error::AllocFailed { layout })?;

        Ok(Self {
            ptr,
            cap: capacity,
            len: 0,
            _owns: PhantomData,
        })
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Constructs `value` in slot `len` and marks it live.
    ///
    /// # Safety
    ///
    /// The caller must guarantee `len < capacity`.
    #[inline]
    pub(crate) unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.cap);
        // SAFETY: the caller guarantees `len < cap`, so slot `len` lies inside
        // the block and is currently uninitialized.
        unsafe { self.ptr.as_ptr().add(self.len).write(value) };
        self.len += 1;
    }

    /// Constructs `value` in slot `len` if there is a free slot, handing it
    /// back otherwise.
    #[inline]
    pub(crate) fn push_within_capacity(&mut self, value: T) -> Result<(), T> {
        if self.len == self.cap {
            return Err(value);
        }
        // SAFETY: checked `len < cap` just above.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Moves the element out of slot `len - 1`, if any.
    #[inline]
    pub(crate) fn pop_last(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: before the decrement, slot `len` was inside the live prefix;
        // it is now outside it, so the value is read out exactly once.
        Some(unsafe { self.ptr.as_ptr().add(self.len).read() })
    }

    /// Moves every live element onto the free tail of `dst`, bottom to top.
    ///
    /// Afterwards `self` has no live elements (its block is kept) and
    /// `dst.len()` has grown by the number of elements moved.
    ///
    /// # Panics
    ///
    /// Panics if `dst` does not have room for all of them.
    pub(crate) fn relocate_into(&mut self, dst: &mut RawBuf<T>) {
        let count = self.len;
        assert!(
            dst.cap - dst.len >= count,
            "relocation target has {} free slots, needs {}",
            dst.cap - dst.len,
            count
        );

        // SAFETY: `self[..count]` is live, `dst[dst.len..dst.len + count]` is
        // in bounds and uninitialized, and the two blocks are distinct because
        // both are borrowed mutably. Ownership of the values passes to `dst` by
        // zeroing `self.len` without dropping anything.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), dst.ptr.as_ptr().add(dst.len), count);
        }
        self.len = 0;
        dst.len += count;
    }

    /// Shared view of the live prefix.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is non-null and aligned, and the first `len` slots are
        // initialized by invariant.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// Drops all live elements in index order, keeping the block.
    pub(crate) fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.len);
        // Mark them dead first so a panicking destructor cannot cause a
        // second drop from `Drop for RawBuf`.
        self.len = 0;
        // SAFETY: `live` covers exactly the previously initialized prefix, and
        // nothing else can observe those slots any more.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Transfers the whole buffer out, leaving `self` in the empty state.
    ///
    /// Runs no element code and cannot fail.
    #[inline]
    pub(crate) fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Exchanges two buffers. Runs no element code and cannot fail.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Layout of the owned block, or `None` when no block is owned.
    fn block_layout(&self) -> Option<Layout> {
        Layout::array::<T>(self.cap)
            .ok()
            .filter(|layout| layout.size() != 0)
    }
}

/// Frees a block when dropped, including while unwinding out of an element
/// destructor.
struct FreeBlock {
    ptr: NonNull<u8>,
    layout: Layout,
}

impl Drop for FreeBlock {
    fn drop(&mut self) {
        // SAFETY: only built by `Drop for RawBuf` from a non-zero-sized
        // layout for `cap`, so the block came from `alloc` with this exact
        // layout in `try_with_capacity`, and it is freed only here.
        unsafe { dealloc(self.ptr.as_ptr(), self.layout) };
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let _block = self.block_layout().map(|layout| FreeBlock {
            ptr: self.ptr.cast::<u8>(),
            layout,
        });
        self.clear();
    }
}
