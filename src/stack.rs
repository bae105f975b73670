// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Stack` type and its inherent API.
//!
//! `Stack<T>` is a last-in-first-out container over a heap buffer of
//! uninitialized slots. Capacity grows to `2 * capacity + 1` when a push finds
//! the buffer full and halves when a pop would leave it less than half used.
//! Every reallocation builds the new buffer on the side and swaps it in only
//! once it is complete, so a failed operation never changes the stack.

mod append;
mod clear;
mod clone;
mod default;
mod new;
mod pop;
mod push;
mod take;
mod top;

// Crate imports
use crate::{error::Error, raw::RawBuf};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

// External imports - log
use log::trace;

/// A growable LIFO stack with strong failure guarantees.
///
/// # Layout and invariants
///
/// A `Stack<T>` owns exactly one heap block of `capacity()` slots. Slots
/// `[0, len())` hold live elements in push order; index `len() - 1` is the
/// top. Slots past `len()` are uninitialized and never touched. A stack with
/// capacity 0 owns no block at all.
///
/// # Growth and shrink
///
/// - [`push`](Stack::push) on a full stack reallocates to `2 * capacity + 1`
///   slots, so the first push into an empty stack allocates exactly one slot
///   and capacities run 1, 3, 7, 15, ...
/// - [`pop`](Stack::pop) first checks whether the stack would be left with
///   fewer than `capacity / 2` elements and, if so, reallocates to
///   `capacity / 2` slots before removing the top.
///
/// Both are amortized O(1); a single reallocation is O(len).
///
/// # Failure guarantees
///
/// Every fallible method either succeeds or returns an [`Error`] with the
/// stack unchanged. The same holds when a user `Clone` impl panics during
/// [`push_cloned`](Stack::push_cloned), [`Clone::clone_from`] or
/// [`try_clone_from`](Stack::try_clone_from): the partial copy is dropped
/// during unwinding and the target keeps its previous contents.
///
/// # Examples
///
/// ```rust
/// use strong_stack::{Error, Stack};
///
/// let mut s: Stack<&str> = Stack::new();
/// s.push("a")?;
/// s.push("b")?;
/// assert_eq!(s.capacity(), 3);
/// assert_eq!(s.top()?, "b");
/// assert_eq!(s.pop()?, "b");
/// assert_eq!(s.pop()?, "a");
/// assert_eq!(s.pop(), Err(Error::Empty));
/// # Ok::<(), Error>(())
/// ```
pub struct Stack<T> {
    pub(crate) buf: RawBuf<T>,
}

impl<T> Stack<T> {
    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns `true` if `len() == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.buf.len() == 0
    }

    /// Moves every element into a freshly acquired buffer of `capacity` slots
    /// and swaps it in.
    ///
    /// On error nothing has been moved and `self` is unchanged. The caller
    /// guarantees `capacity >= len()`.
    pub(crate) fn reallocate(&mut self, capacity: usize) -> Result<(), Error> {
        let mut fresh = RawBuf::try_with_capacity(capacity)?;
        self.buf.relocate_into(&mut fresh);
        trace!(
            "stack reallocated: capacity {} -> {} (len {})",
            self.buf.capacity(),
            capacity,
            fresh.len()
        );
        self.buf.swap(&mut fresh);
        Ok(())
    }
}

/// Next capacity in the growth sequence: `2 * capacity + 1`.
#[inline]
pub(crate) fn grown_capacity(capacity: usize) -> Result<usize, Error> {
    capacity
        .checked_mul(2)
        .and_then(|c| c.checked_add(1))
        .ok_or(Error::CapacityOverflow)
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("elements", &self.buf.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf.as_slice() == other.buf.as_slice()
    }
}
impl<T: Eq> Eq for Stack<T> {}
impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.buf.as_slice().hash(state)
    }
}
