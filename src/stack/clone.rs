// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::Stack};

// Alloc imports
use alloc::alloc::handle_alloc_error;

impl<T: Clone> Stack<T> {
    /// Returns a deep copy whose capacity equals `self.len()`.
    ///
    /// Elements are cloned bottom to top into a buffer of exactly `len()`
    /// slots. An allocation failure is returned as an error. If an element's
    /// `Clone` panics, the partial copy is dropped during unwinding.
    pub fn try_clone(&self) -> Result<Self, Error> {
        let mut copy = Self::with_capacity(self.len())?;
        for item in self.buf.as_slice() {
            let item = item.clone();
            // SAFETY: `copy` has exactly `self.len()` slots and receives one
            // element per source element.
            unsafe { copy.buf.push_unchecked(item) };
        }
        Ok(copy)
    }

    /// Replaces the contents of `self` with a copy of `source`.
    ///
    /// The copy is built first and swapped in only once it is complete, so on
    /// error (or a panicking element `Clone`) `self` keeps its previous
    /// contents.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), Error> {
        let mut copy = source.try_clone()?;
        self.buf.swap(&mut copy.buf);
        Ok(())
    }
}

impl<T: Clone> Clone for Stack<T> {
    /// Deep copy sized to `len()`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow and calls [`handle_alloc_error`] when the
    /// allocator fails, like the standard collections.
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(Error::AllocFailed { layout }) => handle_alloc_error(layout),
            Err(err) => panic!("{err}"),
        }
    }

    /// Copy-assignment with the strong guarantee: `self` is only touched by
    /// the final swap.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.buf.swap(&mut copy.buf);
    }
}
