// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::Stack};

impl<T> Stack<T> {
    /// Removes the top element and returns it.
    ///
    /// Returns [`Error::Empty`] if there is nothing to pop.
    ///
    /// If removing the top would leave fewer than `capacity / 2` elements, the
    /// buffer is first shrunk to `capacity / 2` slots. The check uses the
    /// length after the removal, so a stack with capacity 8 and 4 elements
    /// shrinks to capacity 4 on its next pop. A failed shrink returns the error
    /// and leaves the stack unchanged.
    pub fn pop(&mut self) -> Result<T, Error> {
        let len = self.len();
        if len == 0 {
            return Err(Error::Empty);
        }

        let half = self.capacity() / 2;
        if len - 1 < half {
            self.reallocate(half)?;
        }

        self.buf.pop_last().ok_or(Error::Empty)
    }
}
