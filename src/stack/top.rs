// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::Stack};

impl<T> Stack<T> {
    /// Returns a clone of the top element, or [`Error::Empty`].
    ///
    /// The stack is not modified, and the returned value is independent of it.
    #[inline]
    pub fn top(&self) -> Result<T, Error>
    where
        T: Clone,
    {
        self.peek().cloned().ok_or(Error::Empty)
    }

    /// Returns a shared reference to the top element, if any.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.buf.as_slice().last()
    }
}
