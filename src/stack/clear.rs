// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

impl<T> Stack<T> {
    /// Drops every element, bottom to top, keeping the buffer.
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
