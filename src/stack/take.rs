// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

impl<T> Stack<T> {
    /// Transfers the whole stack out in O(1), leaving `self` empty.
    ///
    /// The buffer changes owner without touching any element; `self` ends up
    /// with no block, capacity 0 and length 0, and stays usable.
    ///
    /// # Examples
    /// ```
    /// # use strong_stack::Stack;
    /// let mut original: Stack<u8> = Stack::new();
    /// original.push(1)?;
    /// let moved = original.take();
    /// assert!(original.is_empty());
    /// assert_eq!(original.capacity(), 0);
    /// assert_eq!(moved.top()?, 1);
    /// # Ok::<(), strong_stack::Error>(())
    /// ```
    #[inline]
    pub fn take(&mut self) -> Self {
        Self {
            buf: self.buf.take(),
        }
    }
}
