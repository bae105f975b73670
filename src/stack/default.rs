// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}
