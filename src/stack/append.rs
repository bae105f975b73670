// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{grown_capacity, Stack},
};

impl<T> Stack<T> {
    /// Moves all elements of `other` on top of `self`, leaving `other` empty.
    ///
    /// Elements keep their bottom-to-top order, so the top of `other` becomes
    /// the new top of `self`. `other` keeps its buffer.
    ///
    /// If `self` lacks room, its capacity follows the push growth sequence
    /// (`c -> 2c + 1`) until everything fits, and a single reallocation is
    /// made. If that fails, the error is returned and neither stack changes.
    pub fn append(&mut self, other: &mut Self) -> Result<(), Error> {
        let needed = self
            .len()
            .checked_add(other.len())
            .ok_or(Error::CapacityOverflow)?;

        if needed > self.capacity() {
            let mut capacity = self.capacity();
            while capacity < needed {
                capacity = grown_capacity(capacity)?;
            }
            self.reallocate(capacity)?;
        }

        other.buf.relocate_into(&mut self.buf);
        Ok(())
    }
}
