// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, raw::RawBuf, stack::Stack};

impl<T> Stack<T> {
    /// Constructs an empty stack without allocating.
    #[inline]
    pub const fn new() -> Self {
        Self { buf: RawBuf::new() }
    }

    /// Constructs an empty stack with room for `capacity` elements.
    ///
    /// `capacity == 0` allocates nothing and is equivalent to [`Stack::new`].
    /// Returns [`Error::CapacityOverflow`] or [`Error::AllocFailed`] if the
    /// block cannot be acquired.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            buf: RawBuf::try_with_capacity(capacity)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Stack};

    #[test]
    fn test_new_owns_no_block() {
        let s: Stack<String> = Stack::new();
        assert_eq!(s.len(), 0);
        assert_eq!(s.capacity(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn test_with_capacity_presizes() {
        let mut s: Stack<u16> = Stack::with_capacity(4).unwrap();
        assert_eq!(s.capacity(), 4);
        assert!(s.is_empty());
        for v in 0..4 {
            s.push(v).unwrap();
        }
        // no growth while there is room
        assert_eq!(s.capacity(), 4);
        s.push(4).unwrap();
        assert_eq!(s.capacity(), 9);
    }

    #[test]
    fn test_with_capacity_overflow() {
        let err = Stack::<[u8; 16]>::with_capacity(usize::MAX).unwrap_err();
        assert_eq!(err, Error::CapacityOverflow);
    }
}
