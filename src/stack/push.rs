// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    stack::{grown_capacity, Stack},
};

impl<T> Stack<T> {
    /// Pushes `value` on top of the stack.
    ///
    /// With a free slot this writes in place and cannot fail. On a full stack
    /// the buffer grows to `2 * capacity + 1` slots first; if that
    /// reallocation fails the error is returned, `value` is dropped and the
    /// stack is left exactly as it was.
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        let value = match self.buf.push_within_capacity(value) {
            Ok(()) => return Ok(()),
            Err(value) => value,
        };

        self.reallocate(grown_capacity(self.capacity())?)?;
        // SAFETY: the new capacity is `2 * len + 1 > len`.
        unsafe { self.buf.push_unchecked(value) };
        Ok(())
    }

    /// Pushes a clone of `value`.
    ///
    /// The clone is made before the stack is touched, so a panicking
    /// `Clone` impl leaves it unchanged.
    #[inline]
    pub fn push_cloned(&mut self, value: &T) -> Result<(), Error>
    where
        T: Clone,
    {
        let copy = value.clone();
        self.push(copy)
    }
}

#[cfg(test)]
mod tests {
    use crate::{testing::Fragile, Stack};
    use std::{
        cell::Cell,
        panic::{catch_unwind, AssertUnwindSafe},
        rc::Rc,
    };

    #[test]
    fn test_push_counts_elements() {
        let mut s: Stack<String> = Stack::new();
        for n in 0..37 {
            s.push(n.to_string()).unwrap();
            assert_eq!(s.len(), n + 1);
        }
    }

    #[test]
    fn test_growth_capacities() {
        let mut s: Stack<u8> = Stack::new();
        assert_eq!(s.capacity(), 0);
        s.push(1).unwrap();
        assert_eq!(s.capacity(), 1);
        s.push(2).unwrap();
        assert_eq!(s.capacity(), 3);
        s.push(3).unwrap();
        assert_eq!(s.capacity(), 3);
        s.push(4).unwrap();
        assert_eq!(s.capacity(), 7);
    }

    #[test]
    fn test_push_cloned_copies_value() {
        let mut s: Stack<Vec<u8>> = Stack::new();
        let mut v = vec![1, 2];
        s.push_cloned(&v).unwrap();
        v.push(3);
        assert_eq!(s.top(), Ok(vec![1, 2]));
    }

    #[test]
    fn test_push_cloned_panic_leaves_stack_unchanged() {
        let budget = Rc::new(Cell::new(0));
        let drops = Rc::new(Cell::new(0));
        let mut s: Stack<Fragile> = Stack::new();
        s.push(Fragile::new(1, &budget, &drops)).unwrap();
        let extra = Fragile::new(2, &budget, &drops);

        let res = catch_unwind(AssertUnwindSafe(|| s.push_cloned(&extra)));
        assert!(res.is_err());
        assert_eq!(s.len(), 1);
        assert_eq!(s.capacity(), 1);
        assert_eq!(s.peek().map(|f| f.value), Some(1));
        assert_eq!(drops.get(), 0);
    }

    #[test]
    fn test_zero_sized_push() {
        let mut s: Stack<()> = Stack::new();
        for _ in 0..10 {
            s.push(()).unwrap();
        }
        assert_eq!(s.len(), 10);
        assert_eq!(s.capacity(), 15);
    }
}
