// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Element types for unit tests: drop accounting and clone-panic injection.

// Std imports
use std::{cell::Cell, fmt, rc::Rc};

/// Counts its drops into a shared counter.
pub(crate) struct Tracked {
    pub(crate) value: i32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub(crate) fn new(value: i32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self::new(self.value, &self.drops)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Panics on `clone` once its shared clone budget is exhausted.
///
/// Also counts drops, so tests can check that an unwinding clone neither
/// leaks nor double-drops anything.
pub(crate) struct Fragile {
    pub(crate) value: i32,
    budget: Rc<Cell<usize>>,
    drops: Rc<Cell<usize>>,
}

impl Fragile {
    pub(crate) fn new(value: i32, budget: &Rc<Cell<usize>>, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            value,
            budget: Rc::clone(budget),
            drops: Rc::clone(drops),
        }
    }
}

impl Clone for Fragile {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self::new(self.value, &self.budget, &self.drops)
    }
}

impl Drop for Fragile {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl fmt::Debug for Fragile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragile({})", self.value)
    }
}
