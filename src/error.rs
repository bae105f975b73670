// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Stack`](crate::Stack).
//!
//! Every fallible operation leaves the stack exactly as it was when it returns
//! one of these errors. They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{alloc::Layout, error::Error as CoreError, fmt};

/// Errors returned by operations on [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// `pop` or `top` was called on a stack with no elements.
    Empty,
    /// The requested capacity does not fit in `usize` or exceeds the
    /// maximum allocation size (`isize::MAX` bytes).
    CapacityOverflow,
    /// The global allocator could not provide a block for `layout`.
    AllocFailed {
        /// Layout of the block that was requested.
        layout: Layout,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("stack is empty"),
            Self::CapacityOverflow => f.write_str("capacity overflow"),
            Self::AllocFailed { layout } => {
                write!(f, "memory allocation of {} bytes failed", layout.size())
            }
        }
    }
}

impl CoreError for Error {}
