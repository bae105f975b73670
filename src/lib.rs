// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `strong-stack`
//!
//! A `no_std` + `alloc`, growable LIFO stack whose mutating operations give
//! the **strong guarantee**: if an operation fails, the stack is left exactly
//! as it was before the call.
//!
//! The core type, [`Stack<T>`], keeps its elements in a single heap block of
//! uninitialized slots and tracks how many of them, counted from the bottom,
//! hold live values. Only [`push`](Stack::push), [`pop`](Stack::pop),
//! [`top`](Stack::top) and a few helpers touch that block.
//!
//! ## Growth and shrink
//!
//! - A push into a full stack reallocates to `2 * capacity + 1` slots:
//!   capacities run 0, 1, 3, 7, 15, ...
//! - A pop that would leave fewer than `capacity / 2` elements first
//!   reallocates to `capacity / 2` slots.
//!
//! Both keep push and pop amortized O(1).
//!
//! ## Failure model
//!
//! Two kinds of failure are handled:
//!
//! - **Reported**: [`Error::Empty`] from `pop`/`top` on an empty stack, and
//!   [`Error::CapacityOverflow`] / [`Error::AllocFailed`] when a buffer cannot
//!   be acquired.
//! - **Unwinding**: a panic from an element's `Clone` impl while the stack is
//!   being copied.
//!
//! In both cases all risky work (allocation, relocation, cloning) goes into a
//! separate temporary, which is exchanged with the stack only once it is
//! complete. A temporary that fails partway is dropped, releasing whatever it
//! built, and the original is never touched.
//!
//! Moves in Rust are plain memory copies and cannot fail, so relocating
//! elements during growth or shrink never runs user code.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Stack<T>`, as a bottom-to-top
//!     sequence.
//!
//! ## Logging
//!
//! Reallocations are reported through the [`log`] facade at `trace` level.
//! No logger is installed by this crate.
//!
//! ## Example
//!
//! ```rust
//! use strong_stack::Stack;
//!
//! let mut s: Stack<String> = Stack::new();
//! s.push("first".to_string())?;
//! s.push("second".to_string())?;
//!
//! let copy = s.clone();
//! assert_eq!(s.pop()?, "second");
//! assert_eq!(copy.len(), 2);
//! assert_eq!(copy.top()?, "second");
//! # Ok::<(), strong_stack::Error>(())
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod raw;
#[cfg(feature = "serde")]
mod serde;
mod stack;
#[cfg(test)]
mod testing;

// Public exports (crate API surface)
pub use error::Error;
pub use stack::Stack;
