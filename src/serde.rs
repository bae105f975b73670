// This file is part of strong-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Stack`](crate::Stack).
//!
//! - **Serialize**: as a sequence of the live elements, bottom to top.
//! - **Deserialize**: from any sequence, pushing each element in order, so the
//!   last sequence element becomes the top.
//!
//! Deserialization grows the stack through [`Stack::push`](crate::Stack::push);
//! an allocation failure is reported as a deserializer error.

// Crate imports
use crate::stack::Stack;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

impl<T: Serialize> Serialize for Stack<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        // bottom first, so deserializing by repeated push restores the top
        s.collect_seq(self.buf.as_slice())
    }
}

struct StackVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for StackVisitor<T> {
    type Value = Stack<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence of stack elements, bottom to top")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = Stack::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem).map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Stack<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(StackVisitor(PhantomData))
    }
}
