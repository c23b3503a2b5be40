//! # Packed Boolean Vectors
//!
//! *One bit per boolean, storage that tracks length exactly.*
//!
//! ## Intuition First
//!
//! A `Vec<bool>` spends a whole byte on every boolean: seven of its
//! eight bits never carry information. Imagine instead writing each
//! answer of a yes/no survey as a single tick mark on a strip of paper
//! ruled into eight-tick cells, tearing off empty cells as answers are
//! erased. That strip is this crate: the same mutable sequence API,
//! one eighth of the space.
//!
//! ## The Problem
//!
//! Dense boolean storage faces a trade-off:
//! - **Byte-per-bool**: Simple indexing, $8\times$ the space.
//! - **Fixed bitsets**: Minimal space but a static length, no
//!   insert/delete in the middle of the sequence.
//!
//! This crate takes the packed layout and keeps the full mutable
//! vector surface: push, pop, set, insert, and delete at arbitrary
//! positions, with backing storage held at exactly
//! $\lceil n / 8 \rceil$ bytes for $n$ stored booleans.
//!
//! ## Mathematical Formulation
//!
//! Two primitives carry every operation:
//! - `locate(i) = (i \div 8, i \bmod 8)` maps a logical index to its
//!   word and bit offset.
//! - `resize(n)` pins the word count to $\lceil n / 8 \rceil$ as the
//!   logical length changes.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(1)$ for push/pop/get/set at the tail; $O(n)$ for
//!   insert and delete, which shift the following bits.
//! - **Space**: $n + O(1)$ bits, no slack words, no auxiliary index.
//!
//! ## What Could Go Wrong
//!
//! 1. **Middle mutation is linear**: insert and delete shift every
//!    later element one bit at a time. For write-heavy middle
//!    mutation at scale, a different structure (a rope of words) wins.
//! 2. **Not thread-safe**: the vector is a plain owned value; wrap it
//!    in a lock if several threads must mutate the same instance.
//!
//! ## Implementation Notes
//!
//! This crate provides:
//! - **`PackedBoolVec`**: the container, in [`packed`].
//! - **`Error`**: failure taxonomy, in [`error`]. Every fallible
//!   operation validates before mutating; an error leaves the vector
//!   untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod packed;

pub use error::Error;
pub use packed::PackedBoolVec;
