// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Three-level sorted triple index (one hexastore permutation).
//!
//! The index stores triples of opaque node identifiers as a tree of sorted
//! arrays: **Head** (outermost keys) → **Vector** (middle keys) →
//! **Terminal** (innermost nodes). Which triple component lands on which
//! level is fixed by a [`TripleOrdering`] at construction. Six orderings
//! cover all binding patterns; an enclosing store would maintain one index
//! per ordering and route queries to the best-matching one.
//!
//! - **list**: sorted-array primitive with geometric grow/shrink
//! - **terminal / vector / head**: the three levels
//! - **ordering**: the six storage permutations
//! - **index**: the triple API with cascading insert/remove
//! - **iter**: ordered level and triple iterators

pub(crate) mod list;

pub mod head;
pub mod index;
pub mod iter;
pub mod ordering;
pub mod terminal;
pub mod vector;

// Re-export public API
pub use head::{Head, HEAD_INITIAL_CAPACITY};
pub use index::{IndexStats, OpCounters, TripleIndex};
pub use iter::{HeadIter, TerminalIter, TripleIter, VectorIter};
pub use ordering::TripleOrdering;
pub use terminal::{Terminal, TERMINAL_INITIAL_CAPACITY};
pub use vector::{Vector, VECTOR_INITIAL_CAPACITY};
