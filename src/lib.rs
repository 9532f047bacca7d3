// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Hexastore - in-memory sorted triple index.
//!
//! One index realizes one permutation of (subject, predicate, object) as a
//! three-level tree of sorted arrays with incremental resizing. Six such
//! indexes, one per permutation, make up a full hexastore; this crate
//! provides the single-index building block.
//!
//! ## Features
//!
//! - **Six Orderings**: SPO, SOP, PSO, POS, OSP, OPS via [`TripleOrdering`]
//! - **Ordered Enumeration**: triples stream out in the permutation's
//!   lexicographic key order, the property merge-joins rely on
//! - **Cascading Cleanup**: removing the last triple under a key removes
//!   the key, at every level
//! - **Incremental Resizing**: geometric grow and shrink with hysteresis,
//!   tunable per level via [`TuningConfig`]
//! - **Metrics & Observability**: stats snapshots and an in-process
//!   metrics collector
//!
//! ## Quick Start
//!
//! ```rust
//! use hexastore::{TripleIndex, TripleOrdering};
//!
//! let mut index = TripleIndex::new(TripleOrdering::Spo);
//! index.add_triple(1, 2, 3);
//! index.add_triple(1, 2, 4);
//! index.add_triple(1, 5, 3);
//!
//! assert_eq!(index.triples_count(), 3);
//!
//! // Ordered scan, reprojected back to (s, p, o).
//! let subjects: Vec<i64> = index.iter().map(|t| t.subject).collect();
//! assert_eq!(subjects, vec![1, 1, 1]);
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - **types**: node identifiers, triples, positions
//! - **index**: the three sorted levels, orderings, the triple API and
//!   iterators
//! - **config**: level-capacity tuning with TOML persistence
//! - **metrics**: in-process observability
//! - **error**: structured error types

pub mod config;
pub mod error;
pub mod index;
pub mod metrics;
pub mod types;

// Re-export commonly used types
pub use config::{load_tuning, save_tuning, TuningConfig};
pub use error::{HexError, HexResult};
pub use index::{
    Head, IndexStats, Terminal, TripleIndex, TripleIter, TripleOrdering, Vector,
};
pub use types::{NodeId, Triple, TriplePosition};
