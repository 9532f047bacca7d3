// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Triple index: one permutation slice of a hexastore.
//!
//! A [`TripleIndex`] owns a [`Head`] and an immutable [`TripleOrdering`].
//! Every incoming (s, p, o) is projected through the ordering into (a, b, c)
//! storage order, then the three levels are descended Head → Vector →
//! Terminal.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ TripleIndex (ordering = e.g. spo)             │
//! ├───────────────────────────────────────────────┤
//! │ Head:      a₁ a₂ a₃ ...        sorted keys    │
//! │             │                                 │
//! │ Vector:    b₁ b₂ ...           per a-key      │
//! │             │                                 │
//! │ Terminal:  c₁ c₂ c₃ ...        per (a,b) pair │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Removing the last c under a (a, b) pair removes the pair; removing the
//! last pair under an a-key removes the key. The Head itself persists empty.
//!
//! ## Thread Safety
//!
//! - Not thread-safe (caller must synchronise)
//! - `&mut self` for mutation, `&self` for reads; the borrow checker
//!   enforces that no iterator survives a mutation

use crate::config::TuningConfig;
use crate::error::{HexError, HexResult};
use crate::index::head::Head;
use crate::index::iter::TripleIter;
use crate::index::ordering::TripleOrdering;
use crate::index::terminal::Terminal;
use crate::index::vector::Vector;
use crate::types::{NodeId, Triple};
use serde::Serialize;
use std::fmt;
use std::mem;

/// Lifetime operation counters of one index.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct OpCounters {
    /// Triples actually inserted.
    pub adds: u64,
    /// Add calls that found the triple already present.
    pub duplicates: u64,
    /// Triples actually removed.
    pub removes: u64,
    /// Remove calls that found nothing to remove.
    pub misses: u64,
}

/// Serializable snapshot of an index's shape and activity.
#[derive(Debug, Clone, Serialize)]
pub struct IndexStats {
    /// Ordering string ("spo", ...).
    pub ordering: String,
    /// Stored triples.
    pub triples: u64,
    /// Distinct outermost keys.
    pub head_keys: usize,
    /// Distinct (a, b) key pairs.
    pub pair_keys: usize,
    /// Approximate resident bytes, spare capacity included.
    pub memory_bytes: usize,
    /// Buffer reallocations that grew a level array.
    pub grows: u64,
    /// Buffer reallocations that shrank a level array.
    pub shrinks: u64,
    /// Operation counters since construction.
    pub counters: OpCounters,
}

impl IndexStats {
    /// JSON rendering of the snapshot.
    pub fn to_json(&self) -> HexResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HexError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// In-memory triple index for one storage permutation.
///
/// ## Example Usage
///
/// ```rust
/// use hexastore::{TripleIndex, TripleOrdering};
///
/// let mut index = TripleIndex::new(TripleOrdering::Spo);
/// assert!(index.add_triple(1, 2, 3));
/// assert!(index.add_triple(1, 2, 4));
/// assert!(!index.add_triple(1, 2, 3));
///
/// assert_eq!(index.triples_count(), 2);
/// assert!(index.remove_triple(1, 2, 3));
/// assert_eq!(index.triples_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TripleIndex {
    ordering: TripleOrdering,
    head: Head,
    tuning: TuningConfig,
    counters: OpCounters,
}

impl TripleIndex {
    /// Empty index for the given ordering, default tuning.
    pub fn new(ordering: TripleOrdering) -> Self {
        let tuning = TuningConfig::default();
        TripleIndex {
            ordering,
            head: Head::with_capacity(tuning.head_capacity),
            tuning,
            counters: OpCounters::default(),
        }
    }

    /// Empty index with caller-chosen level capacities.
    ///
    /// ## Input
    /// - `ordering`: storage permutation, immutable afterwards
    /// - `tuning`: initial capacities for the three levels
    ///
    /// ## Output
    /// - `Ok(TripleIndex)`: ready index
    /// - `Err(HexError::InvalidConfig)`: a capacity was zero
    pub fn with_tuning(ordering: TripleOrdering, tuning: TuningConfig) -> HexResult<Self> {
        tuning.validate()?;
        Ok(TripleIndex {
            ordering,
            head: Head::with_capacity(tuning.head_capacity),
            tuning,
            counters: OpCounters::default(),
        })
    }

    /// The storage permutation this index was constructed with.
    pub fn ordering(&self) -> TripleOrdering {
        self.ordering
    }

    /// Insert a triple.
    ///
    /// Missing Vector/Terminal levels are created on demand, sized per the
    /// index tuning.
    ///
    /// ## Output
    /// - `true`: triple was inserted
    /// - `false`: triple was already present (no-op)
    pub fn add_triple(&mut self, subject: NodeId, predicate: NodeId, object: NodeId) -> bool {
        let triple = Triple::new(subject, predicate, object);
        let (a, b, c) = self.ordering.project(&triple);

        let vector_capacity = self.tuning.vector_capacity;
        let terminal_capacity = self.tuning.terminal_capacity;

        let vector = self
            .head
            .get_or_insert_with(a, || Vector::with_capacity(vector_capacity));
        let added = match vector.get_terminal_mut(b) {
            Some(terminal) => terminal.add_node(c),
            None => {
                let mut terminal = Terminal::with_capacity(terminal_capacity);
                terminal.add_node(c);
                vector.add_terminal(b, terminal);
                true
            }
        };

        if added {
            self.counters.adds += 1;
        } else {
            self.counters.duplicates += 1;
        }
        added
    }

    /// Remove a triple, cascading empty levels away.
    ///
    /// ## Output
    /// - `true`: triple was removed
    /// - `false`: triple was not present (no-op; includes any level of the
    ///   descent being absent)
    pub fn remove_triple(&mut self, subject: NodeId, predicate: NodeId, object: NodeId) -> bool {
        let triple = Triple::new(subject, predicate, object);
        let (a, b, c) = self.ordering.project(&triple);

        let removed = self.remove_projected(a, b, c);
        if removed {
            self.counters.removes += 1;
        } else {
            self.counters.misses += 1;
        }
        removed
    }

    fn remove_projected(&mut self, a: NodeId, b: NodeId, c: NodeId) -> bool {
        let vector = match self.head.get_vector_mut(a) {
            Some(vector) => vector,
            None => return false,
        };

        let (removed, terminal_empty) = match vector.get_terminal_mut(b) {
            Some(terminal) => {
                let removed = terminal.remove_node(c);
                (removed, terminal.is_empty())
            }
            None => return false,
        };
        if !removed {
            return false;
        }

        if terminal_empty {
            vector.remove_terminal(b);
        }
        if vector.is_empty() {
            self.head.remove_vector(a);
        }
        true
    }

    /// O(log n) membership test along the same descent the mutations use.
    pub fn contains_triple(&self, subject: NodeId, predicate: NodeId, object: NodeId) -> bool {
        let triple = Triple::new(subject, predicate, object);
        let (a, b, c) = self.ordering.project(&triple);

        self.head
            .get_vector(a)
            .and_then(|vector| vector.get_terminal(b))
            .map(|terminal| terminal.contains(c))
            .unwrap_or(false)
    }

    /// Stored triples, summed across the whole subtree.
    pub fn triples_count(&self) -> u64 {
        self.head.triples_count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_empty()
    }

    /// Ordered iterator over all stored triples, positioned at the first.
    pub fn iter(&self) -> TripleIter<'_> {
        TripleIter::new(&self.head, self.ordering)
    }

    /// The root level, for level-local traversal and debugging.
    pub fn head(&self) -> &Head {
        &self.head
    }

    /// Approximate resident size in bytes, spare capacity included.
    pub fn memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.head.heap_size()
    }

    /// Snapshot of the index's shape and activity.
    pub fn stats(&self) -> IndexStats {
        let pair_keys = self.head.iter().map(|(_, vector)| vector.len()).sum();
        let (grows, shrinks) = self.head.resize_counts();
        IndexStats {
            ordering: self.ordering.to_string(),
            triples: self.triples_count(),
            head_keys: self.head.len(),
            pair_keys,
            memory_bytes: self.memory_size(),
            grows,
            shrinks,
            counters: self.counters,
        }
    }
}

// Human-readable nested dump. The format is an observation aid, not a
// contract.
impl fmt::Display for TripleIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "index ordering={} triples={}",
            self.ordering,
            self.triples_count()
        )?;
        for (a, vector) in self.head.iter() {
            writeln!(f, "  {}", a)?;
            for (b, terminal) in vector.iter() {
                writeln!(f, "    {} {}", b, terminal)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;
