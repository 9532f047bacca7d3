// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Vector (level 2): sorted map from middle keys to owned Terminals.
//!
//! A Vector holds the distinct B-position values that co-occur with one
//! A-position key of the owning Head, each owning exactly one [`Terminal`].
//! Removing a key drops its Terminal with it.

use crate::index::iter::VectorIter;
use crate::index::list::{SortedEntry, SortedList};
use crate::index::terminal::Terminal;
use crate::types::NodeId;
use std::mem;

/// Default initial capacity of a Vector's entry array.
pub const VECTOR_INITIAL_CAPACITY: usize = 64;

/// One (key, Terminal) pair of a Vector.
#[derive(Debug, Clone)]
pub(crate) struct VectorEntry {
    pub node: NodeId,
    pub terminal: Terminal,
}

impl SortedEntry for VectorEntry {
    fn key(&self) -> NodeId {
        self.node
    }
}

/// Sorted array of (node id, owned Terminal) pairs.
#[derive(Debug, Clone)]
pub struct Vector {
    entries: SortedList<VectorEntry>,
}

impl Vector {
    /// Empty Vector with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(VECTOR_INITIAL_CAPACITY)
    }

    /// Empty Vector with a caller-chosen initial capacity (also the shrink
    /// floor).
    pub fn with_capacity(capacity: usize) -> Self {
        Vector {
            entries: SortedList::new(capacity),
        }
    }

    /// Insert or replace the Terminal stored under `node`.
    ///
    /// This is a replacing upsert: ownership of `terminal` transfers to the
    /// Vector, and an already-present Terminal under the same key is
    /// displaced and handed back to the caller, who releases it by dropping.
    ///
    /// ## Output
    /// - `None`: fresh insert
    /// - `Some(old)`: `old` was replaced
    pub fn add_terminal(&mut self, node: NodeId, terminal: Terminal) -> Option<Terminal> {
        match self.entries.search(node) {
            Ok(pos) => {
                let slot = &mut self.entries.as_mut_slice()[pos];
                Some(mem::replace(&mut slot.terminal, terminal))
            }
            Err(pos) => {
                self.entries.insert_at(pos, VectorEntry { node, terminal });
                None
            }
        }
    }

    /// Remove the entry under `node`, returning its Terminal.
    ///
    /// ## Output
    /// - `Some(terminal)`: entry removed
    /// - `None`: key not present (no-op)
    pub fn remove_terminal(&mut self, node: NodeId) -> Option<Terminal> {
        match self.entries.search(node) {
            Ok(pos) => Some(self.entries.remove_at(pos).terminal),
            Err(_) => None,
        }
    }

    /// O(log n) lookup.
    pub fn get_terminal(&self, node: NodeId) -> Option<&Terminal> {
        match self.entries.search(node) {
            Ok(pos) => self.entries.get(pos).map(|entry| &entry.terminal),
            Err(_) => None,
        }
    }

    pub fn get_terminal_mut(&mut self, node: NodeId) -> Option<&mut Terminal> {
        match self.entries.search(node) {
            Ok(pos) => Some(&mut self.entries.as_mut_slice()[pos].terminal),
            Err(_) => None,
        }
    }

    /// Number of distinct middle keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Triples below this Vector: sum over all owned Terminals, recomputed
    /// on demand.
    pub fn triples_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.terminal.triples_count())
            .sum()
    }

    /// Entry at an iteration position, ascending key order.
    pub fn entry_at(&self, index: usize) -> Option<(NodeId, &Terminal)> {
        self.entries
            .get(index)
            .map(|entry| (entry.node, &entry.terminal))
    }

    /// (key, Terminal) pairs in ascending key order.
    pub fn iter(&self) -> VectorIter<'_> {
        VectorIter::new(self.entries.iter())
    }

    /// Approximate resident size in bytes, spare capacity and all owned
    /// Terminals included.
    pub fn memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.heap_size()
    }

    pub(crate) fn heap_size(&self) -> usize {
        let children: usize = self
            .entries
            .iter()
            .map(|entry| entry.terminal.heap_size())
            .sum();
        self.entries.heap_size() + children
    }

    /// Current allocated capacity of the entry array.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    pub(crate) fn resize_counts(&self) -> (u64, u64) {
        let (mut grows, mut shrinks) = self.entries.resize_counts();
        for entry in self.entries.iter() {
            let (g, s) = entry.terminal.resize_counts();
            grows += g;
            shrinks += s;
        }
        (grows, shrinks)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vector_test.rs"]
mod vector_test;
