// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Head (level 1): sorted map from outermost keys to owned Vectors.
//!
//! The Head is the root of one index permutation. Its initial capacity is
//! the largest of the three levels, reflecting the expected fan-out of the
//! outermost key. The Head itself persists when it becomes empty; only its
//! children cascade away.

use crate::index::iter::HeadIter;
use crate::index::list::{SortedEntry, SortedList};
use crate::index::vector::Vector;
use crate::types::NodeId;
use std::mem;

/// Default initial capacity of the Head's entry array.
pub const HEAD_INITIAL_CAPACITY: usize = 4096;

/// One (key, Vector) pair of the Head.
#[derive(Debug, Clone)]
pub(crate) struct HeadEntry {
    pub node: NodeId,
    pub vector: Vector,
}

impl SortedEntry for HeadEntry {
    fn key(&self) -> NodeId {
        self.node
    }
}

/// Sorted array of (node id, owned Vector) pairs.
#[derive(Debug, Clone)]
pub struct Head {
    entries: SortedList<HeadEntry>,
}

impl Head {
    /// Empty Head with the default initial capacity.
    pub fn new() -> Self {
        Self::with_capacity(HEAD_INITIAL_CAPACITY)
    }

    /// Empty Head with a caller-chosen initial capacity (also the shrink
    /// floor).
    pub fn with_capacity(capacity: usize) -> Self {
        Head {
            entries: SortedList::new(capacity),
        }
    }

    /// Insert or replace the Vector stored under `node`.
    ///
    /// Replacing upsert with the same contract as
    /// [`Vector::add_terminal`](crate::index::Vector::add_terminal): a
    /// displaced Vector is returned to the caller for release.
    pub fn add_vector(&mut self, node: NodeId, vector: Vector) -> Option<Vector> {
        match self.entries.search(node) {
            Ok(pos) => {
                let slot = &mut self.entries.as_mut_slice()[pos];
                Some(mem::replace(&mut slot.vector, vector))
            }
            Err(pos) => {
                self.entries.insert_at(pos, HeadEntry { node, vector });
                None
            }
        }
    }

    /// Remove the entry under `node`, returning its Vector.
    pub fn remove_vector(&mut self, node: NodeId) -> Option<Vector> {
        match self.entries.search(node) {
            Ok(pos) => Some(self.entries.remove_at(pos).vector),
            Err(_) => None,
        }
    }

    /// O(log n) lookup.
    pub fn get_vector(&self, node: NodeId) -> Option<&Vector> {
        match self.entries.search(node) {
            Ok(pos) => self.entries.get(pos).map(|entry| &entry.vector),
            Err(_) => None,
        }
    }

    pub fn get_vector_mut(&mut self, node: NodeId) -> Option<&mut Vector> {
        match self.entries.search(node) {
            Ok(pos) => Some(&mut self.entries.as_mut_slice()[pos].vector),
            Err(_) => None,
        }
    }

    /// Existing Vector under `node`, or a freshly inserted one built by
    /// `create`.
    pub(crate) fn get_or_insert_with<F>(&mut self, node: NodeId, create: F) -> &mut Vector
    where
        F: FnOnce() -> Vector,
    {
        let pos = match self.entries.search(node) {
            Ok(pos) => pos,
            Err(pos) => {
                self.entries.insert_at(
                    pos,
                    HeadEntry {
                        node,
                        vector: create(),
                    },
                );
                pos
            }
        };
        &mut self.entries.as_mut_slice()[pos].vector
    }

    /// Number of distinct outermost keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Triples below this Head: sum over all owned Vectors, recomputed on
    /// demand.
    pub fn triples_count(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| entry.vector.triples_count())
            .sum()
    }

    /// Entry at an iteration position, ascending key order.
    pub fn entry_at(&self, index: usize) -> Option<(NodeId, &Vector)> {
        self.entries
            .get(index)
            .map(|entry| (entry.node, &entry.vector))
    }

    /// (key, Vector) pairs in ascending key order.
    pub fn iter(&self) -> HeadIter<'_> {
        HeadIter::new(self.entries.iter())
    }

    /// Approximate resident size in bytes, spare capacity and the whole
    /// subtree included.
    pub fn memory_size(&self) -> usize {
        mem::size_of::<Self>() + self.heap_size()
    }

    pub(crate) fn heap_size(&self) -> usize {
        let children: usize = self
            .entries
            .iter()
            .map(|entry| entry.vector.heap_size())
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
            let (g, s) = entry.vector.resize_counts();
            grows += g;
            shrinks += s;
        }
        (grows, shrinks)
    }
}

impl Default for Head {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "head_test.rs"]
mod head_test;
