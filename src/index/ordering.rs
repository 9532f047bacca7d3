// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Triple orderings (storage permutations).
//!
//! An ordering fixes which triple component becomes the outermost key (A),
//! the middle key (B) and the innermost key (C) of a [`TripleIndex`]. Six
//! permutations exist; a full hexastore instantiates one index per
//! permutation so that any binding pattern can be answered by an ordered
//! scan.
//!
//! ## Ordering Strings
//!
//! Orderings parse from three-letter strings over `{s, p, o}`, one letter
//! per position, case-insensitive: `"spo"`, `"ops"`, `"SPO"`. Anything else
//! (wrong length, unknown letters, repeated positions) is rejected with
//! [`HexError::InvalidOrdering`].
//!
//! [`TripleIndex`]: crate::index::TripleIndex

use crate::error::HexError;
use crate::types::{NodeId, Triple, TriplePosition};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Ordering string validation pattern.
///
/// Matches exactly three letters drawn from `{s, p, o}`. Distinctness of the
/// three positions is checked separately during classification.
static ORDERING_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[spo]{3}$").unwrap());

/// One of the six permutations of (subject, predicate, object).
///
/// Immutable once an index is constructed with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripleOrdering {
    Spo,
    Sop,
    Pso,
    Pos,
    Osp,
    Ops,
}

impl TripleOrdering {
    /// All six orderings, in a stable enumeration order.
    pub fn all() -> [TripleOrdering; 6] {
        [
            TripleOrdering::Spo,
            TripleOrdering::Sop,
            TripleOrdering::Pso,
            TripleOrdering::Pos,
            TripleOrdering::Osp,
            TripleOrdering::Ops,
        ]
    }

    /// The triple positions in (A, B, C) storage order.
    pub fn positions(&self) -> [TriplePosition; 3] {
        use TriplePosition::{Object, Predicate, Subject};
        match self {
            TripleOrdering::Spo => [Subject, Predicate, Object],
            TripleOrdering::Sop => [Subject, Object, Predicate],
            TripleOrdering::Pso => [Predicate, Subject, Object],
            TripleOrdering::Pos => [Predicate, Object, Subject],
            TripleOrdering::Osp => [Object, Subject, Predicate],
            TripleOrdering::Ops => [Object, Predicate, Subject],
        }
    }

    /// Project a triple into this ordering's (a, b, c) key order.
    pub fn project(&self, triple: &Triple) -> (NodeId, NodeId, NodeId) {
        let [a, b, c] = self.positions();
        (triple.get(a), triple.get(b), triple.get(c))
    }

    /// Invert [`project`](Self::project): rebuild the (s, p, o) triple from
    /// stored (a, b, c) keys.
    pub fn unproject(&self, a: NodeId, b: NodeId, c: NodeId) -> Triple {
        match self {
            TripleOrdering::Spo => Triple::new(a, b, c),
            TripleOrdering::Sop => Triple::new(a, c, b),
            TripleOrdering::Pso => Triple::new(b, a, c),
            TripleOrdering::Pos => Triple::new(c, a, b),
            TripleOrdering::Osp => Triple::new(b, c, a),
            TripleOrdering::Ops => Triple::new(c, b, a),
        }
    }

    /// Lowercase ordering string ("spo", "ops", ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            TripleOrdering::Spo => "spo",
            TripleOrdering::Sop => "sop",
            TripleOrdering::Pso => "pso",
            TripleOrdering::Pos => "pos",
            TripleOrdering::Osp => "osp",
            TripleOrdering::Ops => "ops",
        }
    }
}

impl fmt::Display for TripleOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TripleOrdering {
    type Err = HexError;

    /// Parse an ordering string.
    ///
    /// ## Input
    /// - `value`: three-letter permutation of `{s, p, o}`, case-insensitive
    ///
    /// ## Output
    /// - `Ok(TripleOrdering)`: recognised permutation
    /// - `Err(HexError::InvalidOrdering)`: wrong shape or repeated position
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.to_ascii_lowercase();
        if !ORDERING_PATTERN.is_match(&normalised) {
            return Err(HexError::InvalidOrdering {
                value: value.to_string(),
            });
        }

        // The pattern admits repeats ("sso"); classification rejects them.
        match normalised.as_str() {
            "spo" => Ok(TripleOrdering::Spo),
            "sop" => Ok(TripleOrdering::Sop),
            "pso" => Ok(TripleOrdering::Pso),
            "pos" => Ok(TripleOrdering::Pos),
            "osp" => Ok(TripleOrdering::Osp),
            "ops" => Ok(TripleOrdering::Ops),
            _ => Err(HexError::InvalidOrdering {
                value: value.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "ordering_test.rs"]
mod ordering_test;
