// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for the triple index.

#[cfg(test)]
mod tests {
    use crate::config::TuningConfig;
    use crate::error::HexError;
    use crate::index::{TripleIndex, TripleOrdering};
    use crate::types::Triple;
    use std::collections::BTreeSet;

    fn spo_index_with_three() -> TripleIndex {
        let mut index = TripleIndex::new(TripleOrdering::Spo);
        index.add_triple(1, 2, 3);
        index.add_triple(1, 2, 4);
        index.add_triple(1, 5, 3);
        index
    }

    #[test]
    fn test_basic_round_trip_spo() {
        let index = spo_index_with_three();
        assert_eq!(index.triples_count(), 3);

        let triples: Vec<_> = index.iter().collect();
        assert_eq!(
            triples,
            vec![
                Triple::new(1, 2, 3),
                Triple::new(1, 2, 4),
                Triple::new(1, 5, 3),
            ]
        );
    }

    #[test]
    fn test_cascading_cleanup() {
        let mut index = spo_index_with_three();

        assert!(index.remove_triple(1, 2, 3));
        assert!(index.remove_triple(1, 2, 4));
        // Predicate 2's terminal is gone; subject 1 keeps predicate 5.
        assert_eq!(index.triples_count(), 1);
        assert!(index.contains_triple(1, 5, 3));
        assert!(!index.contains_triple(1, 2, 3));

        assert!(index.remove_triple(1, 5, 3));
        assert_eq!(index.triples_count(), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_ordering_effect_ops() {
        let mut spo = TripleIndex::new(TripleOrdering::Spo);
        let mut ops = TripleIndex::new(TripleOrdering::Ops);
        for (s, p, o) in [(1, 2, 3), (1, 2, 4), (1, 5, 3)] {
            spo.add_triple(s, p, o);
            ops.add_triple(s, p, o);
        }

        let spo_order: Vec<_> = spo.iter().collect();
        assert_eq!(
            spo_order,
            vec![
                Triple::new(1, 2, 3),
                Triple::new(1, 2, 4),
                Triple::new(1, 5, 3),
            ]
        );

        // (o, p, s) lex order: (3,2,1), (3,5,1), (4,2,1) reprojected.
        let ops_order: Vec<_> = ops.iter().collect();
        assert_eq!(
            ops_order,
            vec![
                Triple::new(1, 2, 3),
                Triple::new(1, 5, 3),
                Triple::new(1, 2, 4),
            ]
        );
    }

    #[test]
    fn test_idempotent_add() {
        let mut index = TripleIndex::new(TripleOrdering::Spo);
        assert!(index.add_triple(1, 2, 3));
        assert!(!index.add_triple(1, 2, 3));
        assert_eq!(index.triples_count(), 1);

        let stats = index.stats();
        assert_eq!(stats.counters.adds, 1);
        assert_eq!(stats.counters.duplicates, 1);
    }

    #[test]
    fn test_remove_absent_on_empty() {
        let mut index = TripleIndex::new(TripleOrdering::Spo);
        assert!(!index.remove_triple(1, 2, 3));
        assert_eq!(index.triples_count(), 0);
        assert_eq!(index.stats().counters.misses, 1);
    }

    #[test]
    fn test_remove_twice_reports_not_found() {
        let mut index = TripleIndex::new(TripleOrdering::Spo);
        index.add_triple(1, 2, 3);
        assert!(index.remove_triple(1, 2, 3));
        assert!(!index.remove_triple(1, 2, 3));
    }

    // The reference driver removes a pattern that was never stored; both
    // calls must be no-ops.
    #[test]
    fn test_remove_unmatched_pattern_is_noop() {
        let mut index = TripleIndex::new(TripleOrdering::Sop);
        for s in 1..4 {
            for p in 4..=6 {
                for o in 7..=8 {
                    index.add_triple(s, p, o);
                }
            }
        }
        assert_eq!(index.triples_count(), 18);

        assert!(!index.remove_triple(0, 4, 7));
        assert!(!index.remove_triple(0, 4, 8));
        assert_eq!(index.triples_count(), 18);
    }

    #[test]
    fn test_add_remove_restores_structure() {
        let mut index = spo_index_with_three();
        let before_count = index.triples_count();
        let before_stats = index.stats();

        index.add_triple(9, 9, 9);
        index.remove_triple(9, 9, 9);

        let after_stats = index.stats();
        assert_eq!(index.triples_count(), before_count);
        assert_eq!(after_stats.head_keys, before_stats.head_keys);
        assert_eq!(after_stats.pair_keys, before_stats.pair_keys);
    }

    #[test]
    fn test_permutation_equivalence() {
        let triples = [
            (1, 2, 3),
            (1, 2, 4),
            (1, 5, 3),
            (2, 2, 3),
            (7, 1, 9),
            (3, 8, 2),
        ];

        let mut sets = Vec::new();
        for ordering in TripleOrdering::all() {
            let mut index = TripleIndex::new(ordering);
            for (s, p, o) in triples {
                index.add_triple(s, p, o);
            }
            assert_eq!(index.triples_count(), triples.len() as u64);
            sets.push(index.iter().collect::<BTreeSet<_>>());
        }

        for set in &sets[1..] {
            assert_eq!(set, &sets[0]);
        }
    }

    #[test]
    fn test_with_tuning_rejects_zero_capacity() {
        let tuning = TuningConfig::default().with_terminal_capacity(0);
        match TripleIndex::with_tuning(TripleOrdering::Spo, tuning) {
            Err(HexError::InvalidConfig { .. }) => {}
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_with_tuning_small_capacities_still_grow() {
        let tuning = TuningConfig::new(2, 2, 2);
        let mut index = TripleIndex::with_tuning(TripleOrdering::Spo, tuning).unwrap();
        for s in 0..20 {
            for p in 0..3 {
                index.add_triple(s, p, 1);
            }
        }
        assert_eq!(index.triples_count(), 60);
    }

    #[test]
    fn test_contains_triple() {
        let index = spo_index_with_three();
        assert!(index.contains_triple(1, 2, 4));
        assert!(!index.contains_triple(4, 2, 1));
        assert!(!index.contains_triple(1, 2, 5));
    }

    #[test]
    fn test_display_dump_nests_levels() {
        let index = spo_index_with_three();
        let dump = index.to_string();
        assert!(dump.contains("ordering=spo"));
        assert!(dump.contains("triples=3"));
        assert!(dump.contains("(3, 4)"));
    }

    #[test]
    fn test_stats_to_json() {
        let index = spo_index_with_three();
        let stats = index.stats();
        assert_eq!(stats.triples, 3);
        assert_eq!(stats.head_keys, 1);
        assert_eq!(stats.pair_keys, 2);
        assert!(stats.memory_bytes > 0);

        let json = stats.to_json().unwrap();
        assert!(json.contains("\"ordering\""));
        assert!(json.contains("\"triples\": 3"));
    }

    // Counts identity: the index count always equals the sum over levels.
    #[test]
    fn test_counts_identity_under_churn() {
        let mut index = TripleIndex::new(TripleOrdering::Pos);
        let mut expected = BTreeSet::new();

        for i in 0..50i64 {
            let triple = (i % 7, i % 5, i % 11);
            index.add_triple(triple.0, triple.1, triple.2);
            expected.insert(triple);
            assert_eq!(index.triples_count(), expected.len() as u64);
        }
        for i in (0..50i64).rev().step_by(2) {
            let triple = (i % 7, i % 5, i % 11);
            if index.remove_triple(triple.0, triple.1, triple.2) {
                expected.remove(&triple);
            }
            assert_eq!(index.triples_count(), expected.len() as u64);
        }
    }
}
