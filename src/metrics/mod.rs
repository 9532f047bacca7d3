// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Metrics infrastructure for hexastore observability.
//!
//! Provides lightweight in-process performance monitoring:
//! - **Types**: Metric values, units and tags
//! - **Collector**: Global singleton buffering recorded metrics
//! - **Aggregator**: Percentile and statistical calculations
//!
//! The index mutation path never touches the collector; per-index counters
//! are kept inline and published here on demand.
//!
//! ## Quick Start
//!
//! ```rust
//! use hexastore::metrics::{Metric, MetricUnit, MetricsCollector};
//!
//! let metric = Metric::new("iter_duration", 1250.0, MetricUnit::Microseconds)
//!     .with_tag("ordering", "spo");
//!
//! MetricsCollector::global().record(metric);
//! # MetricsCollector::global().clear();
//! ```
//!
//! ## Thread Safety
//!
//! - `MetricsCollector` uses `RwLock` for thread-safe access
//! - Multiple threads can record metrics concurrently
//! - Drains and clears are synchronized

pub mod aggregator;
pub mod collector;
pub mod types;

#[cfg(test)]
mod aggregator_test;
#[cfg(test)]
mod types_test;

// Re-export public API
pub use aggregator::{aggregate, MetricSummary};
pub use collector::MetricsCollector;
pub use types::{Metric, MetricUnit};

use crate::index::TripleIndex;

/// Publish an index's current shape to the global collector.
///
/// Records one gauge per stats dimension, all tagged with the index's
/// ordering so several permutations can share the collector.
pub fn publish_index_metrics(index: &TripleIndex) {
    let stats = index.stats();
    let collector = MetricsCollector::global();
    collector.record_batch(vec![
        Metric::new("index_triples", stats.triples as f64, MetricUnit::Count)
            .with_tag("ordering", &stats.ordering),
        Metric::new("index_head_keys", stats.head_keys as f64, MetricUnit::Count)
            .with_tag("ordering", &stats.ordering),
        Metric::new("index_pair_keys", stats.pair_keys as f64, MetricUnit::Count)
            .with_tag("ordering", &stats.ordering),
        Metric::new("index_memory", stats.memory_bytes as f64, MetricUnit::Bytes)
            .with_tag("ordering", &stats.ordering),
        Metric::new(
            "index_resizes",
            (stats.grows + stats.shrinks) as f64,
            MetricUnit::Count,
        )
        .with_tag("ordering", &stats.ordering),
    ]);
}
