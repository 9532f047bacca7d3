// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Statistical aggregation over recorded metrics.

use crate::metrics::types::Metric;
use serde::Serialize;
use std::cmp::Ordering;

/// Summary statistics for one metric name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub name: String,
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p95: f64,
    pub p99: f64,
}

/// Aggregate all samples of `name` from a metrics slice.
///
/// ## Input
/// - `name`: metric name to select
/// - `metrics`: samples, any mixture of names
///
/// ## Output
/// - `Some(MetricSummary)`: at least one sample matched
/// - `None`: no samples with this name
///
/// ## Performance
/// - O(n log n) for the percentile sort
pub fn aggregate(name: &str, metrics: &[Metric]) -> Option<MetricSummary> {
    let mut values: Vec<f64> = metrics
        .iter()
        .filter(|metric| metric.name == name)
        .map(|metric| metric.value)
        .collect();
    if values.is_empty() {
        return None;
    }

    values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let count = values.len();
    let sum: f64 = values.iter().sum();

    Some(MetricSummary {
        name: name.to_string(),
        count,
        min: values[0],
        max: values[count - 1],
        mean: sum / count as f64,
        p50: percentile(&values, 50.0),
        p95: percentile(&values, 95.0),
        p99: percentile(&values, 99.0),
    })
}

// Nearest-rank percentile over an ascending slice.
fn percentile(sorted: &[f64], pct: f64) -> f64 {
    let rank = ((pct / 100.0) * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}
