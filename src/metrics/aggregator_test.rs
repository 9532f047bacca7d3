// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for metric aggregation.

#[cfg(test)]
mod tests {
    use crate::metrics::aggregator::aggregate;
    use crate::metrics::types::{Metric, MetricUnit};

    fn samples(name: &str, values: &[f64]) -> Vec<Metric> {
        values
            .iter()
            .map(|&value| Metric::new(name, value, MetricUnit::Microseconds))
            .collect()
    }

    #[test]
    fn test_aggregate_empty() {
        assert!(aggregate("missing", &[]).is_none());
        let metrics = samples("other", &[1.0]);
        assert!(aggregate("missing", &metrics).is_none());
    }

    #[test]
    fn test_aggregate_single_sample() {
        let metrics = samples("latency", &[7.5]);
        let summary = aggregate("latency", &metrics).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.min, 7.5);
        assert_eq!(summary.max, 7.5);
        assert_eq!(summary.mean, 7.5);
        assert_eq!(summary.p50, 7.5);
        assert_eq!(summary.p99, 7.5);
    }

    #[test]
    fn test_aggregate_percentiles() {
        let values: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let metrics = samples("latency", &values);

        let summary = aggregate("latency", &metrics).unwrap();
        assert_eq!(summary.count, 100);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 100.0);
        assert_eq!(summary.mean, 50.5);
        assert_eq!(summary.p50, 50.0);
        assert_eq!(summary.p95, 95.0);
        assert_eq!(summary.p99, 99.0);
    }

    #[test]
    fn test_aggregate_filters_by_name() {
        let mut metrics = samples("wanted", &[10.0, 20.0]);
        metrics.extend(samples("noise", &[1000.0]));

        let summary = aggregate("wanted", &metrics).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.max, 20.0);
    }

    #[test]
    fn test_aggregate_unsorted_input() {
        let metrics = samples("latency", &[30.0, 10.0, 20.0]);
        let summary = aggregate("latency", &metrics).unwrap();
        assert_eq!(summary.min, 10.0);
        assert_eq!(summary.max, 30.0);
        assert_eq!(summary.p50, 20.0);
    }
}
