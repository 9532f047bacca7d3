// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tests for metric value types.

#[cfg(test)]
mod tests {
    use crate::metrics::types::{Metric, MetricUnit};

    #[test]
    fn test_new_stamps_timestamp() {
        let metric = Metric::new("test", 1.0, MetricUnit::Count);
        assert!(metric.timestamp_ns > 0);
        assert_eq!(metric.name, "test");
        assert_eq!(metric.value, 1.0);
    }

    #[test]
    fn test_with_tag() {
        let metric = Metric::new("test", 1.0, MetricUnit::Bytes)
            .with_tag("ordering", "spo")
            .with_tag("level", "head");

        assert_eq!(metric.tag("ordering"), Some("spo"));
        assert_eq!(metric.tag("level"), Some("head"));
        assert_eq!(metric.tag("missing"), None);
    }

    #[test]
    fn test_unit_display() {
        assert_eq!(MetricUnit::Count.to_string(), "count");
        assert_eq!(MetricUnit::Bytes.to_string(), "bytes");
        assert_eq!(MetricUnit::Microseconds.to_string(), "us");
        assert_eq!(MetricUnit::Percent.to_string(), "percent");
    }
}
