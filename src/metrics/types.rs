// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Metric value types.

use serde::Serialize;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Measurement unit of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Count,
    Bytes,
    Microseconds,
    Percent,
}

impl MetricUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricUnit::Count => "count",
            MetricUnit::Bytes => "bytes",
            MetricUnit::Microseconds => "us",
            MetricUnit::Percent => "percent",
        }
    }
}

impl fmt::Display for MetricUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One recorded measurement.
///
/// ## Example Usage
///
/// ```rust
/// use hexastore::metrics::{Metric, MetricUnit};
///
/// let metric = Metric::new("index_memory", 4096.0, MetricUnit::Bytes)
///     .with_tag("ordering", "spo");
/// assert_eq!(metric.tag("ordering"), Some("spo"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Metric {
    /// Metric name.
    pub name: String,

    /// Measured value.
    pub value: f64,

    /// Unit of the value.
    pub unit: MetricUnit,

    /// Nanoseconds since the Unix epoch at recording time.
    pub timestamp_ns: u64,

    /// Dimension tags (key, value), in attachment order.
    pub tags: Vec<(String, String)>,
}

impl Metric {
    /// New metric stamped with the current time.
    pub fn new(name: &str, value: f64, unit: MetricUnit) -> Self {
        let timestamp_ns = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Metric {
            name: name.to_string(),
            value,
            unit,
            timestamp_ns,
            tags: Vec::new(),
        }
    }

    /// Attach a dimension tag.
    pub fn with_tag(mut self, key: &str, value: &str) -> Self {
        self.tags.push((key.to_string(), value.to_string()));
        self
    }

    /// Tag value by key.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}
