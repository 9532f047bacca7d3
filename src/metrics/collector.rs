// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Global metrics collector.
//!
//! A process-wide singleton buffering recorded metrics in memory until a
//! consumer drains them. Recording is O(1): lock plus push.

use crate::metrics::types::Metric;
use once_cell::sync::Lazy;
use std::mem;
use std::sync::{Arc, RwLock};

static GLOBAL: Lazy<Arc<MetricsCollector>> = Lazy::new(|| Arc::new(MetricsCollector::new()));

/// In-memory metrics buffer.
pub struct MetricsCollector {
    buffer: RwLock<Vec<Metric>>,
}

impl MetricsCollector {
    /// Fresh private collector. Most callers want [`global`](Self::global).
    pub fn new() -> Self {
        MetricsCollector {
            buffer: RwLock::new(Vec::new()),
        }
    }

    /// The process-wide collector instance.
    pub fn global() -> Arc<MetricsCollector> {
        Arc::clone(&GLOBAL)
    }

    /// Record a single metric.
    pub fn record(&self, metric: Metric) {
        self.buffer.write().unwrap().push(metric);
    }

    /// Record several metrics under one lock acquisition.
    pub fn record_batch(&self, metrics: Vec<Metric>) {
        self.buffer.write().unwrap().extend(metrics);
    }

    /// Number of buffered metrics.
    pub fn buffer_size(&self) -> usize {
        self.buffer.read().unwrap().len()
    }

    /// Take all buffered metrics, leaving the buffer empty.
    pub fn drain(&self) -> Vec<Metric> {
        mem::take(&mut *self.buffer.write().unwrap())
    }

    /// Discard all buffered metrics.
    pub fn clear(&self) {
        self.buffer.write().unwrap().clear();
    }
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self::new()
    }
}
