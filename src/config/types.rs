// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tuning configuration types.

use crate::error::{HexError, HexResult};
use crate::index::{HEAD_INITIAL_CAPACITY, TERMINAL_INITIAL_CAPACITY, VECTOR_INITIAL_CAPACITY};
use serde::{Deserialize, Serialize};

/// Initial capacities for the three index levels.
///
/// Each capacity is also the shrink floor of its level. Defaults mirror the
/// expected fan-out: the outermost level is allocated largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    /// Initial Head entry capacity.
    pub head_capacity: usize,

    /// Initial capacity of each newly created Vector.
    pub vector_capacity: usize,

    /// Initial capacity of each newly created Terminal.
    pub terminal_capacity: usize,
}

impl TuningConfig {
    /// Explicit capacities for all three levels.
    pub fn new(head_capacity: usize, vector_capacity: usize, terminal_capacity: usize) -> Self {
        TuningConfig {
            head_capacity,
            vector_capacity,
            terminal_capacity,
        }
    }

    pub fn with_head_capacity(mut self, capacity: usize) -> Self {
        self.head_capacity = capacity;
        self
    }

    pub fn with_vector_capacity(mut self, capacity: usize) -> Self {
        self.vector_capacity = capacity;
        self
    }

    pub fn with_terminal_capacity(mut self, capacity: usize) -> Self {
        self.terminal_capacity = capacity;
        self
    }

    /// Reject configurations no level could operate with.
    ///
    /// ## Output
    /// - `Ok(())`: all capacities usable
    /// - `Err(HexError::InvalidConfig)`: a capacity was zero
    pub fn validate(&self) -> HexResult<()> {
        if self.head_capacity == 0 {
            return Err(HexError::InvalidConfig {
                reason: "head_capacity must be greater than zero".to_string(),
            });
        }
        if self.vector_capacity == 0 {
            return Err(HexError::InvalidConfig {
                reason: "vector_capacity must be greater than zero".to_string(),
            });
        }
        if self.terminal_capacity == 0 {
            return Err(HexError::InvalidConfig {
                reason: "terminal_capacity must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        TuningConfig {
            head_capacity: HEAD_INITIAL_CAPACITY,
            vector_capacity: VECTOR_INITIAL_CAPACITY,
            terminal_capacity: TERMINAL_INITIAL_CAPACITY,
        }
    }
}
