// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Tuning configuration for index level capacities.
//!
//! Capacities control the initial allocation of each level's sorted array
//! and double as the floor the shrink policy never goes below. Deployments
//! with known fan-out characteristics tune them via a TOML file:
//!
//! ```toml
//! head_capacity = 4096
//! vector_capacity = 64
//! terminal_capacity = 32
//! ```

pub mod loader;
pub mod types;


// Re-export public API
pub use loader::{load_tuning, save_tuning, tuning_exists};
pub use types::TuningConfig;
