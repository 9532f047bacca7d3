// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! TOML persistence for tuning configurations.

use crate::config::types::TuningConfig;
use crate::error::{HexError, HexResult};
use std::fs;
use std::path::Path;

/// Load a tuning configuration from a TOML file.
///
/// ## Input
/// - `path`: configuration file path
///
/// ## Output
/// - `Ok(TuningConfig)`: parsed and validated configuration
/// - `Err(HexError::ConfigNotFound)`: file does not exist
/// - `Err(HexError::ConfigCorrupted)`: file is not valid TOML
/// - `Err(HexError::InvalidConfig)`: a capacity failed validation
///
/// ## Side Effects
/// - None (read-only)
pub fn load_tuning<P: AsRef<Path>>(path: P) -> HexResult<TuningConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(HexError::ConfigNotFound {
            path: path.display().to_string(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| HexError::IoError {
        operation: "read_tuning".to_string(),
        reason: e.to_string(),
    })?;

    let config: TuningConfig = toml::from_str(&content).map_err(|e| HexError::ConfigCorrupted {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    config.validate()?;
    Ok(config)
}

/// Write a tuning configuration as TOML.
///
/// ## Input
/// - `path`: destination file path (parent directory must exist)
/// - `config`: configuration to persist
///
/// ## Output
/// - `Ok(())`: file written
/// - `Err(HexError::InvalidConfig)`: configuration failed validation
/// - `Err(HexError)`: serialization or I/O failure
pub fn save_tuning<P: AsRef<Path>>(path: P, config: &TuningConfig) -> HexResult<()> {
    config.validate()?;

    let content = toml::to_string_pretty(config).map_err(|e| HexError::SerializationError {
        reason: e.to_string(),
    })?;

    fs::write(path.as_ref(), content).map_err(|e| HexError::IoError {
        operation: "write_tuning".to_string(),
        reason: e.to_string(),
    })
}

/// Check whether a tuning configuration file exists.
pub fn tuning_exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}
