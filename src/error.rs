// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! Error types for hexastore operations.
//!
//! Provides structured error handling with detailed context for debugging.
//! Normal outcomes of index mutations (added / already present, removed /
//! not found) are reported through return values, never through errors.

use std::fmt;

/// Standard Result type for all hexastore operations.
pub type HexResult<T> = Result<T, HexError>;

/// Error types for hexastore operations.
#[derive(Debug, Clone)]
pub enum HexError {
    /// Ordering string does not name a permutation of (s, p, o).
    InvalidOrdering { value: String },

    /// Tuning configuration failed validation.
    InvalidConfig { reason: String },

    /// Tuning configuration file not found.
    ConfigNotFound { path: String },

    /// Tuning configuration file corrupted (TOML parse error).
    ConfigCorrupted { path: String, reason: String },

    /// I/O error during file operations.
    IoError { operation: String, reason: String },

    /// Serialization failed (JSON or TOML encoding).
    SerializationError { reason: String },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOrdering { value } => {
                write!(f, "Invalid ordering '{}': expected a permutation of 'spo'", value)
            }
            Self::InvalidConfig { reason } => {
                write!(f, "Invalid tuning configuration: {}", reason)
            }
            Self::ConfigNotFound { path } => {
                write!(f, "Tuning configuration not found: {}", path)
            }
            Self::ConfigCorrupted { path, reason } => {
                write!(f, "Tuning configuration '{}' corrupted: {}", path, reason)
            }
            Self::IoError { operation, reason } => {
                write!(f, "I/O error during '{}': {}", operation, reason)
            }
            Self::SerializationError { reason } => {
                write!(f, "Serialization failed: {}", reason)
            }
        }
    }
}

impl std::error::Error for HexError {}

// Convenience conversion from std::io::Error
impl From<std::io::Error> for HexError {
    fn from(err: std::io::Error) -> Self {
        HexError::IoError {
            operation: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}
