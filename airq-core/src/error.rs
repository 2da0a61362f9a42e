// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for airq.
//!
//! A single root [`AirqError`] covers every failure mode of the poller. The
//! sampling path itself cannot fail; errors come from invalid input values,
//! invalid configuration, and the output stream.
//!
//! # Examples
//!
//! ```
//! use airq_core::{AirqError, Result};
//!
//! fn check_precision(precision: usize) -> Result<()> {
//!     if precision > 17 {
//!         return Err(AirqError::invalid_config("precision too large"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_precision(2).is_ok());
//! ```

use std::io;

/// Root error type for all airq operations
#[derive(Debug, thiserror::Error)]
pub enum AirqError {
    /// A value outside `[0, 100]` (or not finite) was offered as a measurement
    #[error("Measurement out of range [0, 100]: {value}")]
    OutOfRange {
        /// The rejected value
        value: f64,
    },

    /// Monitor configuration failed validation
    #[error("Invalid configuration: {context}")]
    InvalidConfig {
        /// What was wrong with the configuration
        context: String,
    },

    /// Writing or flushing a measurement line failed
    #[error("Output error: {0}")]
    Output(#[from] io::Error),
}

impl AirqError {
    /// Create a configuration error with the given context
    pub fn invalid_config(context: impl Into<String>) -> Self {
        Self::InvalidConfig {
            context: context.into(),
        }
    }

    /// Whether the reader of the output stream went away (e.g. `airq | head -n 3`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(err) if err.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Specialized `Result` type for airq operations
pub type Result<T> = std::result::Result<T, AirqError>;
