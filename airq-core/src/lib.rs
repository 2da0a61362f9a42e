// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
//! Core types shared by every airq crate.
//!
//! - [`Measurement`]: one simulated air-quality reading, always within `[0, 100]`
//! - [`AirqError`] and the crate-wide [`Result`] alias
//! - [`CancellationToken`]: cooperative stop signal for the monitor loop

pub mod cancellation_token;
pub mod error;
pub mod measurement;

pub use self::cancellation_token::{CancellationToken, Cancelled};
pub use self::error::{AirqError, Result};
pub use self::measurement::Measurement;
