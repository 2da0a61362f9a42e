// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities for the airq workspace.
//!
//! Designed for development and testing only, not for production code.
//!
//! # Key Types
//!
//! - [`ManualTimer`]: simulated clock; every sleep completes immediately and
//!   advances virtual time by the requested duration
//! - [`ScriptedSource`]: a [`RandomSource`](airq_monitor::RandomSource) that
//!   replays a fixed list of values
//! - [`FailingWriter`]: a writer that accepts N lines and then errors
//!
//! The [`helpers`] and [`stats`] modules hold assertions on output lines and
//! the statistical checks used for uniformity and independence tests.
//!
//! ```rust
//! use airq_runtime::Timer;
//! use airq_test_utils::ManualTimer;
//! use std::time::Duration;
//!
//! let timer = ManualTimer::new();
//! drop(timer.sleep_future(Duration::from_secs(1)));
//! assert_eq!(timer.now(), Duration::from_secs(1));
//! ```

pub mod failing_writer;
pub mod helpers;
pub mod manual_timer;
pub mod scripted_source;
pub mod stats;

pub use self::failing_writer::FailingWriter;
pub use self::manual_timer::ManualTimer;
pub use self::scripted_source::ScriptedSource;
