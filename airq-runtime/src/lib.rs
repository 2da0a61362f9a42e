// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Clock abstraction for airq.
//!
//! The monitor loop never calls a sleep function directly. It asks a [`Timer`]
//! for a sleep future, which lets production code run on Tokio's clock and tests
//! substitute a simulated one.

pub mod impls;
pub mod timer;

pub use self::timer::Timer;

#[cfg(feature = "runtime-tokio")]
pub use self::impls::tokio::TokioTimer;
