// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_core::{AirqError, Measurement};
use std::io;

#[test]
fn test_error_display() {
    let err = AirqError::invalid_config("precision 30 exceeds 17");
    assert_eq!(
        err.to_string(),
        "Invalid configuration: precision 30 exceeds 17"
    );

    let err = AirqError::OutOfRange { value: 120.5 };
    assert_eq!(err.to_string(), "Measurement out of range [0, 100]: 120.5");

    let err = AirqError::from(io::Error::other("disk gone"));
    assert_eq!(err.to_string(), "Output error: disk gone");
}

#[test]
fn test_io_error_converts_with_question_mark() {
    fn write_line() -> airq_core::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))?;
        Ok(())
    }

    let err = write_line().unwrap_err();
    assert!(matches!(err, AirqError::Output(_)));
    assert!(err.is_broken_pipe());
}

#[test]
fn test_is_broken_pipe_only_for_pipe_errors() {
    assert!(!AirqError::from(io::Error::other("x")).is_broken_pipe());
    assert!(!AirqError::from(io::Error::from(io::ErrorKind::Interrupted)).is_broken_pipe());
    assert!(!AirqError::invalid_config("x").is_broken_pipe());
    assert!(!Measurement::new(-1.0).unwrap_err().is_broken_pipe());
}
