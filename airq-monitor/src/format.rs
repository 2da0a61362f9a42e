// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_core::Measurement;

/// Render one output line, without the trailing newline.
///
/// # Example
///
/// ```
/// use airq_core::Measurement;
/// use airq_monitor::format_line;
///
/// let line = format_line("Air Quality Index: ", Measurement::new(3.0).unwrap(), 2);
/// assert_eq!(line, "Air Quality Index: 3.00");
/// ```
pub fn format_line(label: &str, measurement: Measurement, precision: usize) -> String {
    format!("{label}{:.*}", precision, measurement.value())
}
