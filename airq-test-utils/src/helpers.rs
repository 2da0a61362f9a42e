// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use airq_core::Measurement;

/// Split captured output into lines, panicking on invalid UTF-8.
pub fn output_lines(output: &[u8]) -> Vec<String> {
    std::str::from_utf8(output)
        .expect("monitor output must be UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}

/// Assert `line` is `label` followed by a decimal with exactly `precision`
/// fractional digits in `[0, 100]`, and return the parsed value.
pub fn parse_line(line: &str, label: &str, precision: usize) -> f64 {
    let value = line
        .strip_prefix(label)
        .unwrap_or_else(|| panic!("line {line:?} does not start with {label:?}"));

    match value.split_once('.') {
        Some((whole, fraction)) => {
            assert!(precision > 0, "unexpected fraction in {line:?}");
            assert!(!whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()));
            assert_eq!(fraction.len(), precision, "wrong precision in {line:?}");
            assert!(fraction.bytes().all(|b| b.is_ascii_digit()));
        }
        None => {
            assert_eq!(precision, 0, "missing fraction in {line:?}");
            assert!(value.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    let parsed: f64 = value
        .parse()
        .unwrap_or_else(|err| panic!("unparsable value in {line:?}: {err}"));
    assert!(
        Measurement::contains(parsed),
        "value out of range in {line:?}"
    );
    parsed
}
