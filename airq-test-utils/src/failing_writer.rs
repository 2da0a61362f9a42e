// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::io::{self, Write};

/// Writer that accepts a number of lines, then fails every write with `kind`.
#[derive(Debug)]
pub struct FailingWriter {
    accepted: Vec<u8>,
    lines_left: usize,
    kind: io::ErrorKind,
}

impl FailingWriter {
    pub fn new(lines_before_failure: usize, kind: io::ErrorKind) -> Self {
        Self {
            accepted: Vec::new(),
            lines_left: lines_before_failure,
            kind,
        }
    }

    /// Bytes written before the failure started.
    pub fn accepted(&self) -> &[u8] {
        &self.accepted
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.lines_left == 0 {
            return Err(io::Error::new(self.kind, "injected write failure"));
        }
        // Accept up to and including the last permitted newline
        let cut = buf
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .nth(self.lines_left - 1)
            .map_or(buf.len(), |(index, _)| index + 1);

        let accepted = &buf[..cut];
        self.lines_left -= accepted.iter().filter(|&&b| b == b'\n').count();
        self.accepted.extend_from_slice(accepted);
        Ok(cut)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
