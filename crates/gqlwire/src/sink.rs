//! Append-only byte destinations for encoded output.

use std::io;

use crate::Result;

/// A byte-accepting destination. Encoders only ever append; they never
/// seek, read or close the sink.
///
/// Appending cannot fail from the encoder's point of view. Sinks backed by
/// fallible I/O record the failure and report it when the caller finishes
/// with them (see [`IoSink::finish`]).
pub trait Sink {
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

impl Sink for Vec<u8> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        self.extend_from_slice(bytes);
    }
}

/// Bridges an [`io::Write`] into a [`Sink`].
///
/// The first write error is kept and every later write is dropped, so the
/// destination never receives output past a gap.
pub struct IoSink<W: io::Write> {
    inner: W,
    error: Option<io::Error>,
    written: u64,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            error: None,
            written: 0,
        }
    }

    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    pub fn has_failed(&self) -> bool {
        self.error.is_some()
    }

    /// Flush the writer and hand it back, or return the first write error.
    pub fn finish(mut self) -> Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err.into());
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn write_bytes(&mut self, bytes: &[u8]) {
        if self.error.is_some() {
            return;
        }
        match self.inner.write_all(bytes) {
            Ok(()) => self.written += bytes.len() as u64,
            Err(err) => {
                tracing::debug!(error = %err, written = self.written, "sink write failed, dropping further output");
                self.error = Some(err);
            }
        }
    }
}
