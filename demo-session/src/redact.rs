//! A `MakeWriter` that masks PII in each formatted log line before it is written

use std::io::{self, Write};
use std::sync::Arc;
use tracing_subscriber::fmt::MakeWriter;

use session_auth::RedactingFormatter;

pub(crate) struct RedactingMakeWriter<M> {
    inner: M,
    formatter: Arc<RedactingFormatter>,
}

impl<M> RedactingMakeWriter<M> {
    pub(crate) fn new(inner: M, formatter: RedactingFormatter) -> Self {
        Self {
            inner,
            formatter: Arc::new(formatter),
        }
    }
}

impl<'a, M: MakeWriter<'a>> MakeWriter<'a> for RedactingMakeWriter<M> {
    type Writer = RedactingWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        RedactingWriter {
            inner: self.inner.make_writer(),
            formatter: Arc::clone(&self.formatter),
            buf: Vec::new(),
        }
    }
}

/// Buffers one event and writes it redacted when dropped
pub(crate) struct RedactingWriter<W: Write> {
    inner: W,
    formatter: Arc<RedactingFormatter>,
    buf: Vec<u8>,
}

impl<W: Write> Write for RedactingWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<W: Write> Drop for RedactingWriter<W> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let redacted = self.formatter.format(&line);
        // Nowhere left to report a failed log write
        let _ = self.inner.write_all(redacted.as_bytes());
        let _ = self.inner.flush();
    }
}
