//! Newline-chunked output stream

use crate::error::ArtifactError;
use std::io::Write;
use tracing::debug;

/// Append-only sink for handler status chunks.
///
/// Each chunk is written as one newline-terminated unit and flushed,
/// so the caller observes chunks in write order. The sink is local to
/// one request lifecycle.
pub struct OutputStream<'a> {
    sink: &'a mut dyn Write,
}

impl<'a> OutputStream<'a> {
    /// Wrap a writer as a chunk stream
    pub fn new(sink: &'a mut dyn Write) -> Self {
        Self { sink }
    }

    /// Write one newline-terminated chunk
    pub fn write_chunk(&mut self, content: &str) -> Result<(), ArtifactError> {
        debug!("writing chunk ({} bytes)", content.len());
        writeln!(self.sink, "{}", content)?;
        self.sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunks_are_newline_terminated() {
        let mut sink = Vec::new();
        let mut stream = OutputStream::new(&mut sink);

        stream.write_chunk("first").unwrap();
        stream.write_chunk("second\nline").unwrap();

        assert_eq!(String::from_utf8(sink).unwrap(), "first\nsecond\nline\n");
    }
}
