//! Incremental line decoding for streamed provider responses.
//!
//! Provider streams arrive as arbitrary byte chunks over HTTP; SSE events and
//! NDJSON records are both line-delimited. The decoder buffers across chunk
//! boundaries and yields each complete line exactly once, in order.

/// Buffering line decoder. Bytes are split on `\n` before decoding so a
/// multi-byte UTF-8 sequence straddling a chunk boundary is never corrupted.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buffer: Vec<u8>,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk; returns every line completed by it. Trailing `\r` is
    /// stripped so CRLF streams decode the same as LF streams.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);
        let mut lines = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=pos).collect();
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            lines.push(String::from_utf8_lossy(&line).into_owned());
        }
        lines
    }

    /// Drain any unterminated final line once the stream is exhausted. Some
    /// servers omit the trailing newline on the last record.
    pub fn take_remainder(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let line = String::from_utf8_lossy(&self.buffer).into_owned();
        self.buffer.clear();
        Some(line)
    }
}

/// Extract the payload of an SSE `data:` line. Non-data lines (event names,
/// comments, blank keep-alives) return `None`.
pub fn data_payload(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("data:")?;
    Some(rest.strip_prefix(' ').unwrap_or(rest))
}
