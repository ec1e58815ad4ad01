use std::io::BufRead;

use crate::error::Result;

/// Events produced by a single blocking read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    /// A complete line, terminator stripped
    Line(String),
    /// A complete line that is not valid UTF-8
    Invalid(Vec<u8>),
    /// The stream has no more data
    EndOfFile,
}

/// Reads the user's choice one line at a time
#[derive(Debug, Default)]
pub struct LineReader {
    buffer: Vec<u8>,
    lines_read: usize,
}

impl LineReader {
    /// Create a new line reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Block until one line (or end of stream) is available
    ///
    /// A final line without a trailing newline is still returned as a line;
    /// only a read of zero bytes reports [`ReadEvent::EndOfFile`]. Lines
    /// that are not UTF-8 come back raw as [`ReadEvent::Invalid`].
    pub fn read_line<R: BufRead>(&mut self, reader: &mut R) -> Result<ReadEvent> {
        self.buffer.clear();

        if reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(ReadEvent::EndOfFile);
        }
        self.lines_read += 1;

        let line = strip_terminator(&self.buffer);
        match core::str::from_utf8(line) {
            Ok(line) => Ok(ReadEvent::Line(line.to_owned())),
            Err(_) => Ok(ReadEvent::Invalid(line.to_vec())),
        }
    }
}

/// Strip a trailing `\n`, and the `\r` before it if present
fn strip_terminator(bytes: &[u8]) -> &[u8] {
    match bytes {
        [rest @ .., b'\r', b'\n'] => rest,
        [rest @ .., b'\n'] => rest,
        _ => bytes,
    }
}
