/// Receive buffer with a consumption cursor
///
/// New chunks are appended at the end; parsing consumes from the front by
/// advancing `pos`. Consumed bytes are kept in place for the lifetime of
/// one message (so slices handed to callbacks stay cheap) and the storage
/// is released wholesale by `clear` when the message is done.
pub struct Buffer {
    data: Vec<u8>,
    pos: usize,
}

impl Buffer {
    pub fn new() -> Buffer {
        Buffer {
            data: Vec::new(),
            pos: 0,
        }
    }

    /// Append a chunk of freshly received bytes.
    ///
    /// Chunk sizes are arbitrary: one byte or a whole message are equally
    /// fine. Running out of memory aborts, as it does for any `Vec`.
    pub fn append(&mut self, chunk: &[u8]) {
        self.data.extend_from_slice(chunk);
    }

    /// Total bytes held, consumed or not.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Number of bytes not yet consumed.
    pub fn available(&self) -> usize {
        debug_assert!(self.pos <= self.data.len());
        self.data.len() - self.pos
    }

    /// Consume the next `n` buffered bytes and return them.
    pub fn take(&mut self, n: usize) -> &[u8] {
        assert!(n <= self.available());
        let start = self.pos;
        self.pos += n;
        &self.data[start..self.pos]
    }

    /// Scan for the next newline-terminated line.
    ///
    /// Returns `None` when no `\n` is buffered yet; the cursor is left
    /// alone and the same bytes are re-scanned once more arrive. When a
    /// line is found the cursor moves past the terminator immediately,
    /// before the line is interpreted, so a line that later turns out
    /// malformed is never scanned twice.
    ///
    /// Trailing `\r`s before the `\n` are stripped, as are stray `\r`s at
    /// the start of the line. The header-terminating `\r\n` line therefore
    /// comes out as an empty slice.
    pub fn next_line(&mut self) -> Option<&[u8]> {
        let nl = match self.data[self.pos..].iter().position(|&b| b == b'\n') {
            Some(x) => x,
            None => return None,
        };
        let mut start = self.pos;
        let mut end = self.pos + nl;
        self.pos = end + 1;
        while end > start && self.data[end - 1] == b'\r' {
            end -= 1;
        }
        while start < end && self.data[start] == b'\r' {
            start += 1;
        }
        Some(&self.data[start..end])
    }

    /// Drop all buffered bytes and release the storage.
    pub fn clear(&mut self) {
        self.data = Vec::new();
        self.pos = 0;
    }
}
