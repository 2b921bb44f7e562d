use std::str::from_utf8;

use body::BodyState;
use buffer::Buffer;
use error::ParseError;
use handler::Handler;
use headers;
use request;


/// Where the parser currently is in the request lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the request line. The initial state.
    Request,
    /// Request line seen, reading header lines.
    Headers,
    /// Headers done, draining a fixed-length body.
    Data,
    /// Message complete. Feeding more input is a programmer error,
    /// `reset` first.
    Done,
}

/// The incremental request parser
///
/// One instance per logical byte stream. The handler is supplied once at
/// construction and kept across `reset`, so a keep-alive connection can
/// reuse the same instance for consecutive requests.
pub struct Parser<H: Handler> {
    handler: H,
    buf: Buffer,
    body: BodyState,
    phase: Phase,
}

impl<H: Handler> Parser<H> {
    pub fn new(handler: H) -> Parser<H> {
        Parser {
            handler: handler,
            buf: Buffer::new(),
            body: BodyState::new(),
            phase: Phase::Request,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Consume the parser and hand the event sink back.
    pub fn into_handler(self) -> H {
        self.handler
    }

    /// Make the instance ready for the next request on the same stream.
    ///
    /// Buffered bytes are released and the phase and body counter go back
    /// to their initial values; the handler is kept. This is also the only
    /// way out after `process` has returned an error.
    pub fn reset(&mut self) {
        debug!("parser reset");
        self.buf.clear();
        self.body.reset();
        self.phase = Phase::Request;
    }

    /// Feed a chunk of received bytes, firing events as they complete.
    ///
    /// Returns whether more input is expected: `Ok(false)` exactly when
    /// the message is done. Chunk sizes are arbitrary and do not affect
    /// which events fire, only how the body is sliced.
    ///
    /// An `Err` means the peer sent something this parser cannot
    /// interpret; the connection should be dropped (typically with a
    /// 400-class response). The instance is then unusable until `reset`.
    ///
    /// # Panics
    ///
    /// Feeding an empty chunk, or feeding a parser whose phase is `Done`,
    /// is a contract violation and panics.
    pub fn process(&mut self, chunk: &[u8]) -> Result<bool, ParseError> {
        assert!(!chunk.is_empty(), "process() needs a non-empty chunk");
        assert!(self.phase != Phase::Done,
                "process() called on a finished parser, reset() it first");

        if self.phase == Phase::Data {
            // Body bytes are opaque, they bypass the line buffer entirely.
            let len = self.body.accept(chunk.len());
            let left = self.body.advance(len);
            trace!("delivering {} body bytes, {} still expected", len, left);
            self.handler.on_data(&chunk[..len], left);
            if self.body.is_drained() {
                debug!("request complete");
                self.handler.on_complete();
                self.phase = Phase::Done;
            }
            return Ok(self.phase != Phase::Done);
        }

        self.buf.append(chunk);
        while self.phase == Phase::Request || self.phase == Phase::Headers {
            let line = match self.buf.next_line() {
                Some(line) => line,
                None => break,  // incomplete line, wait for more bytes
            };
            let line = from_utf8(line)?;
            trace!("scanned line {:?}", line);
            match self.phase {
                Phase::Request => {
                    request::parse(line, &mut self.handler)?;
                    self.phase = Phase::Headers;
                }
                Phase::Headers => {
                    if line.is_empty() {
                        self.end_of_headers();
                    } else {
                        headers::parse(line, &mut self.body,
                                       &mut self.handler)?;
                    }
                }
                Phase::Data | Phase::Done => unreachable!(),
            }
        }
        Ok(self.phase != Phase::Done)
    }

    // The empty line after the headers. Either the message has no body
    // and is complete right here, or we switch to counted body mode and
    // flush whatever body bytes arrived bundled with the header chunk.
    fn end_of_headers(&mut self) {
        if self.body.is_drained() {
            debug!("end of headers, no body expected");
            self.handler.on_complete();
            self.phase = Phase::Done;
            return;
        }
        debug!("end of headers, {} body bytes expected", self.body.pending());
        self.phase = Phase::Data;
        let len = self.body.accept(self.buf.available());
        if len > 0 {
            let left = self.body.advance(len);
            let data = self.buf.take(len);
            self.handler.on_data(data, left);
        }
        if self.body.is_drained() {
            debug!("request complete");
            self.handler.on_complete();
            self.phase = Phase::Done;
        }
    }
}
