//! An incremental HTTP/1.x request parser that does no I/O of its own.
//!
//! The embedding application owns the transport. Whenever it has read some
//! bytes, in whatever sizes they happened to arrive, it hands them to
//! `Parser::process` and receives parse events (method, path, headers,
//! body chunks, completion) through the `Handler` implementation it
//! supplied at construction. Feeding one byte at a time and feeding the whole
//! message at once produce the same events.
//!
//! Only fixed `Content-Length` bodies are supported. Chunked
//! transfer-encoding, cookie decomposition and multipart bodies are out
//! of scope (see the reserved `Handler` methods).
#[macro_use] extern crate quick_error;
#[macro_use] extern crate log;
#[cfg(test)] #[macro_use] extern crate matches;

mod body;
mod buffer;
mod error;
mod handler;
mod headers;
mod parser;
mod query;
mod request;

pub use error::ParseError;
pub use handler::Handler;
pub use parser::{Parser, Phase};
pub use query::split_query;

/// Version tag of the parsing engine, as a `0x00MMmmpp` integer.
///
/// Embedders that pin behavior against a specific engine revision can
/// compare this against the version they were developed for.
pub const VERSION: u32 = 0x0000_0100;

/// Returns `VERSION`. Kept as a function for embedders that probe the
/// engine at run time rather than at compile time.
pub fn version() -> u32 {
    VERSION
}
