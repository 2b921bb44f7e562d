//! Feeds a canned request through the parser in deliberately tiny chunks
//! and prints every event, to show what embedding the parser looks like
//! when the transport hands you bytes in awkward sizes.
//!
//! Run with `RUST_LOG=trace` to see the engine's own diagnostics too.
extern crate env_logger;
extern crate trickle_http;

use trickle_http::{Handler, Parser, split_query};

struct Dump;

impl Handler for Dump {
    fn on_method(&mut self, method: &str) {
        println!("method   {}", method);
    }
    fn on_path(&mut self, path: &str) {
        println!("path     {}", path);
    }
    fn on_params(&mut self, params: &str) {
        println!("params   {}", params);
        split_query(params, |key, value| {
            println!("  param  {} = {}", key, value);
        });
    }
    fn on_version(&mut self, version: &str) {
        println!("version  {}", version);
    }
    fn on_header(&mut self, key: &str, value: &str) {
        println!("header   {}: {}", key, value);
    }
    fn on_host(&mut self, host: &str, port: u16) {
        println!("host     {} (port {})", host, port);
    }
    fn on_content_length(&mut self, length: u64) {
        println!("expects  {} body bytes", length);
    }
    fn on_data(&mut self, data: &[u8], left: u64) {
        println!("data     {:?} ({} more expected)",
                 String::from_utf8_lossy(data), left);
    }
    fn on_complete(&mut self) {
        println!("complete");
    }
}

fn main() {
    env_logger::init().expect("init logging");

    let request: &[u8] =
        b"POST /submit?kind=demo&v=1 HTTP/1.1\r\n\
          Host: localhost:8080\r\n\
          Content-Length: 11\r\n\
          \r\n\
          hello world";

    let mut parser = Parser::new(Dump);
    for chunk in request.chunks(7) {
        let more = parser.process(chunk).expect("well-formed request");
        if !more {
            break;
        }
    }
    assert!(parser.is_done());
}
