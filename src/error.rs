use std::error::Error;
use std::str::Utf8Error;
use std::num::ParseIntError;


quick_error!{
    /// Error returned from `Parser::process` on malformed peer input
    ///
    /// Note, you should not make an exhaustive match over the enum values.
    /// More errors will be added at will.
    ///
    /// All of these describe bytes received from the network, never misuse
    /// of the parser itself. Misuse (feeding an empty chunk, feeding a
    /// finished parser) panics instead.
    #[derive(Debug)]
    pub enum ParseError {
        BadRequestLine {
            description("request line does not contain \
                         method, path and version")
        }
        BadHeader {
            description("header line without a `:` separator")
        }
        BadContentLength(err: ParseIntError) {
            from()
            description("error parsing `Content-Length` header")
            display(me) -> ("{}: {}", me.description(), err)
        }
        DuplicateContentLength {
            description("duplicate `Content-Length` header in request")
        }
        BadUtf8(err: Utf8Error) {
            from()
            description("bad utf8 in request line or headers")
            display(me) -> ("{}: {}", me.description(), err)
        }
    }
}
