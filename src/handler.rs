/// The event sink of the parser
///
/// Every method has an empty default body, so an implementation overrides
/// only the events it cares about. All methods are invoked synchronously,
/// inside the `Parser::process` call that produced the triggering bytes,
/// and in strict protocol order: method, path, params, version, each
/// header in wire order (with the host / content-length side-events right
/// after their owning header), body chunks in arrival order, completion.
///
/// Borrowed payloads (`&str`, `&[u8]`) point into the parser's receive
/// buffer or into the caller's input chunk and are only valid for the
/// duration of the callback. Copy anything you need to keep.
pub trait Handler {
    /// The request method (`GET`, `POST`, ...), verbatim.
    fn on_method(&mut self, _method: &str) {}

    /// The request path, with the query string (if any) already split off.
    fn on_path(&mut self, _path: &str) {}

    /// The query string, without the leading `?`. Not emitted when the
    /// path has no `?`. Use `split_query` to break it into pairs.
    fn on_params(&mut self, _params: &str) {}

    /// The protocol version token, e.g. `HTTP/1.1`.
    fn on_version(&mut self, _version: &str) {}

    /// One header field, key and value trimmed of surrounding
    /// spaces and tabs. Fired for every header, including the
    /// specially-handled `Host` and `Content-Length`.
    fn on_header(&mut self, _key: &str, _value: &str) {}

    /// Reserved for form-encoded body decomposition. Never invoked.
    fn on_form_data(&mut self, _key: &str, _value: &str) {}

    /// Reserved for cookie decomposition. Never invoked.
    fn on_cookie(&mut self, _key: &str, _value: &str) {}

    /// The `Host` header, split into hostname and port. A missing or
    /// unparsable port is reported as `0`.
    fn on_host(&mut self, _host: &str, _port: u16) {}

    /// The parsed value of the `Content-Length` header.
    fn on_content_length(&mut self, _length: u64) {}

    /// A slice of the request body. `left` is the number of body bytes
    /// still expected after this slice. Chunk boundaries follow the
    /// arrival of the input, so any split of the same request produces
    /// the same concatenated body.
    fn on_data(&mut self, _data: &[u8], _left: u64) {}

    /// The message is complete. Fired exactly once, in the same
    /// `process` call that consumed the last required byte.
    fn on_complete(&mut self) {}
}
