use body::BodyState;
use error::ParseError;
use handler::Handler;


#[inline(always)]
fn is_content_length(val: &str) -> bool {
    if val.len() != "content-length".len() {
        return false;
    }
    for (idx, ch) in val.bytes().enumerate() {
        if b"content-length"[idx] != ch.to_ascii_lowercase() {
            return false;
        }
    }
    return true;
}

#[inline(always)]
fn is_host(val: &str) -> bool {
    if val.len() != "host".len() {
        return false;
    }
    for (idx, ch) in val.bytes().enumerate() {
        if b"host"[idx] != ch.to_ascii_lowercase() {
            return false;
        }
    }
    return true;
}

fn is_pad(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Parse one non-empty header line and report it to the sink
///
/// The line is split at the first `:`; both sides are stripped of
/// surrounding spaces and tabs (whitespace inside the value survives).
/// `Content-Length` additionally arms the body counter and `Host` is
/// split into hostname and port.
pub fn parse<H: Handler>(line: &str, body: &mut BodyState, sink: &mut H)
    -> Result<(), ParseError>
{
    let colon = match line.find(':') {
        Some(x) => x,
        None => return Err(ParseError::BadHeader),
    };
    let key = line[..colon].trim_matches(is_pad);
    let value = line[colon + 1..].trim_matches(is_pad);

    sink.on_header(key, value);

    if is_content_length(key) {
        if !body.is_drained() {
            return Err(ParseError::DuplicateContentLength);
        }
        let length = value.parse()?;
        body.expect(length);
        sink.on_content_length(length);
    } else if is_host(key) {
        // the host value may carry the port too
        match value.find(':') {
            Some(x) => {
                let port = value[x + 1..].parse().unwrap_or(0);
                sink.on_host(&value[..x], port);
            }
            None => sink.on_host(value, 0),
        }
    }
    Ok(())
}


#[cfg(test)]
mod test {
    use body::BodyState;
    use error::ParseError;
    use handler::Handler;
    use super::{parse, is_content_length, is_host};

    #[derive(Default)]
    struct Sink {
        header: Option<(String, String)>,
        host: Option<(String, u16)>,
        content_length: Option<u64>,
    }

    impl Handler for Sink {
        fn on_header(&mut self, key: &str, value: &str) {
            self.header = Some((key.to_string(), value.to_string()));
        }
        fn on_host(&mut self, host: &str, port: u16) {
            self.host = Some((host.to_string(), port));
        }
        fn on_content_length(&mut self, length: u64) {
            self.content_length = Some(length);
        }
    }

    fn run(line: &str) -> (Sink, BodyState) {
        let mut sink = Sink::default();
        let mut body = BodyState::new();
        parse(line, &mut body, &mut sink).unwrap();
        (sink, body)
    }

    #[test]
    fn test_content_len() {
        assert!(is_content_length("Content-Length"));
        assert!(is_content_length("content-length"));
        assert!(is_content_length("CONTENT-length"));
        assert!(is_content_length("CONTENT-LENGTH"));
        assert!(!is_content_length("Content-Range"));
    }

    #[test]
    fn test_host() {
        assert!(is_host("Host"));
        assert!(is_host("host"));
        assert!(is_host("HOST"));
        assert!(!is_host("X-Host"));
    }

    #[test]
    fn plain_header() {
        let (sink, _) = run("Accept: text/html");
        assert_eq!(sink.header.unwrap(),
                   ("Accept".to_string(), "text/html".to_string()));
    }

    #[test]
    fn pad_whitespace_is_trimmed() {
        let (sink, _) = run("  X-Foo  :   bar  ");
        assert_eq!(sink.header.unwrap(),
                   ("X-Foo".to_string(), "bar".to_string()));
    }

    #[test]
    fn inner_whitespace_survives() {
        let (sink, _) = run("User-Agent: two  words\there");
        assert_eq!(sink.header.unwrap().1, "two  words\there");
    }

    #[test]
    fn content_length_arms_the_counter() {
        let (sink, body) = run("Content-Length: 42");
        assert_eq!(sink.content_length, Some(42));
        assert_eq!(body.pending(), 42);
    }

    #[test]
    fn duplicate_content_length() {
        let mut sink = Sink::default();
        let mut body = BodyState::new();
        parse("Content-Length: 5", &mut body, &mut sink).unwrap();
        let err = parse("Content-Length: 5", &mut body, &mut sink);
        assert!(matches!(err, Err(ParseError::DuplicateContentLength)));
    }

    #[test]
    fn repeated_zero_content_length_is_tolerated() {
        let mut sink = Sink::default();
        let mut body = BodyState::new();
        parse("Content-Length: 0", &mut body, &mut sink).unwrap();
        parse("Content-Length: 0", &mut body, &mut sink).unwrap();
        assert!(body.is_drained());
    }

    #[test]
    fn bad_content_length() {
        let mut sink = Sink::default();
        let mut body = BodyState::new();
        let err = parse("Content-Length: five", &mut body, &mut sink);
        assert!(matches!(err, Err(ParseError::BadContentLength(..))));
    }

    #[test]
    fn host_with_port() {
        let (sink, _) = run("Host: example.com:8080");
        assert_eq!(sink.host.unwrap(), ("example.com".to_string(), 8080));
    }

    #[test]
    fn host_without_port() {
        let (sink, _) = run("Host: example.com");
        assert_eq!(sink.host.unwrap(), ("example.com".to_string(), 0));
    }

    #[test]
    fn host_with_garbage_port() {
        let (sink, _) = run("Host: example.com:http");
        assert_eq!(sink.host.unwrap(), ("example.com".to_string(), 0));
    }

    #[test]
    fn missing_colon() {
        let mut sink = Sink::default();
        let mut body = BodyState::new();
        let err = parse("not a header", &mut body, &mut sink);
        assert!(matches!(err, Err(ParseError::BadHeader)));
    }
}
