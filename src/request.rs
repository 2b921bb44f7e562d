use error::ParseError;
use handler::Handler;


/// Parse the request line `METHOD SP PATH[?QUERY] SP VERSION`
///
/// All three tokens must be present before anything is reported, so a
/// malformed line produces no events at all. The query substring, when
/// present, is handed over without the leading `?`.
pub fn parse<H: Handler>(line: &str, sink: &mut H) -> Result<(), ParseError> {
    let mut words = line.split(' ').filter(|w| !w.is_empty());
    let method = match words.next() {
        Some(x) => x,
        None => return Err(ParseError::BadRequestLine),
    };
    let target = match words.next() {
        Some(x) => x,
        None => return Err(ParseError::BadRequestLine),
    };
    let version = match words.next() {
        Some(x) => x,
        None => return Err(ParseError::BadRequestLine),
    };

    sink.on_method(method);
    match target.find('?') {
        Some(x) => {
            sink.on_path(&target[..x]);
            sink.on_params(&target[x + 1..]);
        }
        None => sink.on_path(target),
    }
    sink.on_version(version);
    Ok(())
}


#[cfg(test)]
mod test {
    use error::ParseError;
    use handler::Handler;
    use super::parse;

    #[derive(Default)]
    struct Sink {
        events: Vec<String>,
    }

    impl Handler for Sink {
        fn on_method(&mut self, method: &str) {
            self.events.push(format!("method {}", method));
        }
        fn on_path(&mut self, path: &str) {
            self.events.push(format!("path {}", path));
        }
        fn on_params(&mut self, params: &str) {
            self.events.push(format!("params {}", params));
        }
        fn on_version(&mut self, version: &str) {
            self.events.push(format!("version {}", version));
        }
    }

    fn run(line: &str) -> Vec<String> {
        let mut sink = Sink::default();
        parse(line, &mut sink).unwrap();
        sink.events
    }

    #[test]
    fn plain_path() {
        assert_eq!(run("GET / HTTP/1.1"),
                   ["method GET", "path /", "version HTTP/1.1"]);
    }

    #[test]
    fn path_with_query() {
        assert_eq!(run("GET /search?a=1&b=two HTTP/1.1"),
                   ["method GET", "path /search", "params a=1&b=two",
                    "version HTTP/1.1"]);
    }

    #[test]
    fn empty_query() {
        assert_eq!(run("GET /x? HTTP/1.0"),
                   ["method GET", "path /x", "params ", "version HTTP/1.0"]);
    }

    #[test]
    fn extra_spaces_between_tokens() {
        assert_eq!(run("POST  /upload   HTTP/1.1"),
                   ["method POST", "path /upload", "version HTTP/1.1"]);
    }

    #[test]
    fn too_few_tokens() {
        for line in &["", "GET", "GET /"] {
            let mut sink = Sink::default();
            let err = parse(line, &mut sink);
            assert!(matches!(err, Err(ParseError::BadRequestLine)));
            assert!(sink.events.is_empty());
        }
    }
}
