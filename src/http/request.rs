/// The first line of an HTTP request: method, target path, protocol version.
///
/// All three fields are raw tokens. Unknown methods survive parsing;
/// dispatch decides what is supported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: String,
    pub path: String,
    pub version: String,
}

impl RequestLine {
    /// Splits a request line on single ASCII spaces, requiring exactly
    /// three tokens.
    ///
    /// Runs of spaces produce empty tokens that count toward the arity,
    /// so a doubled space or a path containing a space is rejected
    /// wholesale rather than partially parsed.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split(' ');
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(method), Some(path), Some(version), None) => Some(Self {
                method: method.to_string(),
                path: path.to_string(),
                version: version.to_string(),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = RequestLine::parse("GET / HTTP/1.0").unwrap();

        assert_eq!(req.method, "GET");
        assert_eq!(req.path, "/");
        assert_eq!(req.version, "HTTP/1.0");
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(RequestLine::parse("GARBAGE").is_none());
        assert!(RequestLine::parse("GET /").is_none());
        assert!(RequestLine::parse("GET /a b HTTP/1.0").is_none());
    }
}
