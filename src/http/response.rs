//! HTTP/1.0 response generation.
//!
//! Responses are fixed text templates authored with plain `\n` and
//! normalized to CR+LF before they hit the wire. There is no
//! `Content-Length` header: an HTTP/1.0 client reads the body until the
//! connection closes.

/// Page served for the root path.
const INDEX_PAGE: &str = "\
HTTP/1.0 200 OK
Content-Type: text/html

<!DOCTYPE html>
<html>
<head><title>Sample</title></head>
<body>This server is implemented with Rust!</body>
</html>";

/// Produces the complete response bytes for a GET of `path`.
///
/// Any path other than `/` gets a 404 page echoing the path verbatim.
pub fn for_path(path: &str) -> Vec<u8> {
    if path == "/" {
        to_wire(INDEX_PAGE)
    } else {
        to_wire(&format!(
            "\
HTTP/1.0 404 Not Found
Content-Type: text/html

<!DOCTYPE html>
<html>
<head><title>404 Not Found</title></head>
<body>{path} is not found</body>
</html>"
        ))
    }
}

/// Replaces every LF with CR+LF, the HTTP wire line-ending convention.
fn to_wire(text: &str) -> Vec<u8> {
    text.replace('\n', "\r\n").into_bytes()
}
