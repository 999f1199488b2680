use outpost::http::response;

#[test]
fn test_index_page_status_line() {
    let text = String::from_utf8(response::for_path("/")).unwrap();

    assert!(text.starts_with("HTTP/1.0 200 OK\r\n"));
}

#[test]
fn test_index_page_content_type_and_body() {
    let text = String::from_utf8(response::for_path("/")).unwrap();

    assert!(text.contains("Content-Type: text/html\r\n"));
    assert!(text.contains("This server is implemented with Rust!"));
}

#[test]
fn test_index_page_header_body_separator() {
    let text = String::from_utf8(response::for_path("/")).unwrap();

    assert!(text.contains("\r\n\r\n<!DOCTYPE html>"));
}

#[test]
fn test_unknown_path_returns_404() {
    let text = String::from_utf8(response::for_path("/missing")).unwrap();

    assert!(text.starts_with("HTTP/1.0 404 Not Found\r\n"));
    assert!(text.contains("/missing is not found"));
}

#[test]
fn test_404_echoes_path_verbatim() {
    let text = String::from_utf8(response::for_path("/a<b>&c")).unwrap();

    assert!(text.contains("/a<b>&c is not found"));
}

#[test]
fn test_line_endings_are_all_crlf() {
    for path in ["/", "/missing"] {
        let text = String::from_utf8(response::for_path(path)).unwrap();
        let stripped = text.replace("\r\n", "");

        assert!(!stripped.contains('\n'), "bare LF in response for {path}");
        assert!(!stripped.contains('\r'), "bare CR in response for {path}");
    }
}

#[test]
fn test_no_content_length_header() {
    let text = String::from_utf8(response::for_path("/")).unwrap();

    assert!(!text.contains("Content-Length"));
}

#[test]
fn test_responses_are_deterministic() {
    assert_eq!(response::for_path("/"), response::for_path("/"));
    assert_eq!(response::for_path("/x"), response::for_path("/x"));
}
