use shelf::http::parser::{RequestError, parse_request_line};
use shelf::http::response::StatusCode;

#[test]
fn test_parse_valid_get_request_line() {
    let req = parse_request_line("GET /index.html HTTP/1.1").unwrap();

    assert_eq!(req.method, "GET");
    assert_eq!(req.path, "/index.html");
    assert_eq!(req.version, "HTTP/1.1");
}

#[test]
fn test_parse_root_path() {
    let req = parse_request_line("GET / HTTP/1.1").unwrap();

    assert_eq!(req.path, "/");
}

#[test]
fn test_parse_path_is_kept_opaque() {
    // No query-string handling; the token is passed through untouched.
    let req = parse_request_line("GET /search?q=rust HTTP/1.1").unwrap();

    assert_eq!(req.path, "/search?q=rust");
}

#[test]
fn test_non_get_method_rejected() {
    let err = parse_request_line("POST /api HTTP/1.1").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedMethod);
    assert_eq!(err.status(), StatusCode::MethodNotAllowed);
}

#[test]
fn test_method_check_is_case_sensitive() {
    let err = parse_request_line("get / HTTP/1.1").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedMethod);
}

#[test]
fn test_unknown_method_token_rejected_as_method() {
    let err = parse_request_line("BREW /coffee HTTP/1.1").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedMethod);
}

#[test]
fn test_wrong_version_rejected() {
    let err = parse_request_line("GET / HTTP/1.0").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedVersion);
    assert_eq!(err.status(), StatusCode::HttpVersionNotSupported);
}

#[test]
fn test_http2_version_rejected() {
    let err = parse_request_line("GET / HTTP/2").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedVersion);
}

#[test]
fn test_method_checked_before_version() {
    // Both tokens are wrong; the method decides the status.
    let err = parse_request_line("POST / HTTP/1.0").unwrap_err();

    assert_eq!(err, RequestError::UnsupportedMethod);
}

#[test]
fn test_empty_line_is_malformed() {
    let err = parse_request_line("").unwrap_err();

    assert_eq!(err, RequestError::Malformed);
    assert_eq!(err.status(), StatusCode::BadRequest);
}

#[test]
fn test_too_few_tokens_is_malformed() {
    assert_eq!(
        parse_request_line("GET").unwrap_err(),
        RequestError::Malformed
    );
    assert_eq!(
        parse_request_line("GET /index.html").unwrap_err(),
        RequestError::Malformed
    );
}

#[test]
fn test_too_many_tokens_is_malformed() {
    let err = parse_request_line("GET /index.html HTTP/1.1 extra").unwrap_err();

    assert_eq!(err, RequestError::Malformed);
}

#[test]
fn test_double_space_is_malformed() {
    // Splitting on single spaces yields an empty token, so four tokens total.
    let err = parse_request_line("GET  /index.html HTTP/1.1").unwrap_err();

    assert_eq!(err, RequestError::Malformed);
}

#[test]
fn test_garbage_line_is_malformed() {
    let err = parse_request_line("complete nonsense without http shape x").unwrap_err();

    assert_eq!(err, RequestError::Malformed);
}
