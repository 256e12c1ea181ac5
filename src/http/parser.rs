use crate::http::request::Request;
use crate::http::response::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The line does not split into exactly three space-separated tokens.
    Malformed,
    /// The method token is anything other than "GET".
    UnsupportedMethod,
    /// The version token is anything other than "HTTP/1.1".
    UnsupportedVersion,
}

impl RequestError {
    /// The status the client receives for this validation failure.
    pub fn status(&self) -> StatusCode {
        match self {
            RequestError::Malformed => StatusCode::BadRequest,
            RequestError::UnsupportedMethod => StatusCode::MethodNotAllowed,
            RequestError::UnsupportedVersion => StatusCode::HttpVersionNotSupported,
        }
    }
}

/// Parses and validates one request line.
///
/// The line must be `{METHOD} {PATH} {VERSION}` with single spaces. Method
/// and version checks are exact and case-sensitive. Path existence is not
/// checked here; that is the resolver's job.
pub fn parse_request_line(raw: &str) -> Result<Request, RequestError> {
    let tokens: Vec<&str> = raw.split(' ').collect();

    if tokens.len() != 3 {
        return Err(RequestError::Malformed);
    }

    if tokens[0] != "GET" {
        return Err(RequestError::UnsupportedMethod);
    }

    if tokens[2] != "HTTP/1.1" {
        return Err(RequestError::UnsupportedVersion);
    }

    Ok(Request {
        method: tokens[0].to_string(),
        path: tokens[1].to_string(),
        version: tokens[2].to_string(),
    })
}
