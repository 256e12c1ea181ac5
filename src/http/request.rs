/// Represents the parsed request line from a client.
///
/// The server reads exactly one line per connection; any headers or body
/// the client sends after it are never read. All three fields come from
/// splitting that line on single spaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method. Validation only admits "GET".
    pub method: String,
    /// The request path (e.g., "/index.html"), relative to the document root.
    pub path: String,
    /// HTTP version (must be "HTTP/1.1").
    pub version: String,
}
