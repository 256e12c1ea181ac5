use std::io;

use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::http::response::StatusCode;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Writes HTTP response framing to a borrowed output sink.
///
/// The sink is passed in per response rather than held across requests, so
/// concurrent handlers never share output state.
pub struct ResponseWriter<'a, W> {
    sink: &'a mut W,
}

impl<'a, W: AsyncWrite + Unpin> ResponseWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self { sink }
    }

    /// Writes the status line: `HTTP/1.1 {code} {reason}\r\n`.
    pub async fn status_line(&mut self, status: StatusCode) -> io::Result<()> {
        let line = format!(
            "{} {} {}\r\n",
            HTTP_VERSION,
            status.as_u16(),
            status.reason_phrase()
        );
        self.sink.write_all(line.as_bytes()).await
    }

    /// Writes one header line.
    pub async fn header(&mut self, name: &str, value: &str) -> io::Result<()> {
        let line = format!("{}: {}\r\n", name, value);
        self.sink.write_all(line.as_bytes()).await
    }

    /// Terminates the header section with a bare CRLF.
    ///
    /// Mandatory even when zero headers were written.
    pub async fn end_headers(&mut self) -> io::Result<()> {
        self.sink.write_all(b"\r\n").await
    }

    /// Writes body bytes verbatim.
    pub async fn body(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.sink.write_all(bytes).await
    }

    /// Streams a reader's bytes into the body, returning the count copied.
    pub async fn stream<R: AsyncRead + Unpin>(&mut self, reader: &mut R) -> io::Result<u64> {
        tokio::io::copy(reader, &mut *self.sink).await
    }

    pub async fn flush(&mut self) -> io::Result<()> {
        self.sink.flush().await
    }
}
