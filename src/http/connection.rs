use std::io;
use std::path::PathBuf;
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;

use crate::files::{self, ResolveError, Target};
use crate::http::parser::parse_request_line;
use crate::http::response::StatusCode;
use crate::http::writer::ResponseWriter;

/// Longest request line the server will buffer.
const MAX_REQUEST_LINE: usize = 8 * 1024;

const DEFAULT_READ_DEADLINE: Duration = Duration::from_secs(30);
const DEFAULT_WRITE_DEADLINE: Duration = Duration::from_secs(30);

/// Owns one accepted connection for exactly one request/response exchange.
///
/// Consuming `self` in [`serve`](Connection::serve) means the stream drops,
/// and thereby closes, on every exit path.
pub struct Connection<S> {
    stream: S,
    root: PathBuf,
    read_deadline: Duration,
    write_deadline: Duration,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, root: PathBuf) -> Self {
        Self {
            stream,
            root,
            read_deadline: DEFAULT_READ_DEADLINE,
            write_deadline: DEFAULT_WRITE_DEADLINE,
        }
    }

    /// Overrides the per-phase deadlines that keep a slow or absent client
    /// from holding the handler indefinitely.
    pub fn with_deadlines(mut self, read: Duration, write: Duration) -> Self {
        self.read_deadline = read;
        self.write_deadline = write;
        self
    }

    /// Serves one exchange: read the request line, respond, close.
    pub async fn serve(mut self) -> anyhow::Result<()> {
        let line = match timeout(self.read_deadline, read_request_line(&mut self.stream)).await {
            Err(_) => anyhow::bail!("timed out reading request line"),
            Ok(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                // Overlong line; best-effort status before closing.
                let _ = self.send_empty(StatusCode::BadRequest).await;
                return Ok(());
            }
            Ok(Err(e)) => return Err(e.into()),
            Ok(Ok(None)) => return Ok(()), // client left without sending anything
            Ok(Ok(Some(line))) => line,
        };

        tracing::info!(line = %line, "Request received");

        let write_deadline = self.write_deadline;
        match timeout(write_deadline, self.respond(&line)).await {
            Ok(result) => result?,
            Err(_) => anyhow::bail!("timed out writing response"),
        }

        self.stream.shutdown().await?;
        Ok(())
    }

    async fn respond(&mut self, line: &str) -> io::Result<()> {
        let request = match parse_request_line(line) {
            Ok(req) => req,
            Err(e) => {
                tracing::warn!(line = %line, "Invalid request line");
                return self.send_empty(e.status()).await;
            }
        };

        let resolved = match files::resolve(&self.root, &request.path).await {
            Ok(path) => path,
            Err(ResolveError::NotFound) => {
                return self.send_empty(StatusCode::NotFound).await;
            }
            Err(ResolveError::Outside) => {
                tracing::warn!(path = %request.path, "Rejected path outside document root");
                return self.send_empty(StatusCode::Forbidden).await;
            }
            Err(ResolveError::Io(e)) => {
                tracing::error!(path = %request.path, error = %e, "Path resolution failed");
                return self.send_empty(StatusCode::InternalServerError).await;
            }
        };

        let target = match files::classify(resolved).await {
            Ok(target) => target,
            // Vanished between resolution and stat
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return self.send_empty(StatusCode::NotFound).await;
            }
            Err(e) => {
                tracing::error!(path = %request.path, error = %e, "Stat failed");
                return self.send_empty(StatusCode::InternalServerError).await;
            }
        };

        match target {
            Target::Directory(path) => {
                let body = match files::listing::render(&path).await {
                    Ok(body) => body,
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "Listing failed");
                        return self.send_empty(StatusCode::InternalServerError).await;
                    }
                };

                let mut writer = ResponseWriter::new(&mut self.stream);
                writer.status_line(StatusCode::Ok).await?;
                writer.end_headers().await?;
                writer.body(body.as_bytes()).await?;
                writer.flush().await
            }

            Target::File(path) => {
                let mut file = match tokio::fs::File::open(&path).await {
                    Ok(file) => file,
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {
                        return self.send_empty(StatusCode::NotFound).await;
                    }
                    Err(e) => {
                        tracing::error!(path = %path.display(), error = %e, "Open failed");
                        return self.send_empty(StatusCode::InternalServerError).await;
                    }
                };

                let mut writer = ResponseWriter::new(&mut self.stream);
                writer.status_line(StatusCode::Ok).await?;
                writer.end_headers().await?;
                writer.stream(&mut file).await?;
                writer.flush().await
            }
        }
    }

    async fn send_empty(&mut self, status: StatusCode) -> io::Result<()> {
        let mut writer = ResponseWriter::new(&mut self.stream);
        writer.status_line(status).await?;
        writer.end_headers().await?;
        writer.flush().await
    }
}

/// Reads bytes up to the first `\n`, under the caller's deadline.
///
/// Returns `None` when the client closes before sending anything. A close
/// after partial data yields the partial line. Anything buffered past the
/// newline (headers the client sent) stays unread.
async fn read_request_line<S: AsyncRead + Unpin>(stream: &mut S) -> io::Result<Option<String>> {
    let mut buffer = BytesMut::with_capacity(1024);

    loop {
        if let Some(pos) = buffer.iter().position(|&b| b == b'\n') {
            if pos > MAX_REQUEST_LINE {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "request line too long",
                ));
            }
            let line = buffer.split_to(pos + 1);
            return Ok(Some(decode_line(&line)));
        }

        if buffer.len() > MAX_REQUEST_LINE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "request line too long",
            ));
        }

        let n = stream.read_buf(&mut buffer).await?;
        if n == 0 {
            if buffer.is_empty() {
                return Ok(None);
            }
            let line = buffer.split();
            return Ok(Some(decode_line(&line)));
        }
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}
