//! HTTP protocol implementation.
//!
//! This module implements a single-request HTTP/1.1 exchange: each accepted
//! connection carries exactly one request line and receives exactly one
//! response before the connection is closed. Headers and bodies the client
//! may send after the request line are ignored on purpose.
//!
//! # Architecture
//!
//! The HTTP layer is organized into several submodules:
//!
//! - **`connection`**: The handler owning the full lifecycle of one exchange
//! - **`parser`**: Parses and validates the request line
//! - **`request`**: Parsed request representation
//! - **`response`**: Status codes and reason phrases
//! - **`writer`**: Serializes response framing to the client
//!
//! # Request state machine
//!
//! Each request reaches exactly one terminal state:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the request line
//!        └──────┬──────┘
//!               │ Line received
//!               ▼
//!        ┌──────────────────┐
//!        │   Validating     │ ← Method / version / token count
//!        └──────┬───────────┘
//!               ├─ Invalid → failing status line, close
//!               ▼
//!        ┌──────────────────┐
//!        │   Resolving      │ ← Anchor the path inside the document root
//!        └──────┬───────────┘
//!               ├─ Escapes root → 403, close
//!               ├─ Missing     → 404, close
//!               ├─ Directory   → 200 + listing, close
//!               └─ File        → 200 + file bytes, close
//! ```
//!
//! # Example
//!
//! ```ignore
//! use shelf::http::connection::Connection;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:8080").await?;
//!
//!     loop {
//!         let (socket, _addr) = listener.accept().await?;
//!         tokio::spawn(async move {
//!             let conn = Connection::new(socket, "./public".into());
//!             if let Err(e) = conn.serve().await {
//!                 eprintln!("Connection error: {}", e);
//!             }
//!         });
//!     }
//! }
//! ```

pub mod request;
pub mod response;
pub mod parser;
pub mod connection;
pub mod writer;
