//! HTTP protocol implementation.
//!
//! This module implements the HTTP/1.1 subset the server speaks: one request
//! per connection, no keep-alive, no request bodies.
//!
//! # Architecture
//!
//! - **`connection`**: Drives a single accepted connection through one exchange
//! - **`parser`**: Parses requests (and, for clients, responses) from byte buffers
//! - **`request`**: HTTP request representation
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes and writes HTTP responses to the client
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← One read of at most 1024 bytes
//!        └──────┬──────┘
//!               │ Bytes received (zero bytes → Closed)
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Parse and route
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │
//!               ▼
//!             Closed
//! ```
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use tinyhttpd::http::connection::Connection;
//! use tinyhttpd::routes::Router;
//! use tokio::net::TcpListener;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let listener = TcpListener::bind("127.0.0.1:4221").await?;
//!     let router = Arc::new(Router::new(None));
//!
//!     loop {
//!         let (socket, peer) = listener.accept().await?;
//!         let router = router.clone();
//!         tokio::spawn(async move {
//!             if let Err(e) = Connection::new(socket, peer, router).run().await {
//!                 tracing::error!("Connection error: {}", e);
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
