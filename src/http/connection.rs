use std::net::SocketAddr;
use std::sync::Arc;

use bytes::Bytes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::http::writer::ResponseWriter;
use crate::routes::Router;

/// Upper bound on what a single request may occupy; anything beyond is
/// never read.
pub const READ_BUFFER_SIZE: usize = 1024;

/// One accepted connection, good for exactly one request-response exchange.
pub struct Connection<S> {
    stream: S,
    peer: SocketAddr,
    router: Arc<Router>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Bytes),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, peer: SocketAddr, router: Arc<Router>) -> Self {
        Self {
            stream,
            peer,
            router,
            state: ConnectionState::Reading,
        }
    }

    /// Serves the exchange, then closes the stream whatever the outcome.
    ///
    /// Consumes the connection so it can only be closed once.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let result = self.exchange().await;

        info!("Closing connection to {}", self.peer);
        if let Err(e) = self.stream.shutdown().await {
            debug!(peer = %self.peer, "shutdown failed: {}", e);
        }

        result
    }

    async fn exchange(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(raw) => ConnectionState::Processing(raw),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(raw) => {
                    let response = self.router.respond(raw).await;
                    debug!(
                        peer = %self.peer,
                        status = response.status.as_u16(),
                        "Response ready"
                    );

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads once. `None` means the peer closed without sending anything.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Bytes>> {
        let mut temp = [0u8; READ_BUFFER_SIZE];
        let n = self.stream.read(&mut temp).await?;

        if n == 0 {
            debug!(peer = %self.peer, "Peer closed before sending a request");
            return Ok(None);
        }

        Ok(Some(Bytes::copy_from_slice(&temp[..n])))
    }
}
