use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::{lookup_host, TcpListener, TcpSocket};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::routes::Router;

const BACKLOG: u32 = 1024;

/// Binds `addr` with address (and, on Unix, port) reuse enabled.
///
/// Each resolved address is tried in turn; the first that binds wins.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let mut last_err = None;

    for resolved in lookup_host(addr)
        .await
        .with_context(|| format!("failed to resolve {}", addr))?
    {
        match bind_one(resolved) {
            Ok(listener) => return Ok(listener),
            Err(e) => {
                debug!("Could not bind {}: {}", resolved, e);
                last_err = Some(e);
            }
        }
    }

    match last_err {
        Some(e) => Err(e).with_context(|| format!("failed to bind {}", addr)),
        None => anyhow::bail!("{} resolved to no addresses", addr),
    }
}

fn bind_one(addr: SocketAddr) -> std::io::Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    #[cfg(unix)]
    socket.set_reuseport(true)?;
    socket.bind(addr)?;
    socket.listen(BACKLOG)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(&cfg.listen_addr).await?;
    serve(listener, cfg, shutdown_signal()).await
}

/// Accepts connections until `shutdown` resolves.
///
/// The listener is dropped, and so closed, on return.
pub async fn serve<F>(listener: TcpListener, cfg: &Config, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    info!("Listening on {}", listener.local_addr()?);

    let router = Arc::new(Router::from_config(cfg));
    let dispatch = cfg.dispatch;

    tokio::pin!(shutdown);

    loop {
        let (socket, peer) = tokio::select! {
            biased;

            () = &mut shutdown => break,

            res = listener.accept() => match res {
                Ok(v) => v,
                Err(e) => {
                    error!("Accept error: {}", e);
                    continue;
                }
            },
        };
        info!("Connection from {}", peer);

        let router = router.clone();
        let task = dispatch.dispatch(async move {
            let conn = Connection::new(socket, peer, router);
            if let Err(e) = conn.run().await {
                error!("Error handling request from {}: {:#}", peer, e);
            }
        });

        // An inline handler can block indefinitely on a silent peer
        tokio::select! {
            biased;

            () = &mut shutdown => break,
            () = task => {}
        }
    }

    info!("Shutting down server");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
