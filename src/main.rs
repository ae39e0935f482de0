use tinyhttpd::config::Config;
use tinyhttpd::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;
    tracing::info!(
        listen = %cfg.listen_addr,
        directory = ?cfg.directory,
        dispatch = ?cfg.dispatch,
        "Starting server"
    );

    server::run(&cfg).await
}
