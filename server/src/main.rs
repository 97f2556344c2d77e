use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use todo_server::{build_app, config, init_tracing, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if config::should_load_dotenv() {
        dotenvy::dotenv().ok();
    }

    let config = Config::from_env()?;
    init_tracing(&config.log_level);

    tracing::info!(store = ?config.store, "Starting todo server");

    let app = build_app(&config)
        .await
        .context("Failed to initialize todo store")?;

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .context("Failed to parse bind address")?;
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!(addr = %addr, "Server listening");
    todo_server::run(listener, app).await.context("Server error")?;

    Ok(())
}
