use anyhow::Context;
use exchange_api::{routes, utils, Config};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    utils::init_tracing();
    let config = Config::from_env()?;
    info!("Конфигурация загружена: {config:?}");
    let app = routes::init(&config);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Сервер слушает http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await
        .context("server error")?;
    info!("Сервер остановлен");
    Ok(())
}
