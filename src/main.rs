use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, Level};
use users_api::{build_router, infrastructure::logger::Logger, ServerConfig, UserStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // `.env` 不存在时忽略
    dotenvy::dotenv().ok();
    Logger::init(Level::INFO);

    let config = ServerConfig::from_env()?;
    let app = build_router(UserStore::seeded());

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("Server running on port {}", config.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已关闭");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "无法监听 Ctrl+C，服务将持续运行");
        std::future::pending::<()>().await;
    }
    info!("收到 Ctrl+C，正在关闭...");
}
