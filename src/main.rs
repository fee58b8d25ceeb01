use receipt_points::{api, AppConfig, MemoryStore, ReceiptProcessor};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 使用本地时间格式，RUST_LOG 可覆盖级别
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::from_env()?;
    info!("Starting server with config: {:?}", config);

    // 进程内存储，重启后数据丢失
    let store = Arc::new(MemoryStore::new());
    let processor = Arc::new(ReceiptProcessor::new(store));

    let app = api::router(processor);

    // 启动服务器
    let addr = config.addr();
    info!("Server listening on {}", addr);
    info!("API Endpoints:");
    info!("  POST /receipts/process        - submit a receipt");
    info!("  GET  /receipts/:id/points     - points for a receipt");
    info!("  GET  /receipts/:id            - receipt with points breakdown");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
