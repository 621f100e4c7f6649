use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use users_api::{
    app::{build_router, build_store},
    config::load_config,
    infrastructure::logger::Logger,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 第一个参数可指定配置文件路径
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_config(config_path.as_deref()).context("加载配置失败")?;

    Logger::init(&config.logging);
    info!(
        id_strategy = ?config.users.id_strategy,
        seed = config.users.seed,
        "配置已加载"
    );

    let store = Arc::new(build_store(&config));
    info!("✅ 已初始化 {} 个示例用户", store.len());

    let app = build_router(&config, store);

    let address = config.http.listen_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("无法绑定到 {}", address))?;

    info!("🚀 用户服务运行在 http://{}", address);
    info!("   GET    /users       - 获取所有用户");
    info!("   POST   /users       - 创建新用户");
    info!("   GET    /users/:id   - 获取特定用户");
    info!("   PUT    /users/:id   - 创建或更新用户");
    info!("   DELETE /users/:id   - 删除用户");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("服务器运行失败")?;

    info!("服务器已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("监听关闭信号失败: {}", err);
    }
}
