use admin_server::{Config, Server, ServerState, init_logger_with_file, print_banner};
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 环境 (.env) 和配置
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. 日志
    let log_dir = config.log_dir();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_to_file.then_some(log_dir.as_path()),
    )
    .context("Failed to initialize logging")?;

    print_banner();
    tracing::info!(work_dir = %config.work_dir, "🦀 KSP Admin Server starting...");

    // 3. 初始化服务器状态 (打开数据库、对齐序列号)
    let state = ServerState::initialize(&config)
        .await
        .context("Failed to initialize server state")?;

    // 4. 启动 HTTP 服务器
    Server::with_state(config, state)
        .run()
        .await
        .context("Server error")?;

    Ok(())
}
