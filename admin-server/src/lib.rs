//! KSP Admin Server - 商店后台管理服务
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储、商品序列号分配
//! - **HTTP API** (`api`): 商品、任务、订单状态的 REST 接口
//!
//! # 模块结构
//!
//! ```text
//! admin-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、校验、日志初始化
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __ _______ ____     ___       __          _
   / //_/ ___// __ \   /   | ____/ /___ ___  (_)___
  / ,<  \__ \/ /_/ /  / /| |/ __  / __ `__ \/ / __ \
 / /| |___/ / ____/  / ___ / /_/ / / / / / / / / / /
/_/ |_/____/_/      /_/  |_\__,_/_/ /_/ /_/_/_/ /_/
"#
    );
}
