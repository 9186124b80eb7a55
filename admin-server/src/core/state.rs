use std::sync::Arc;
use std::time::Instant;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    OrderRepository, ProductRepository, SequenceAllocator, TaskRepository,
};
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的引用
///
/// ServerState 是 admin-server 的核心状态，作为 axum 的 `State` 注入到每个
/// handler。所有字段都是浅拷贝 (Surreal 句柄和 Arc)。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 服务器配置 |
/// | db | 嵌入式数据库 (SurrealDB) |
/// | sequences | 业务序列号分配器 |
/// | started_at | 启动时间 (health 使用) |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub sequences: Arc<SequenceAllocator>,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        let sequences = Arc::new(SequenceAllocator::new(db.clone()));
        Self {
            config,
            db,
            sequences,
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 1. 确保工作目录存在
    /// 2. 打开数据库并应用 schema
    /// 3. 对齐商品序列号 (计数器 = 现有最大商品 id)
    ///
    /// 必须在 HTTP 监听之前完成。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir).map_err(|e| {
            AppError::internal(format!(
                "Failed to create database directory {}: {e}",
                db_dir.display()
            ))
        })?;

        let service = DbService::new(&db_dir, &config.db_namespace, &config.db_database).await?;
        let state = Self::new(config.clone(), service.db);

        let next_base = state.products().reconcile_sequence().await?;
        tracing::info!(product_counter = next_base, "Product sequence reconciled");

        Ok(state)
    }

    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.db.clone(), self.sequences.clone())
    }

    pub fn tasks(&self) -> TaskRepository {
        TaskRepository::new(self.db.clone())
    }

    pub fn orders(&self) -> OrderRepository {
        OrderRepository::new(self.db.clone())
    }

    /// 运行时长 (秒)
    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
