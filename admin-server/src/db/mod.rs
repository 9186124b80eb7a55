//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) and the schema the repositories rely on.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Tables are schemaless. `product_id` is unique per product.
const SCHEMA: &str = r#"
    DEFINE TABLE IF NOT EXISTS counter SCHEMALESS;
    DEFINE TABLE IF NOT EXISTS product SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS product_product_id_unique ON TABLE product FIELDS product_id UNIQUE;
    DEFINE TABLE IF NOT EXISTS task SCHEMALESS;
"#;

/// Database service: owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database at `db_path` and apply the schema
    pub async fn new(db_path: &Path, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        db.query(SCHEMA)
            .await
            .and_then(|response| response.check())
            .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!(
            path = %db_path.display(),
            namespace,
            database,
            "Database connection established (SurrealDB RocksDB)"
        );

        Ok(Self { db })
    }
}
