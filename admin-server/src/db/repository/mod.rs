//! Repository Module
//!
//! CRUD over the SurrealDB tables. Handlers never touch `Surreal<Db>` directly.

// Products
pub mod product;
pub mod sequence;

// Tasks
pub mod task;

// Orders
pub mod order;

// Re-exports
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use sequence::SequenceAllocator;
pub use task::TaskRepository;

use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // unique index violation: "Database index `…` already contains …"
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// Clients only ever see the bare record key (`_id`). Repositories take that
// key and rebuild the full id with `RecordId::from_table_key(table, key)`;
// `db::models::record_key` goes the other way.

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

pub(crate) fn record_id(table: &str, key: &str) -> RecordId {
    RecordId::from_table_key(table, key)
}
