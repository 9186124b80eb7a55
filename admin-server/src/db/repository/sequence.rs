//! Sequence Allocator
//!
//! Monotonic per-domain counters stored as `counter:<domain>`. Each call to
//! [`SequenceAllocator::allocate`] is a single `UPSERT … RETURN AFTER`, so the
//! increment and the read of the new value happen in one statement; calls for
//! the same domain are additionally serialized in-process.
//!
//! Values are never handed out twice and never reused, even after the record
//! that consumed them is deleted.

use std::sync::Arc;

use dashmap::DashMap;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use tokio::sync::Mutex;

use super::{RepoError, RepoResult, record_id};
use crate::db::models::Counter;

const COUNTER_TABLE: &str = "counter";

/// Sequence domain for product business ids
pub const PRODUCT_SEQUENCE: &str = "product";

#[derive(Debug)]
pub struct SequenceAllocator {
    db: Surreal<Db>,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SequenceAllocator {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            db,
            locks: DashMap::new(),
        }
    }

    fn domain_lock(&self, domain: &str) -> Arc<Mutex<()>> {
        self.locks.entry(domain.to_string()).or_default().clone()
    }

    /// Issue the next value for `domain` (first call returns 1)
    pub async fn allocate(&self, domain: &str) -> RepoResult<i64> {
        let lock = self.domain_lock(domain);
        let _guard = lock.lock().await;

        let mut result = self
            .db
            .query("UPSERT $counter SET seq = (seq ?? 0) + 1 RETURN AFTER")
            .bind(("counter", record_id(COUNTER_TABLE, domain)))
            .await?;
        let counter: Option<Counter> = result.take(0)?;
        let seq = counter
            .map(|c| c.seq)
            .ok_or_else(|| RepoError::Database(format!("Counter '{domain}' was not written")))?;

        tracing::debug!(domain, seq, "Sequence value allocated");
        Ok(seq)
    }

    /// Last issued value (0 if the domain has never allocated)
    pub async fn current(&self, domain: &str) -> RepoResult<i64> {
        let counter: Option<Counter> = self.db.select(record_id(COUNTER_TABLE, domain)).await?;
        Ok(counter.map(|c| c.seq).unwrap_or(0))
    }

    /// Overwrite the counter so the next allocation returns `value + 1`
    pub async fn reset(&self, domain: &str, value: i64) -> RepoResult<i64> {
        if value < 0 {
            return Err(RepoError::Validation(format!(
                "Sequence value must not be negative (got {value})"
            )));
        }

        let lock = self.domain_lock(domain);
        let _guard = lock.lock().await;

        let mut result = self
            .db
            .query("UPSERT $counter SET seq = $value RETURN AFTER")
            .bind(("counter", record_id(COUNTER_TABLE, domain)))
            .bind(("value", value))
            .await?;
        let counter: Option<Counter> = result.take(0)?;
        let seq = counter
            .map(|c| c.seq)
            .ok_or_else(|| RepoError::Database(format!("Counter '{domain}' was not written")))?;

        tracing::info!(domain, seq, "Sequence reset");
        Ok(seq)
    }
}
