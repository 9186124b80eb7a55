//! Order Repository
//!
//! Orders are written by the storefront. Here they are read and their status
//! is moved; `create` exists for seeding.

use shared::OrderCreate;
use shared::util::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{OrderRecord, OrderStatusPatch};

const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, data: OrderCreate) -> RepoResult<OrderRecord> {
        let now = now_millis();
        let record = OrderRecord {
            id: None,
            order_status: data.order_status,
            total_amount: data.total_amount,
            created_at: now,
            updated_at: Some(now),
        };
        let created: Option<OrderRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create order".to_string()))
    }

    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<OrderRecord>> {
        let order: Option<OrderRecord> = self.base.db().select(record_id(TABLE, key)).await?;
        Ok(order)
    }

    /// Set `order_status` and bump `updated_at`
    pub async fn update_status(&self, key: &str, status: &str) -> RepoResult<OrderRecord> {
        let patch = OrderStatusPatch {
            order_status: status.to_string(),
            updated_at: now_millis(),
        };
        let updated: Option<OrderRecord> = self
            .base
            .db()
            .update(record_id(TABLE, key))
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Order {key} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::record_key;
    use crate::db::repository::test_support::temp_db;

    #[tokio::test]
    async fn status_update_bumps_updated_at() {
        let (_tmp, db) = temp_db().await;
        let repo = OrderRepository::new(db);

        let order = repo
            .create(OrderCreate {
                order_status: "processing".into(),
                total_amount: 25.5,
            })
            .await
            .unwrap();
        let key = record_key(order.id.as_ref().unwrap());

        let updated = repo.update_status(&key, "shipped").await.unwrap();
        assert_eq!(updated.order_status, "shipped");
        assert_eq!(updated.total_amount, 25.5);
        assert!(updated.updated_at >= order.updated_at);

        assert!(matches!(
            repo.update_status("missing", "shipped").await,
            Err(RepoError::NotFound(_))
        ));
        assert!(repo.find_by_id("missing").await.unwrap().is_none());
    }
}
