//! Product Repository

use std::sync::Arc;

use shared::util::now_millis;
use shared::{ProductChanges, ProductDraft};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use super::sequence::PRODUCT_SEQUENCE;
use super::{BaseRepository, RepoError, RepoResult, SequenceAllocator, record_id};
use crate::db::models::{ProductPatch, ProductRecord};
use crate::utils::error::describe_validation_errors;

const TABLE: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
    sequences: Arc<SequenceAllocator>,
}

impl ProductRepository {
    pub fn new(db: Surreal<Db>, sequences: Arc<SequenceAllocator>) -> Self {
        Self {
            base: BaseRepository::new(db),
            sequences,
        }
    }

    /// All products ordered by business id
    pub async fn find_all(&self) -> RepoResult<Vec<ProductRecord>> {
        let products: Vec<ProductRecord> = self
            .base
            .db()
            .query("SELECT * FROM product ORDER BY product_id ASC")
            .await?
            .take(0)?;
        Ok(products)
    }

    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<ProductRecord>> {
        let product: Option<ProductRecord> = self.base.db().select(record_id(TABLE, key)).await?;
        Ok(product)
    }

    /// Allocate the next business id and persist the draft under it
    pub async fn create(&self, draft: ProductDraft) -> RepoResult<ProductRecord> {
        let product_id = self.sequences.allocate(PRODUCT_SEQUENCE).await?;
        let record = ProductRecord::new(product_id, &draft, now_millis());
        self.insert_record(record).await
    }

    /// Persist a record as-is. A taken `product_id` fails with `Duplicate`.
    pub async fn insert_record(&self, record: ProductRecord) -> RepoResult<ProductRecord> {
        let product_id = record.product_id;
        let created: Option<ProductRecord> =
            self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create product {product_id}")))
    }

    /// Merge `changes` into the stored product.
    ///
    /// The merged field set is validated before anything is written;
    /// `product_id` and `created_at` never change.
    pub async fn update(&self, key: &str, changes: ProductChanges) -> RepoResult<ProductRecord> {
        let existing = self
            .find_by_id(key)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Product {key} not found")))?;

        let merged = existing.fields().merged_with(&changes);
        merged
            .validate()
            .map_err(|e| RepoError::Validation(describe_validation_errors(&e)))?;

        let patch = ProductPatch::new(merged, changes.image.as_ref());
        let updated: Option<ProductRecord> = self
            .base
            .db()
            .update(record_id(TABLE, key))
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Product {key} not found")))
    }

    /// Remove the product; its business id is not reissued
    pub async fn delete(&self, key: &str) -> RepoResult<ProductRecord> {
        let removed: Option<ProductRecord> = self.base.db().delete(record_id(TABLE, key)).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("Product {key} not found")))
    }

    /// Largest stored business id (0 when empty)
    pub async fn max_product_id(&self) -> RepoResult<i64> {
        // Plain scan: ORDER BY … LIMIT 1 is unreliable on the RocksDB engine
        // Records without a product_id read back as NONE and are skipped
        let ids: Vec<Option<i64>> = self
            .base
            .db()
            .query("SELECT VALUE product_id FROM product")
            .await?
            .take(0)?;
        Ok(ids.into_iter().flatten().max().unwrap_or(0))
    }

    /// Set the product counter to the largest stored business id.
    ///
    /// Runs once at startup, before the HTTP listener binds.
    pub async fn reconcile_sequence(&self) -> RepoResult<i64> {
        let max = self.max_product_id().await?;
        let current = self.sequences.current(PRODUCT_SEQUENCE).await?;
        if current != max {
            tracing::warn!(
                counter = current,
                max_product_id = max,
                "Product counter out of step with stored products, reconciling"
            );
        }
        self.sequences.reset(PRODUCT_SEQUENCE, max).await
    }
}

#[cfg(test)]
mod tests {
    use shared::{ImagePayload, ProductFields};

    use super::*;
    use crate::db::models::record_key;
    use crate::db::repository::test_support::temp_db;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            fields: ProductFields::new(name, "A thing", 9.99, "tools", 4.0, 10),
            image: ImagePayload::new(vec![1, 2, 3], "image/png"),
        }
    }

    async fn repo() -> (tempfile::TempDir, ProductRepository) {
        let (tmp, db) = temp_db().await;
        let sequences = Arc::new(SequenceAllocator::new(db.clone()));
        (tmp, ProductRepository::new(db, sequences))
    }

    #[tokio::test]
    async fn create_assigns_consecutive_ids() {
        let (_tmp, repo) = repo().await;

        let a = repo.create(draft("A")).await.unwrap();
        let b = repo.create(draft("B")).await.unwrap();
        assert_eq!(a.product_id, 1);
        assert_eq!(b.product_id, 2);

        let all = repo.find_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|p| p.product_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn deleted_ids_are_not_reused() {
        let (_tmp, repo) = repo().await;

        let first = repo.create(draft("A")).await.unwrap();
        let key = record_key(first.id.as_ref().unwrap());
        repo.delete(&key).await.unwrap();

        let second = repo.create(draft("B")).await.unwrap();
        assert_eq!(second.product_id, 2);
        assert!(repo.find_by_id(&key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_business_id_is_rejected() {
        let (_tmp, repo) = repo().await;

        let first = repo.create(draft("A")).await.unwrap();
        let mut copy = first.clone();
        copy.id = None;

        let err = repo.insert_record(copy).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_merges_and_validates() {
        let (_tmp, repo) = repo().await;
        let created = repo.create(draft("Widget")).await.unwrap();
        let key = record_key(created.id.as_ref().unwrap());

        let updated = repo
            .update(
                &key,
                ProductChanges {
                    stock: Some(5),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.stock, 5);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.product_id, created.product_id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.image, created.image);

        let err = repo
            .update(
                &key,
                ProductChanges {
                    rating: Some(7.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
        let stored = repo.find_by_id(&key).await.unwrap().unwrap();
        assert_eq!(stored.rating, created.rating);
    }

    #[tokio::test]
    async fn missing_product_is_not_found() {
        let (_tmp, repo) = repo().await;
        assert!(matches!(
            repo.delete("nope").await,
            Err(RepoError::NotFound(_))
        ));
        assert!(matches!(
            repo.update("nope", ProductChanges::default()).await,
            Err(RepoError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn reconcile_raises_a_stale_counter() {
        let (_tmp, db) = temp_db().await;
        let sequences = Arc::new(SequenceAllocator::new(db.clone()));
        let repo = ProductRepository::new(db, sequences.clone());

        let mut record = ProductRecord::new(41, &draft("Imported"), now_millis());
        record.id = None;
        repo.insert_record(record).await.unwrap();
        assert_eq!(sequences.current(PRODUCT_SEQUENCE).await.unwrap(), 0);

        assert_eq!(repo.reconcile_sequence().await.unwrap(), 41);
        let next = repo.create(draft("Fresh")).await.unwrap();
        assert_eq!(next.product_id, 42);
    }

    #[tokio::test]
    async fn max_product_id_skips_records_without_one() {
        let (_tmp, repo) = repo().await;
        repo.create(draft("A")).await.unwrap();
        repo.base
            .db()
            .query("CREATE product SET name = 'orphan'")
            .await
            .unwrap()
            .check()
            .unwrap();

        assert_eq!(repo.max_product_id().await.unwrap(), 1);
        assert_eq!(repo.reconcile_sequence().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn reconcile_on_empty_store_resets_to_zero() {
        let (_tmp, repo) = repo().await;
        assert_eq!(repo.reconcile_sequence().await.unwrap(), 0);
        assert_eq!(repo.create(draft("A")).await.unwrap().product_id, 1);
    }
}
