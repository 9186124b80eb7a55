//! Task Repository

use shared::util::now_millis;
use shared::{TaskChanges, TaskDraft};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{TaskPatch, TaskRecord};

const TABLE: &str = "task";

#[derive(Clone)]
pub struct TaskRepository {
    base: BaseRepository,
}

impl TaskRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// All tasks in creation order (same millisecond: by record id)
    pub async fn find_all(&self) -> RepoResult<Vec<TaskRecord>> {
        let tasks: Vec<TaskRecord> = self
            .base
            .db()
            .query("SELECT * FROM task ORDER BY created_at ASC, id ASC")
            .await?
            .take(0)?;
        Ok(tasks)
    }

    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<TaskRecord>> {
        let task: Option<TaskRecord> = self.base.db().select(record_id(TABLE, key)).await?;
        Ok(task)
    }

    pub async fn create(&self, draft: TaskDraft) -> RepoResult<TaskRecord> {
        let record = TaskRecord::new(draft, now_millis());
        let created: Option<TaskRecord> = self.base.db().create(TABLE).content(record).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create task".to_string()))
    }

    /// Write the provided fields; absent ones keep their stored values
    pub async fn update(&self, key: &str, changes: TaskChanges) -> RepoResult<TaskRecord> {
        if changes.is_empty() {
            return self
                .find_by_id(key)
                .await?
                .ok_or_else(|| RepoError::NotFound(format!("Task {key} not found")));
        }

        // UPDATE on a missing record id returns nothing and creates nothing
        let updated: Option<TaskRecord> = self
            .base
            .db()
            .update(record_id(TABLE, key))
            .merge(TaskPatch::from(changes))
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("Task {key} not found")))
    }

    pub async fn delete(&self, key: &str) -> RepoResult<TaskRecord> {
        let removed: Option<TaskRecord> = self.base.db().delete(record_id(TABLE, key)).await?;
        removed.ok_or_else(|| RepoError::NotFound(format!("Task {key} not found")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shared::TaskPriority;

    use super::*;
    use crate::db::models::record_key;
    use crate::db::repository::test_support::temp_db;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.into(),
            priority: TaskPriority::Low,
            due: Utc.with_ymd_and_hms(2026, 12, 24, 0, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn create_list_update_delete() {
        let (_tmp, db) = temp_db().await;
        let repo = TaskRepository::new(db);

        let first = repo.create(draft("Count stock")).await.unwrap();
        repo.create(draft("Call supplier")).await.unwrap();
        let key = record_key(first.id.as_ref().unwrap());

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["Count stock", "Call supplier"]);

        let updated = repo
            .update(
                &key,
                TaskChanges {
                    completed: Some(true),
                    priority: Some(TaskPriority::High),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(updated.completed);
        assert_eq!(updated.priority, TaskPriority::High);
        assert_eq!(updated.title, "Count stock");
        assert_eq!(updated.due, first.due);

        repo.delete(&key).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn same_millisecond_tasks_list_by_record_id() {
        let (_tmp, db) = temp_db().await;
        let repo = TaskRepository::new(db.clone());

        for key in ["b", "a", "c"] {
            let created: Option<TaskRecord> = db
                .create(record_id(TABLE, key))
                .content(TaskRecord::new(draft(key), 1_000))
                .await
                .unwrap();
            assert!(created.is_some());
        }

        let titles: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn update_of_missing_task_creates_nothing() {
        let (_tmp, db) = temp_db().await;
        let repo = TaskRepository::new(db);

        let err = repo
            .update(
                "ghost",
                TaskChanges {
                    completed: Some(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
