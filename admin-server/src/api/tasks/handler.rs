//! Task API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use shared::response::{Deleted, TaskSaved};
use shared::{Task, TaskChanges, TaskCreate, TaskDraft, TaskPriority, TaskUpdate};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_TITLE_LEN, is_storage_id, non_blank, parse_due, validate_required_text,
};
use crate::utils::{AppError, AppResult};

const TASK_NOT_FOUND: &str = "Task not found";

fn parse_priority(raw: &str) -> AppResult<TaskPriority> {
    raw.parse::<TaskPriority>()
        .map_err(|e| AppError::validation(e.to_string()))
}

/// A key no task can have resolves like a missing task
fn task_key(id: &str) -> AppResult<&str> {
    if is_storage_id(id) {
        Ok(id)
    } else {
        Err(AppError::not_found(TASK_NOT_FOUND))
    }
}

/// Boundary checks for a new task
fn task_draft(payload: TaskCreate) -> AppResult<TaskDraft> {
    let (Some(title), Some(due)) = (
        non_blank(payload.title.as_deref()),
        non_blank(payload.due.as_deref()),
    ) else {
        return Err(AppError::validation("Title and due date are required"));
    };
    validate_required_text(title, "title", MAX_TITLE_LEN)?;

    let priority = match non_blank(payload.priority.as_deref()) {
        Some(raw) => parse_priority(raw)?,
        None => TaskPriority::default(),
    };

    Ok(TaskDraft {
        title: title.to_string(),
        priority,
        due: parse_due(due)?,
    })
}

/// Boundary checks for a partial update; absent fields stay absent
fn task_changes(payload: TaskUpdate) -> AppResult<TaskChanges> {
    let title = match payload.title {
        Some(title) => {
            validate_required_text(&title, "title", MAX_TITLE_LEN)?;
            Some(title.trim().to_string())
        }
        None => None,
    };

    Ok(TaskChanges {
        title,
        priority: payload.priority.as_deref().map(parse_priority).transpose()?,
        due: payload.due.as_deref().map(parse_due).transpose()?,
        completed: payload.completed,
    })
}

/// GET /api/tasks - 获取所有任务
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Task>>> {
    let tasks = state.tasks().find_all().await?;
    Ok(Json(tasks.into_iter().map(Task::from).collect()))
}

/// POST /api/tasks - 创建任务
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<TaskCreate>, JsonRejection>,
) -> AppResult<(StatusCode, Json<TaskSaved>)> {
    let Json(payload) = payload?;
    let draft = task_draft(payload)?;
    let task = Task::from(state.tasks().create(draft).await?);

    tracing::info!(task_id = %task.id, priority = %task.priority, "Task created");

    Ok((
        StatusCode::CREATED,
        Json(TaskSaved {
            message: "Task added successfully".to_string(),
            task,
        }),
    ))
}

/// PUT /api/tasks/:id - 更新任务 (未提供的字段保持不变)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<TaskUpdate>, JsonRejection>,
) -> AppResult<Json<TaskSaved>> {
    let key = task_key(&id)?;
    let Json(payload) = payload?;
    let changes = task_changes(payload)?;

    let record = state
        .tasks()
        .update(key, changes)
        .await
        .map_err(|e| AppError::from(e).with_not_found(TASK_NOT_FOUND))?;
    let task = Task::from(record);

    tracing::info!(task_id = %task.id, completed = task.completed, "Task updated");

    Ok(Json(TaskSaved {
        message: "Task updated successfully".to_string(),
        task,
    }))
}

/// DELETE /api/tasks/:id - 删除任务
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Deleted>> {
    let key = task_key(&id)?;

    state
        .tasks()
        .delete(key)
        .await
        .map_err(|e| AppError::from(e).with_not_found(TASK_NOT_FOUND))?;

    tracing::info!(task_id = %key, "Task deleted");

    Ok(Json(Deleted::plain("Task deleted successfully", key)))
}
