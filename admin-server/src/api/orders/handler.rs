//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use shared::response::OrderStatusUpdated;
use shared::{Order, OrderStatusUpdate};

use crate::core::ServerState;
use crate::utils::validation::{
    MAX_STATUS_LEN, non_blank, require_storage_id, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// PUT /api/orders/admin/:id/status - 更新订单状态
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<OrderStatusUpdate>, JsonRejection>,
) -> AppResult<Json<OrderStatusUpdated>> {
    let key = require_storage_id(&id, "order")?;
    let Json(payload) = payload?;
    let status = non_blank(payload.status.as_deref())
        .ok_or_else(|| AppError::validation("Order status is required"))?;
    validate_required_text(status, "status", MAX_STATUS_LEN)?;

    let record = state
        .orders()
        .update_status(key, status)
        .await
        .map_err(|e| AppError::from(e).with_not_found("Order not found"))?;
    let order = Order::from(record);

    tracing::info!(order_id = %order.id, status = %order.order_status, "Order status updated");

    Ok(Json(OrderStatusUpdated {
        success: true,
        message: "Order status updated successfully".to_string(),
        order,
    }))
}
