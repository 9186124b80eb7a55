//! Order API 模块
//!
//! 订单由前台系统创建，这里只开放状态更新。

mod handler;

use axum::{Router, routing::put};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", order_routes())
}

fn order_routes() -> Router<ServerState> {
    Router::new().route("/admin/{id}/status", put(handler::update_status))
}
