//! Order Model
//!
//! Orders are owned by the upstream storefront; the admin side only reads them
//! and moves `orderStatus`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order entity as served by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    /// Free-form status label (e.g. "processing", "shipped")
    pub order_status: String,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Seed payload for an order record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_status: String,
    #[serde(default)]
    pub total_amount: f64,
}

/// PUT /api/orders/admin/:id/status body
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: Option<String>,
}
