//! Order Model

use serde::{Deserialize, Serialize};
use shared::Order;
use shared::util::millis_to_datetime;
use surrealdb::RecordId;

use super::optional_record_key;

/// Stored order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub order_status: String,
    #[serde(default)]
    pub total_amount: f64,
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl From<OrderRecord> for Order {
    fn from(record: OrderRecord) -> Self {
        Order {
            id: optional_record_key(record.id.as_ref()),
            order_status: record.order_status,
            total_amount: record.total_amount,
            created_at: millis_to_datetime(record.created_at),
            updated_at: millis_to_datetime(record.updated_at.unwrap_or(record.created_at)),
        }
    }
}

/// MERGE payload for a status change
#[derive(Debug, Clone, Serialize)]
pub struct OrderStatusPatch {
    pub order_status: String,
    pub updated_at: i64,
}
