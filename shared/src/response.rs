//! API Response types
//!
//! Envelopes returned by the mutating endpoints. List endpoints return bare
//! arrays; failures use the server's error body.
//!
//! ```json
//! { "message": "Product added successfully", "product": { ... } }
//! { "success": true, "message": "Product deleted successfully", "deletedId": "..." }
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{Order, Product, Task};

/// POST /api/products
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductCreated {
    pub message: String,
    pub product: Product,
}

/// PUT /api/products/:id
#[derive(Debug, Serialize, Deserialize)]
pub struct ProductUpdated {
    pub success: bool,
    pub message: String,
    pub product: Product,
}

/// POST /api/tasks and PUT /api/tasks/:id
#[derive(Debug, Serialize, Deserialize)]
pub struct TaskSaved {
    pub message: String,
    pub task: Task,
}

/// PUT /api/orders/admin/:id/status
#[derive(Debug, Serialize, Deserialize)]
pub struct OrderStatusUpdated {
    pub success: bool,
    pub message: String,
    pub order: Order,
}

/// DELETE endpoints
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deleted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    pub message: String,
    pub deleted_id: String,
}

impl Deleted {
    /// Delete confirmation carrying `success: true`
    pub fn confirmed(message: impl Into<String>, deleted_id: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: message.into(),
            deleted_id: deleted_id.into(),
        }
    }

    /// Delete confirmation without the `success` flag
    pub fn plain(message: impl Into<String>, deleted_id: impl Into<String>) -> Self {
        Self {
            success: None,
            message: message.into(),
            deleted_id: deleted_id.into(),
        }
    }
}
