//! Counter Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// One sequence domain: `counter:<domain>` holding the last issued value
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Counter {
    pub id: RecordId,
    #[serde(default)]
    pub seq: i64,
}
