//! Database Models
//!
//! Storage-side records. They carry the SurrealDB `RecordId` and epoch-ms
//! timestamps; `From<…Record>` converts them to the API models in `shared`.

pub mod counter;
pub mod order;
pub mod product;
pub mod task;

// Re-exports
pub use counter::Counter;
pub use order::{OrderRecord, OrderStatusPatch};
pub use product::{ProductPatch, ProductRecord};
pub use task::{TaskPatch, TaskRecord};

use surrealdb::RecordId;

/// Bare record key of a `table:key` id (the `_id` clients see).
///
/// Escaped keys (`⟨…⟩`) are unwrapped.
pub fn record_key(id: &RecordId) -> String {
    let full = id.to_string();
    let key = full.split_once(':').map(|(_, key)| key).unwrap_or(&full);
    key.trim_start_matches('⟨')
        .trim_end_matches('⟩')
        .to_string()
}

/// Key of an optional id, empty when the record has not been stored yet
pub fn optional_record_key(id: Option<&RecordId>) -> String {
    id.map(record_key).unwrap_or_default()
}
