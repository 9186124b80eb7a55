//! Data models
//!
//! Shared between admin-server and the dashboard (via API).
//! Storage ids are the bare record key (`_id` on the wire); product business
//! ids are `i64` issued by the server's sequence allocator.

pub mod order;
pub mod product;
pub mod task;

// Re-exports
pub use order::*;
pub use product::*;
pub use task::*;
