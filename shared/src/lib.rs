//! Shared types for the KSP admin backend
//!
//! API-facing models, validated drafts and response envelopes used by
//! `admin-server` and by anything that talks to its HTTP API.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use models::{
    ImagePayload, Order, OrderCreate, OrderStatusUpdate, Product, ProductChanges, ProductDraft,
    ProductFields, Task, TaskChanges, TaskCreate, TaskDraft, TaskPriority, TaskUpdate,
    UnknownPriority,
};
