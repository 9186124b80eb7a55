//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Media type assumed for records stored before the upload type was kept
pub const DEFAULT_IMAGE_TYPE: &str = "image/png";

/// Product entity as served by the API
///
/// ```json
/// {
///   "id": 1,
///   "_id": "k3x9q0v7m2a1b8c4d5e6",
///   "name": "Widget",
///   "image": "data:image/jpeg;base64,...",
///   "createdAt": "2026-10-16T08:00:00Z"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Business id issued by the sequence allocator
    pub id: i64,
    /// Storage record key
    #[serde(rename = "_id")]
    pub storage_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    /// Inline data URI (`data:<media-type>;base64,<payload>`)
    pub image: String,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
}

/// Uploaded image bytes together with the media type they arrived with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub media_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, media_type: impl Into<String>) -> Self {
        Self {
            bytes,
            media_type: media_type.into(),
        }
    }
}

/// Editable product fields with their schema bounds
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ProductFields {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "price must not be negative"))]
    pub price: f64,
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,
    #[validate(range(min = 0.0, max = 5.0, message = "rating must be between 0 and 5"))]
    pub rating: f64,
    #[validate(range(min = 0, message = "stock must not be negative"))]
    pub stock: i64,
}

impl ProductFields {
    /// Build the field set, trimming the text fields
    pub fn new(
        name: &str,
        description: &str,
        price: f64,
        category: &str,
        rating: f64,
        stock: i64,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            price,
            category: category.trim().to_string(),
            rating,
            stock,
        }
    }

    /// Overlay `changes` on top of these fields.
    ///
    /// Absent values keep the current ones; provided text is trimmed.
    pub fn merged_with(&self, changes: &ProductChanges) -> Self {
        Self {
            name: changes
                .name
                .as_deref()
                .map(str::trim)
                .unwrap_or(&self.name)
                .to_string(),
            description: changes
                .description
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(&self.description)
                .to_string(),
            price: changes.price.unwrap_or(self.price),
            category: changes
                .category
                .as_deref()
                .map(str::trim)
                .unwrap_or(&self.category)
                .to_string(),
            rating: changes.rating.unwrap_or(self.rating),
            stock: changes.stock.unwrap_or(self.stock),
        }
    }
}

/// A complete, boundary-checked product creation request
#[derive(Debug, Clone)]
pub struct ProductDraft {
    pub fields: ProductFields,
    pub image: ImagePayload,
}

/// Partial product update (absent = keep current)
#[derive(Debug, Clone, Default)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub image: Option<ImagePayload>,
}
