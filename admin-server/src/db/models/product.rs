//! Product Model

use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use shared::models::product::DEFAULT_IMAGE_TYPE;
use shared::util::millis_to_datetime;
use shared::{ImagePayload, Product, ProductDraft, ProductFields};
use surrealdb::RecordId;

use super::optional_record_key;

fn default_image_type() -> String {
    DEFAULT_IMAGE_TYPE.to_string()
}

/// Stored product
///
/// `product_id` is the business id handed out by the `product` sequence;
/// `id` is the SurrealDB record id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    pub product_id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    /// Base64 image payload
    pub image: String,
    #[serde(default = "default_image_type")]
    pub image_type: String,
    #[serde(default)]
    pub stock: i64,
    /// Epoch millis
    pub created_at: i64,
}

impl ProductRecord {
    pub fn new(product_id: i64, draft: &ProductDraft, created_at: i64) -> Self {
        let ProductFields {
            name,
            description,
            price,
            category,
            rating,
            stock,
        } = draft.fields.clone();

        Self {
            id: None,
            product_id,
            name,
            description,
            price,
            category,
            rating,
            image: STANDARD.encode(&draft.image.bytes),
            image_type: draft.image.media_type.clone(),
            stock,
            created_at,
        }
    }

    /// Editable fields of the stored product
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category.clone(),
            rating: self.rating,
            stock: self.stock,
        }
    }

    /// `data:<media-type>;base64,<payload>`
    pub fn image_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.image_type, self.image)
    }
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Product {
            storage_id: optional_record_key(record.id.as_ref()),
            image: record.image_data_uri(),
            created_at: millis_to_datetime(record.created_at),
            id: record.product_id,
            name: record.name,
            description: record.description,
            price: record.price,
            category: record.category,
            rating: record.rating,
            stock: record.stock,
        }
    }
}

/// MERGE payload for a product update.
///
/// `product_id` and `created_at` are never part of it.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPatch {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub rating: f64,
    pub stock: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_type: Option<String>,
}

impl ProductPatch {
    pub fn new(fields: ProductFields, image: Option<&ImagePayload>) -> Self {
        Self {
            name: fields.name,
            description: fields.description,
            price: fields.price,
            category: fields.category,
            rating: fields.rating,
            stock: fields.stock,
            image: image.map(|img| STANDARD.encode(&img.bytes)),
            image_type: image.map(|img| img.media_type.clone()),
        }
    }
}
