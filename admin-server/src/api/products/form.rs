//! Multipart product form
//!
//! Text fields `name, description, price, category, rating, stock` and one
//! file field `image`. Upload rules are checked while the body is read:
//! `image/*` only, at most [`MAX_IMAGE_SIZE`] bytes.

use axum::extract::Multipart;
use axum::extract::multipart::Field;
use shared::{ImagePayload, ProductChanges, ProductDraft, ProductFields};
use validator::Validate;

use crate::utils::validation::{non_blank, parse_decimal, parse_whole};
use crate::utils::{AppError, AppResult};

/// Maximum image size (5MB)
pub const MAX_IMAGE_SIZE: usize = 5 * 1024 * 1024;

/// Raw form values as received
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub rating: Option<String>,
    pub stock: Option<String>,
    pub image: Option<ImagePayload>,
}

impl ProductForm {
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = ProductForm::default();

        while let Some(field) = multipart.next_field().await? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match name.as_str() {
                "image" => {
                    if let Some(image) = read_image(field).await? {
                        if form.image.is_some() {
                            return Err(AppError::validation("Only one image may be uploaded"));
                        }
                        form.image = Some(image);
                    }
                }
                "name" => form.name = Some(field.text().await?),
                "description" => form.description = Some(field.text().await?),
                "price" => form.price = Some(field.text().await?),
                "category" => form.category = Some(field.text().await?),
                "rating" => form.rating = Some(field.text().await?),
                "stock" => form.stock = Some(field.text().await?),
                other => {
                    tracing::debug!(field = other, "Ignoring unknown product form field");
                }
            }
        }

        Ok(form)
    }

    /// Creation: every field and the image are required
    pub fn into_draft(self) -> AppResult<ProductDraft> {
        let (Some(name), Some(description), Some(price), Some(category), Some(rating), Some(stock)) = (
            non_blank(self.name.as_deref()),
            non_blank(self.description.as_deref()),
            non_blank(self.price.as_deref()),
            non_blank(self.category.as_deref()),
            non_blank(self.rating.as_deref()),
            non_blank(self.stock.as_deref()),
        ) else {
            return Err(AppError::validation("All fields are required"));
        };

        let image = self
            .image
            .ok_or_else(|| AppError::validation("Image is required"))?;

        let fields = ProductFields::new(
            name,
            description,
            parse_decimal(price, "price")?,
            category,
            parse_decimal(rating, "rating")?,
            parse_whole(stock, "stock")?,
        );
        fields.validate()?;

        Ok(ProductDraft { fields, image })
    }

    /// Update: only what was sent. Blank numeric fields count as not sent.
    pub fn into_changes(self) -> AppResult<ProductChanges> {
        Ok(ProductChanges {
            price: non_blank(self.price.as_deref())
                .map(|p| parse_decimal(p, "price"))
                .transpose()?,
            rating: non_blank(self.rating.as_deref())
                .map(|r| parse_decimal(r, "rating"))
                .transpose()?,
            stock: non_blank(self.stock.as_deref())
                .map(|s| parse_whole(s, "stock"))
                .transpose()?,
            name: self.name,
            description: self.description,
            category: self.category,
            image: self.image,
        })
    }
}

/// Read the file part. An empty part (no file chosen) counts as absent.
async fn read_image(field: Field<'_>) -> AppResult<Option<ImagePayload>> {
    let file_name = field.file_name().map(str::to_string);
    let media_type = field
        .content_type()
        .map(str::to_string)
        .filter(|ct| ct != "application/octet-stream")
        .or_else(|| {
            file_name.as_deref().and_then(|name| {
                mime_guess::from_path(name)
                    .first()
                    .map(|m| m.essence_str().to_string())
            })
        });

    let bytes = field.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    let media_type = media_type
        .filter(|mt| mt.starts_with("image/"))
        .ok_or_else(|| AppError::validation("Only image files are allowed"))?;

    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(AppError::validation(format!(
            "Image too large. Maximum size is {} bytes ({}MB)",
            MAX_IMAGE_SIZE,
            MAX_IMAGE_SIZE / 1024 / 1024
        )));
    }

    tracing::debug!(
        file_name = ?file_name,
        media_type = %media_type,
        size = bytes.len(),
        "Product image received"
    );

    Ok(Some(ImagePayload::new(bytes.to_vec(), media_type)))
}
