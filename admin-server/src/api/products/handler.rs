//! Product API Handlers

use axum::{
    Json,
    extract::{Multipart, Path, State, multipart::MultipartRejection},
    http::StatusCode,
};
use shared::Product;
use shared::response::{Deleted, ProductCreated, ProductUpdated};

use super::form::ProductForm;
use crate::core::ServerState;
use crate::db::models::record_key;
use crate::utils::validation::require_storage_id;
use crate::utils::{AppError, AppResult};

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products().find_all().await?;
    Ok(Json(products.into_iter().map(Product::from).collect()))
}

/// POST /api/products - 创建商品 (multipart)
///
/// 字段校验在分配序列号之前完成，失败的请求不会消耗 id。
pub async fn create(
    State(state): State<ServerState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<ProductCreated>)> {
    let draft = ProductForm::from_multipart(multipart?).await?.into_draft()?;

    let record = state.products().create(draft).await?;
    let product = Product::from(record);

    tracing::info!(
        product_id = product.id,
        storage_id = %product.storage_id,
        name = %product.name,
        "Product created"
    );

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product added successfully".to_string(),
            product,
        }),
    ))
}

/// PUT /api/products/:id - 更新商品 (multipart, 未提供的字段保持不变)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<ProductUpdated>> {
    let key = require_storage_id(&id, "product")?;
    let changes = ProductForm::from_multipart(multipart?)
        .await?
        .into_changes()?;
    let image_replaced = changes.image.is_some();

    let record = state
        .products()
        .update(key, changes)
        .await
        .map_err(|e| AppError::from(e).with_not_found("Product not found"))?;
    let product = Product::from(record);

    tracing::info!(
        product_id = product.id,
        storage_id = %product.storage_id,
        image_replaced,
        "Product updated"
    );

    Ok(Json(ProductUpdated {
        success: true,
        message: "Product updated successfully".to_string(),
        product,
    }))
}

/// DELETE /api/products/:id - 删除商品 (id 不会被复用)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Deleted>> {
    let key = require_storage_id(&id, "product")?;

    let removed = state
        .products()
        .delete(key)
        .await
        .map_err(|e| AppError::from(e).with_not_found("Product not found"))?;

    tracing::info!(
        product_id = removed.product_id,
        storage_id = %key,
        "Product deleted"
    );

    let deleted_id = removed
        .id
        .as_ref()
        .map(record_key)
        .unwrap_or_else(|| key.to_string());
    Ok(Json(Deleted::confirmed(
        "Product deleted successfully",
        deleted_id,
    )))
}
