//! Product API 模块

mod form;
mod handler;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, put},
};

use crate::core::ServerState;

pub use form::{MAX_IMAGE_SIZE, ProductForm};

/// Body limit for the multipart routes: one image plus the text fields
const MAX_FORM_SIZE: usize = MAX_IMAGE_SIZE + 1024 * 1024;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/products", product_routes())
}

fn product_routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", put(handler::update).delete(handler::delete))
        .layer(DefaultBodyLimit::max(MAX_FORM_SIZE))
}
