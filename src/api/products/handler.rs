//! Product API Handlers
//!
//! None of these can fail: listing is a snapshot, creation is permissive,
//! and deleting an unknown id is treated as success.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::models::{Product, ProductCreate};

/// GET /api/products - 获取所有商品 (插入顺序快照)
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Product>> {
    Json(state.catalog.list_all())
}

/// POST /api/products - 创建商品 (空图片补默认图)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> Json<Product> {
    let product = state.catalog.create(payload);
    tracing::info!(id = product.id, name = %product.name, "Product created");
    Json(product)
}

/// DELETE /api/products/{id} - 删除商品 (不存在时为空操作)
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    state.catalog.delete(id);
    StatusCode::NO_CONTENT
}
