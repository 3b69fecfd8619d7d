//! Order API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::models::{Order, OrderDraft};

/// POST /api/orders - 创建订单，返回带 id 和终态的订单
pub async fn create(State(state): State<ServerState>, Json(draft): Json<OrderDraft>) -> Json<Order> {
    Json(state.order_service.submit(draft))
}

/// GET /api/orders - 查询所有订单 (给 Admin 看)
pub async fn list(State(state): State<ServerState>) -> Json<Vec<Order>> {
    Json(state.orders.list_all())
}
