//! Message API Handlers

use axum::Json;
use serde::Deserialize;

/// 留言内容 (只记录日志，不落库)
#[derive(Debug, Deserialize)]
pub struct MessageCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// POST /api/messages - 接收留言
pub async fn receive(Json(msg): Json<MessageCreate>) -> &'static str {
    tracing::info!(name = %msg.name, email = %msg.email, message = %msg.message, "Message received");
    "Message received successfully"
}
