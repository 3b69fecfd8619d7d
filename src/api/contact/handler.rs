//! Contact API Handlers
//!
//! The single surfaced failure path in the system: a storage error comes
//! back as a 500 carrying the underlying cause description.

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::repository::{RepoError, contact};
use crate::models::{ContactMessage, ContactMessageCreate};
use crate::utils::{AppError, AppResult};

/// POST /api/contact - 存储联系消息
pub async fn submit(
    State(state): State<ServerState>,
    Json(payload): Json<ContactMessageCreate>,
) -> AppResult<Json<ContactMessage>> {
    let saved = contact::create(&state.pool, payload)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(msg) => AppError::internal(msg),
            RepoError::Database(msg) => AppError::database(msg),
        })?;

    tracing::info!(id = saved.id, email = %saved.email, "Contact message stored");
    Ok(Json(saved))
}
