//! Contact Message Repository

use chrono::Utc;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::models::{ContactMessage, ContactMessageCreate};

/// Store a contact message. `created_at` is stamped here, at write time.
pub async fn create(pool: &SqlitePool, data: ContactMessageCreate) -> RepoResult<ContactMessage> {
    let created_at = Utc::now();
    let result = sqlx::query(
        "INSERT INTO contact_message (name, email, subject, message, user_id, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    )
    .bind(&data.name)
    .bind(&data.email)
    .bind(&data.subject)
    .bind(&data.message)
    .bind(&data.user_id)
    .bind(created_at)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("contact message {id} vanished after insert")))
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ContactMessage>> {
    let row = sqlx::query_as::<_, ContactMessage>(
        "SELECT id, name, email, subject, message, user_id, created_at \
         FROM contact_message WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
